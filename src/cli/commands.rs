// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password without prompting
    Generate {
        /// Password length (minimum 4); defaults to DEFAULT_PASSWORD_LENGTH
        #[arg(long, short)]
        length: Option<usize>,

        /// Extra characters to add to the pool
        #[arg(long, short)]
        include: Option<String>,

        /// Characters that must never appear
        #[arg(long, short)]
        exclude: Option<String>,

        /// Open the interactive result view afterwards
        #[arg(long)]
        view: bool,
    },

    /// Score an existing password
    Analyze {
        /// Password to analyze; prompted for (hidden) when omitted
        password: Option<String>,
    },
}
