// src/cli/display.rs
use console::style;

use crate::models::PasswordReport;
use crate::utils::format_entropy;

/// Render a report for the terminal, colored by its strength band.
/// `shown` is what to print in place of the password (it may be masked).
pub fn render_report(report: &PasswordReport, shown: &str) -> String {
    let color = report.strength.term_color();
    let mut out = String::new();

    out.push_str("Generated Password:\n");
    out.push_str(&format!("  {}\n\n", style(shown).fg(color).bold()));
    out.push_str("Strength Level:\n");
    out.push_str(&format!("  {}\n\n", style(report.strength.label()).fg(color).bold()));
    out.push_str(&format!("Entropy: {}\n", format_entropy(report.entropy_bits)));
    out.push_str(&format!("Diversity: {}/4 character classes\n", report.diversity_score));
    out.push_str(&format!("Readability Score: {}%\n", report.readability));
    out.push_str(&format!(
        "{} (by {})\n",
        report.expiry_message,
        report.change_by.format("%Y-%m-%d")
    ));
    out.push_str(&format!("Pattern Check: {}\n", report.pattern_check));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::analyze_on;
    use chrono::NaiveDate;

    #[test]
    fn test_render_contains_every_field() {
        console::set_colors_enabled(false);
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let report = analyze_on("!Xq7rTz9", today);
        let text = render_report(&report, "!Xq7rTz9");

        assert!(text.contains("!Xq7rTz9"));
        assert!(text.contains("WEAK"));
        assert!(text.contains("Entropy: 52.44 bits"));
        assert!(text.contains("Readability Score: 0%"));
        assert!(text.contains("Recommended to change after 15 days. (by 2026-03-16)"));
        assert!(text.contains("Pattern Check: No weak patterns detected."));
    }

    #[test]
    fn test_render_shows_masked_text() {
        console::set_colors_enabled(false);
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let report = analyze_on("!Xq7rTz9", today);
        let text = render_report(&report, "********");

        assert!(text.contains("********"));
        assert!(!text.contains("!Xq7rTz9"));
    }
}
