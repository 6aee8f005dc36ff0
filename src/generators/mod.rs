pub mod password;

pub use password::{PasswordGenerator, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
