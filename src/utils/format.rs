// src/utils/format.rs

// Hide a password behind one `*` per character
pub fn mask_password(password: &str) -> String {
    "*".repeat(password.chars().count())
}

// Format an entropy estimate for display
pub fn format_entropy(bits: f64) -> String {
    format!("{:.2} bits", bits)
}
