// src/strength.rs
use chrono::{Duration, Local, NaiveDate};
use console::Color;
use serde::Serialize;

use crate::models::PasswordReport;

const VOWELS: &str = "aeiouAEIOU";
const PUNCTUATION_POOL: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Strength {
    #[serde(rename = "VERY WEAK")]
    VeryWeak,
    #[serde(rename = "WEAK")]
    Weak,
    #[serde(rename = "DECENT")]
    Decent,
    #[serde(rename = "GOOD")]
    Good,
    #[serde(rename = "STRONG")]
    Strong,
    #[serde(rename = "VERY STRONG")]
    VeryStrong,
    #[serde(rename = "EXCELLENT")]
    Excellent,
}

impl Strength {
    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "VERY WEAK",
            Strength::Weak => "WEAK",
            Strength::Decent => "DECENT",
            Strength::Good => "GOOD",
            Strength::Strong => "STRONG",
            Strength::VeryStrong => "VERY STRONG",
            Strength::Excellent => "EXCELLENT",
        }
    }

    /// Hex color of the band, as shown behind the result.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "#6d0001",
            Strength::Weak => "#cc0000",
            Strength::Decent => "#fc8600",
            Strength::Good => "#eae200",
            Strength::Strong => "#9ff400",
            Strength::VeryStrong => "#001fef",
            Strength::Excellent => "#007715",
        }
    }

    // Closest xterm-256 color to `color_hex`
    pub fn term_color(&self) -> Color {
        match self {
            Strength::VeryWeak => Color::Color256(52),
            Strength::Weak => Color::Color256(160),
            Strength::Decent => Color::Color256(208),
            Strength::Good => Color::Color256(184),
            Strength::Strong => Color::Color256(154),
            Strength::VeryStrong => Color::Color256(21),
            Strength::Excellent => Color::Color256(28),
        }
    }

    /// Days after which a password of this strength should be rotated.
    pub fn expiry_days(&self) -> u32 {
        match self {
            Strength::VeryWeak => 7,
            Strength::Weak => 15,
            Strength::Decent => 30,
            Strength::Good => 60,
            Strength::Strong => 90,
            Strength::VeryStrong => 180,
            Strength::Excellent => 365,
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeakPattern {
    Sequential,
    Repeated,
}

impl WeakPattern {
    pub fn description(&self) -> &'static str {
        match self {
            WeakPattern::Sequential => "Contains sequential characters (e.g., abc or 123)",
            WeakPattern::Repeated => "Contains repeated characters (e.g., aaa)",
        }
    }
}

pub fn pattern_message(pattern: Option<WeakPattern>) -> &'static str {
    pattern.map_or("No weak patterns detected.", |p| p.description())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(char::is_lowercase)
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(char::is_uppercase)
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_punctuation(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_punctuation())
}

/// Number of character classes present: lowercase, uppercase, digit, punctuation.
pub fn diversity_score(password: &str) -> u8 {
    [
        has_lowercase(password),
        has_uppercase(password),
        has_digit(password),
        has_punctuation(password),
    ]
    .iter()
    .filter(|present| **present)
    .count() as u8
}

// Length decides the band; diversity only splits the top one.
pub fn evaluate_strength(password: &str) -> Strength {
    let length = password.chars().count();

    if length < 8 {
        Strength::VeryWeak
    } else if length < 10 {
        Strength::Weak
    } else if length < 12 {
        Strength::Decent
    } else if length < 14 {
        Strength::Good
    } else if length < 16 {
        Strength::Strong
    } else if diversity_score(password) == 4 {
        Strength::Excellent
    } else {
        Strength::VeryStrong
    }
}

/// Estimated bits of randomness: `length * log2(pool)`, where the pool is the
/// union of the character classes the password actually uses.
pub fn calculate_entropy(password: &str) -> f64 {
    let mut pool_size = 0;
    if has_lowercase(password) {
        pool_size += 26;
    }
    if has_uppercase(password) {
        pool_size += 26;
    }
    if has_digit(password) {
        pool_size += 10;
    }
    if has_punctuation(password) {
        pool_size += PUNCTUATION_POOL;
    }

    if pool_size == 0 {
        return 0.0;
    }

    password.chars().count() as f64 * (pool_size as f64).log2()
}

/// Share of vowel-to-consonant transitions, as a percentage capped at 100.
pub fn readability_score(password: &str) -> u8 {
    let chars: Vec<char> = password.chars().collect();
    if chars.is_empty() {
        return 0;
    }

    let transitions = chars
        .windows(2)
        .filter(|pair| VOWELS.contains(pair[0]) && !VOWELS.contains(pair[1]))
        .count();

    (transitions * 100 / chars.len()).min(100) as u8
}

pub fn expiry_recommendation(strength: Strength) -> String {
    format!("Recommended to change after {} days.", strength.expiry_days())
}

/// First weak pattern found scanning 3-character windows left to right.
pub fn detect_weak_patterns(password: &str) -> Option<WeakPattern> {
    let chars: Vec<char> = password.chars().collect();

    for window in chars.windows(3) {
        let sequential = window
            .windows(2)
            .all(|pair| (pair[0] as u32).checked_add(1) == Some(pair[1] as u32));
        if sequential {
            return Some(WeakPattern::Sequential);
        }
        if window[0] == window[1] && window[1] == window[2] {
            return Some(WeakPattern::Repeated);
        }
    }

    None
}

pub fn analyze(password: &str) -> PasswordReport {
    analyze_on(password, Local::now().date_naive())
}

pub fn analyze_on(password: &str, today: NaiveDate) -> PasswordReport {
    let strength = evaluate_strength(password);
    let expiry_days = strength.expiry_days();

    PasswordReport {
        password: password.to_string(),
        length: password.chars().count(),
        strength,
        color: strength.color_hex().to_string(),
        entropy_bits: calculate_entropy(password),
        diversity_score: diversity_score(password),
        readability: readability_score(password),
        expiry_days,
        expiry_message: expiry_recommendation(strength),
        change_by: today + Duration::days(i64::from(expiry_days)),
        pattern_check: pattern_message(detect_weak_patterns(password)).to_string(),
    }
}
