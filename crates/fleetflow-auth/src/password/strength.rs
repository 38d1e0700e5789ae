//! Password strength classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Informational strength rating for a candidate password.
///
/// The rating never blocks registration; only the length floor enforced by
/// [`PasswordPolicy`](super::PasswordPolicy) does. One point each for:
/// length of at least 8, an ASCII uppercase letter, an ASCII digit, and a
/// non-alphanumeric character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    /// One criterion met.
    Weak,
    /// Two criteria met.
    Fair,
    /// Three criteria met.
    Good,
    /// All four criteria met.
    Strong,
}

impl PasswordStrength {
    /// Score a password on the 0–4 criteria scale.
    pub fn score(password: &str) -> u8 {
        let mut score = 0;
        if password.chars().count() >= 8 {
            score += 1;
        }
        if password.chars().any(|c| c.is_ascii_uppercase()) {
            score += 1;
        }
        if password.chars().any(|c| c.is_ascii_digit()) {
            score += 1;
        }
        if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
            score += 1;
        }
        score
    }

    /// Classify a password, or `None` when no criterion is met (including
    /// the empty password, where the meter shows its prompt instead).
    pub fn classify(password: &str) -> Option<Self> {
        match Self::score(password) {
            0 => None,
            1 => Some(Self::Weak),
            2 => Some(Self::Fair),
            3 => Some(Self::Good),
            _ => Some(Self::Strong),
        }
    }

    /// The meter label for this rating.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_map() {
        assert_eq!(PasswordStrength::classify(""), None);
        assert_eq!(
            PasswordStrength::classify("password"),
            Some(PasswordStrength::Weak)
        );
        assert_eq!(
            PasswordStrength::classify("Password"),
            Some(PasswordStrength::Fair)
        );
        assert_eq!(
            PasswordStrength::classify("Password1"),
            Some(PasswordStrength::Good)
        );
        assert_eq!(
            PasswordStrength::classify("Fleet@2024"),
            Some(PasswordStrength::Strong)
        );
    }

    #[test]
    fn test_short_passwords_still_rated() {
        // Criteria other than length apply below the length floor; the
        // rating is informational and never gates registration itself.
        assert_eq!(
            PasswordStrength::classify("Ab1!"),
            Some(PasswordStrength::Good)
        );
    }
}
