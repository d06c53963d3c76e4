use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Regulatory framework a check belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Gdpr,
    AiAct,
    Nis2,
    Pipa,
    Appi,
    Pdpa,
    Lgpd,
    Gulf,
    Ndpr,
    Jis,
    Sovereignty,
    Provider,
    Penguin,
}

impl Category {
    pub const ALL: [Self; 13] = [
        Self::Gdpr,
        Self::AiAct,
        Self::Nis2,
        Self::Pipa,
        Self::Appi,
        Self::Pdpa,
        Self::Lgpd,
        Self::Gulf,
        Self::Ndpr,
        Self::Jis,
        Self::Sovereignty,
        Self::Provider,
        Self::Penguin,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gdpr => "gdpr",
            Self::AiAct => "ai_act",
            Self::Nis2 => "nis2",
            Self::Pipa => "pipa",
            Self::Appi => "appi",
            Self::Pdpa => "pdpa",
            Self::Lgpd => "lgpd",
            Self::Gulf => "gulf",
            Self::Ndpr => "ndpr",
            Self::Jis => "jis",
            Self::Sovereignty => "sovereignty",
            Self::Provider => "provider",
            Self::Penguin => "penguin",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
                format!("Unknown category: {s} (expected one of: {})", known.join(", "))
            })
    }
}

/// Importance tier of a check. Ordered so that `Critical > High > ... > Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Warning,
    Failed,
    Skipped,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passed => write!(f, "passed"),
            Self::Warning => write!(f, "warning"),
            Self::Failed => write!(f, "failed"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// Letter grade derived from the 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map a score to its grade. Thresholds are inclusive lower bounds.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Self::A,
            80..=89 => Self::B,
            70..=79 => Self::C,
            60..=69 => Self::D,
            _ => Self::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        f.write_str(letter)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
