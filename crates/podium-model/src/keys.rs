use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

pub fn parse_horizon_key(input: &str) -> Result<HorizonKey, ValidationError> {
    HorizonKey::parse(input)
}

pub fn parse_section_key(input: &str) -> Result<SectionKey, ValidationError> {
    SectionKey::parse(input)
}

/// The three roadmap stages, in presentation order.
pub const HORIZON_KEYS: [HorizonKey; 3] = [HorizonKey::H1, HorizonKey::H2, HorizonKey::H3];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HorizonKey {
    H1,
    H2,
    H3,
}

impl HorizonKey {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim() {
            "h1" => Ok(Self::H1),
            "h2" => Ok(Self::H2),
            "h3" => Ok(Self::H3),
            other => Err(ValidationError(format!(
                "unknown horizon key: {other} (expected h1, h2, or h3)"
            ))),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
        }
    }
}

impl Display for HorizonKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The five content views within a horizon, in tab order.
pub const SECTION_KEYS: [SectionKey; 5] = [
    SectionKey::Overview,
    SectionKey::Personas,
    SectionKey::Operating,
    SectionKey::Technical,
    SectionKey::Experience,
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Overview,
    Personas,
    Operating,
    Technical,
    Experience,
}

impl SectionKey {
    /// The section every horizon opens on.
    pub const DEFAULT: Self = Self::Overview;

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim() {
            "overview" => Ok(Self::Overview),
            "personas" => Ok(Self::Personas),
            "operating" => Ok(Self::Operating),
            "technical" => Ok(Self::Technical),
            "experience" => Ok(Self::Experience),
            other => Err(ValidationError(format!("unknown section key: {other}"))),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Personas => "personas",
            Self::Operating => "operating",
            Self::Technical => "technical",
            Self::Experience => "experience",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Personas => "Personas",
            Self::Operating => "Operating model",
            Self::Technical => "Technical evolution",
            Self::Experience => "Experience design",
        }
    }
}

impl Display for SectionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageTheme {
    Improve,
    Transform,
    Innovate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Accent,
    #[default]
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    #[default]
    Live,
    Expanding,
    Future,
}

impl SourceStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Expanding => "Rolling out",
            Self::Future => "Next horizon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendIndicator {
    Up,
    Steady,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizon_key_parse_roundtrip() {
        for key in HORIZON_KEYS {
            assert_eq!(HorizonKey::parse(key.as_str()).expect("parse"), key);
        }
    }

    #[test]
    fn horizon_key_parse_trims() {
        assert_eq!(HorizonKey::parse(" h2 ").expect("parse"), HorizonKey::H2);
    }

    #[test]
    fn horizon_key_parse_rejects_unknown() {
        assert!(HorizonKey::parse("h4").is_err());
        assert!(HorizonKey::parse("").is_err());
        assert!(HorizonKey::parse("H1").is_err());
    }

    #[test]
    fn section_key_parse_roundtrip() {
        for key in SECTION_KEYS {
            assert_eq!(SectionKey::parse(key.as_str()).expect("parse"), key);
        }
    }

    #[test]
    fn section_default_is_overview() {
        assert_eq!(SectionKey::DEFAULT, SectionKey::Overview);
    }

    #[test]
    fn source_status_labels() {
        assert_eq!(SourceStatus::Live.label(), "Live");
        assert_eq!(SourceStatus::Expanding.label(), "Rolling out");
        assert_eq!(SourceStatus::Future.label(), "Next horizon");
    }
}
