use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// One of the two textual syntaxes of the `.net` network-definition grammar.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Olca,
    Hugin,
}

impl Display for Dialect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Olca => write!(f, "OLCA"),
            Dialect::Hugin => write!(f, "Hugin (Genie)"),
        }
    }
}

/// Selects which variant of each rewrite rule applies during one conversion.
///
/// The default direction is [`ConversionDirection::OlcaToHugin`].
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionDirection {
    #[default]
    OlcaToHugin,
    HuginToOlca,
}

impl ConversionDirection {
    /// Dialect of the input text.
    #[must_use]
    pub fn source(self) -> Dialect {
        match self {
            ConversionDirection::OlcaToHugin => Dialect::Olca,
            ConversionDirection::HuginToOlca => Dialect::Hugin,
        }
    }

    /// Dialect of the output text.
    #[must_use]
    pub fn target(self) -> Dialect {
        self.reversed().source()
    }

    /// The direction that undoes this one.
    #[must_use]
    pub fn reversed(self) -> ConversionDirection {
        match self {
            ConversionDirection::OlcaToHugin => ConversionDirection::HuginToOlca,
            ConversionDirection::HuginToOlca => ConversionDirection::OlcaToHugin,
        }
    }

    /// Human-readable label, e.g. `OLCA → Hugin (Genie)`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{} → {}", self.source(), self.target())
    }

    /// Prefix prepended to the input file name when suggesting an output file name.
    #[must_use]
    pub fn file_prefix(self) -> &'static str {
        match self {
            ConversionDirection::OlcaToHugin => "OLCA2Hugin-",
            ConversionDirection::HuginToOlca => "Hugin2OLCA-",
        }
    }
}

impl Display for ConversionDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionDirection::OlcaToHugin => write!(f, "olca-to-hugin"),
            ConversionDirection::HuginToOlca => write!(f, "hugin-to-olca"),
        }
    }
}

/// An error raised when a string does not name a known [`ConversionDirection`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Error)]
#[error("Unknown conversion direction `{value}` (expected `to-hugin` or `to-olca`)")]
pub struct InvalidConversionDirection {
    pub value: String,
}

impl FromStr for ConversionDirection {
    type Err = InvalidConversionDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "to-hugin" | "olca-to-hugin" | "olca2hugin" => Ok(ConversionDirection::OlcaToHugin),
            "to-olca" | "hugin-to-olca" | "hugin2olca" => Ok(ConversionDirection::HuginToOlca),
            _ => Err(InvalidConversionDirection {
                value: s.to_string(),
            }),
        }
    }
}
