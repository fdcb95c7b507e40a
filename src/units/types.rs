use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical quantity an expression is parsed as
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum QuantityKind {
    Length,
    Force,
    Moment,
    ForcePerLength,
    ForcePerArea,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 5] = [
        QuantityKind::Length,
        QuantityKind::Force,
        QuantityKind::Moment,
        QuantityKind::ForcePerLength,
        QuantityKind::ForcePerArea,
    ];

    /// Unit every value of this kind is stored in
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            QuantityKind::Length => "in",
            QuantityKind::Force => "lb",
            QuantityKind::Moment => "lb-in",
            QuantityKind::ForcePerLength => "lb/in",
            QuantityKind::ForcePerArea => "lb/in^2",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QuantityKind::Length => "length",
            QuantityKind::Force => "force",
            QuantityKind::Moment => "moment",
            QuantityKind::ForcePerLength => "force_per_length",
            QuantityKind::ForcePerArea => "force_per_area",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuantityKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s || kind.name().replace('_', "-") == s)
            .ok_or_else(|| format!("Unknown quantity kind: {}", s))
    }
}

/// Display notation a canonical value can be rendered in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum DisplayUnit {
    /// `40"`
    Inches,
    /// `3' 4" `
    FeetInches,
    /// `3&#39; 4&#34; ` for HTML output
    FeetInchesCodes,
    Kips,
    KipFeet,
    KipsPerFoot,
    Ksi,
}

impl DisplayUnit {
    pub fn kind(&self) -> QuantityKind {
        match self {
            DisplayUnit::Inches | DisplayUnit::FeetInches | DisplayUnit::FeetInchesCodes => {
                QuantityKind::Length
            }
            DisplayUnit::Kips => QuantityKind::Force,
            DisplayUnit::KipFeet => QuantityKind::Moment,
            DisplayUnit::KipsPerFoot => QuantityKind::ForcePerLength,
            DisplayUnit::Ksi => QuantityKind::ForcePerArea,
        }
    }

    pub fn default_for(kind: QuantityKind) -> Self {
        match kind {
            QuantityKind::Length => DisplayUnit::FeetInches,
            QuantityKind::Force => DisplayUnit::Kips,
            QuantityKind::Moment => DisplayUnit::KipFeet,
            QuantityKind::ForcePerLength => DisplayUnit::KipsPerFoot,
            QuantityKind::ForcePerArea => DisplayUnit::Ksi,
        }
    }

    /// Default-unit hint under which the formatted string parses back.
    ///
    /// The two-decimal displays carry no unit suffix, so re-parsing them
    /// relies on the bare-number hint.
    pub fn reparse_hint(&self) -> Option<&'static str> {
        match self {
            DisplayUnit::Kips => Some("kips"),
            DisplayUnit::KipFeet => Some("kip-ft"),
            DisplayUnit::KipsPerFoot => Some("kip/ft"),
            DisplayUnit::Inches
            | DisplayUnit::FeetInches
            | DisplayUnit::FeetInchesCodes
            | DisplayUnit::Ksi => None,
        }
    }
}

/// Successful parse with the form that recognized the input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedQuantity {
    pub kind: QuantityKind,
    /// Input as given by the caller
    pub input: String,
    /// Name of the recognizing form, `"bare-number"` for unit-less input
    pub form: &'static str,
    /// Value in the kind's canonical unit
    pub value: f64,
    pub canonical_unit: &'static str,
}
