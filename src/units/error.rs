use crate::units::types::QuantityKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    /// No form of the kind's catalog recognized the input
    #[error("Unrecognized {kind} expression: '{input}'")]
    Unrecognized { kind: QuantityKind, input: String },

    /// Unit-less input whose literal is not a number (e.g. a lone sign)
    #[error("Invalid {kind} number: '{input}'")]
    InvalidNumber { kind: QuantityKind, input: String },

    /// A form recognized the input but its splitter or numeric check failed.
    /// Points at a recognizer/splitter mismatch rather than bad user input.
    #[error("Error parsing {form} ({kind}): '{input}'")]
    Extraction {
        kind: QuantityKind,
        form: &'static str,
        input: String,
    },
}

impl UnitError {
    /// True for extraction failures on input a recognizer already accepted
    pub fn is_internal(&self) -> bool {
        matches!(self, UnitError::Extraction { .. })
    }

    pub fn kind(&self) -> QuantityKind {
        match self {
            UnitError::Unrecognized { kind, .. }
            | UnitError::InvalidNumber { kind, .. }
            | UnitError::Extraction { kind, .. } => *kind,
        }
    }
}
