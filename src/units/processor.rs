use crate::config::Config;
use crate::units::error::UnitError;
use crate::units::parser::{parse_detailed, try_parse_quantity};
use crate::units::types::QuantityKind;
use toml::{Table, Value};

/// Normalize quantity fields of a TOML document to canonical units
pub struct UnitProcessor {
    config: Config,
}

impl UnitProcessor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse one value of a known kind.
    /// Strings go through the full dispatcher, numbers are treated as unit-less.
    pub fn process_value(&self, kind: QuantityKind, value: &Value) -> Result<Value, UnitError> {
        let default_unit = self.config.default_unit(kind);
        match value {
            Value::String(s) => {
                parse_detailed(kind, s, default_unit).map(|parsed| Value::Float(parsed.value))
            }
            Value::Integer(i) => {
                try_parse_quantity(kind, &i.to_string(), default_unit).map(Value::Float)
            }
            Value::Float(f) => {
                try_parse_quantity(kind, &f.to_string(), default_unit).map(Value::Float)
            }
            Value::Array(items) => {
                let processed: Result<Vec<Value>, UnitError> = items
                    .iter()
                    .map(|item| self.process_value(kind, item))
                    .collect();
                Ok(Value::Array(processed?))
            }
            other => Err(UnitError::Unrecognized {
                kind,
                input: other.to_string(),
            }),
        }
    }

    /// Process a table: mapped fields become floats with the original string
    /// kept under `_<field>_original`; nested tables and arrays are walked.
    /// Values that fail to parse are kept unchanged.
    pub fn process_table(&self, table: &Table) -> Table {
        let mut processed = Table::new();

        for (key, value) in table {
            let Some(kind) = self.config.kind_for_field(key) else {
                processed.insert(key.clone(), self.process_nested(value));
                continue;
            };

            match self.process_value(kind, value) {
                Ok(normalized) => {
                    processed.insert(key.clone(), normalized);
                    if let Value::String(s) = value {
                        let original_key = format!("_{}_original", key);
                        processed.insert(original_key, Value::String(s.clone()));
                    }
                }
                Err(e) => {
                    tracing::warn!(field = %key, "Failed to parse unit value: {}", e);
                    processed.insert(key.clone(), value.clone());
                }
            }
        }

        processed
    }

    fn process_nested(&self, value: &Value) -> Value {
        match value {
            Value::Table(table) => Value::Table(self.process_table(table)),
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.process_nested(item)).collect())
            }
            _ => value.clone(),
        }
    }
}
