//! Options controlling the emitted array declaration.

use serde::{Deserialize, Serialize};

use super::LiteralError;

/// How the outermost (column) dimension is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OuterBound {
    /// Emit the column count, e.g. `snek[4][3][3]`.
    #[default]
    Explicit,
    /// Leave the first bound empty, e.g. `snek[][3][3]`, and let the compiler
    /// infer it from the initializer.
    Inferred,
}

/// Declaration settings for the generated literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralOptions {
    /// Array identifier.
    pub name: String,
    /// Element type keyword placed before the identifier.
    pub element_type: String,
    pub outer_bound: OuterBound,
}

impl Default for LiteralOptions {
    fn default() -> Self {
        Self {
            name: "snek".to_string(),
            element_type: "byte".to_string(),
            outer_bound: OuterBound::Explicit,
        }
    }
}

impl LiteralOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `name` and `element_type` are usable C identifiers.
    pub fn validate(&self) -> Result<(), LiteralError> {
        for ident in [&self.name, &self.element_type] {
            if !is_c_identifier(ident) {
                return Err(LiteralError::InvalidIdentifier(ident.clone()));
            }
        }
        Ok(())
    }
}

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
