//! Translation-time diagnostics for violated "Assumptions".
//!
//! These are the only diagnostics the translator itself produces -- every
//! other error (unresolved name, missing specifier, duplicate function) is
//! either an upstream semantic-analysis failure the translator trusts, or a
//! symbol-table registration conflict it silently skips code for.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single translation-time assumption violation, tied to a source line.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TranslationError {
    #[error("Line {line}: Assumption 1 is violated. Floats are not allowed.")]
    FloatNotAllowed { line: u32 },

    #[error("Line {line}: Assumption 4 is violated. Global variables are not allowed.")]
    GlobalVariableNotAllowed { line: u32 },
}

impl TranslationError {
    pub fn line(&self) -> u32 {
        match self {
            TranslationError::FloatNotAllowed { line } => *line,
            TranslationError::GlobalVariableNotAllowed { line } => *line,
        }
    }
}
