//! Errors the CLI boundary needs to report.
//!
//! The translator itself never returns a `Result` from its lowering
//! functions -- upstream semantic failures are trusted-invariant
//! violations and panic (see `Translator::translate_ext_def`'s handling of
//! unresolved names), and a duplicate function definition just causes that
//! one ext-def to be silently skipped (recorded in
//! [`Translator::skipped`](crate::Translator::skipped) for callers that
//! want to report it). This type exists only so a host process (the CLI)
//! can turn "N ext-defs were skipped" into a clean, non-panicking exit path
//! rather than inspecting internal state by hand.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("{0} ext-def(s) skipped due to duplicate function registration")]
    SkippedExtDefs(usize),
}
