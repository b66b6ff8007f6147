//! The IR translator: lowers a semantically analyzed AST into three-address
//! intermediate code.
//!
//! [`Translator`] is the single entry point. Build one per compilation
//! unit, feed it a [`ic_core::ast::Program`], then read back the emitted
//! [`ic_core::ic::InstrList`] (or its textual dump) and any diagnostics.

pub mod error;
mod translator;

pub use translator::Translator;
