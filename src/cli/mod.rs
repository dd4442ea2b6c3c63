//! Console front end: command handlers and colored output helpers. Thin
//! consumers of the store; all ledger semantics live in the library.

pub mod commands;
pub mod output;
