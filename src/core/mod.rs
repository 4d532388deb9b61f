//! Calculation engine: codec, input buffer, step ledger, fold evaluator and
//! the key-driven session, plus the history logic built on them.

pub mod buffer;
pub mod codec;
pub mod evaluator;
pub mod history;
pub mod ledger;
pub mod session;
