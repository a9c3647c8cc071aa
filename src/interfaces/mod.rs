//! Adapters between the outside world (scripts, files, terminals) and the
//! application layer.

pub mod csv;
pub mod receipt;
pub mod script;
pub mod text;
