//! CLI library components for rowkeep.

pub mod form_args;
pub mod logging;
