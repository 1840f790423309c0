//! Small helpers with no reactive state

pub mod constants;
pub mod format;
