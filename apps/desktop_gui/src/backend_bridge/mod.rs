//! Backend worker: owns the async runtime for clipboard writes and exports.

pub mod commands;
pub mod runtime;
