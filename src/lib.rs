//! GIR autonomy screening: questionnaire intake, deterministic grid scoring,
//! and targeted prevention advice.

pub mod config;
pub mod error;
pub mod evaluation;
pub mod telemetry;
