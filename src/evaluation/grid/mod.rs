//! The AGGIR grid proper: deterministic category scoring and advice selection.
//!
//! Both entry points are pure functions over a materialized answer set. The
//! scoring cascade is reproduced exactly from the reference grid, including
//! the residual GIR 5 branch.

mod advisor;
mod scorer;
pub(crate) mod tables;

pub use advisor::{advise, AdviceReport, AttentionFlag, Tip, TipSection};
pub use scorer::score;

use serde::{Deserialize, Serialize};

use super::domain::{AssessmentId, CoreItem, Gir};

/// Caller-contract violations raised at the grid boundary.
///
/// Neither variant is retryable: the collection layer must supply a complete
/// set of in-range answers before evaluation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("incomplete questionnaire: missing core answers for {missing:?}")]
    IncompleteInput { missing: Vec<CoreItem> },
    #[error("answer for {item} is outside the 0..=2 scale: {value}")]
    InvalidAnswerValue { item: String, value: i64 },
}

/// Evaluation output pairing the category with its advice trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub assessment_id: AssessmentId,
    pub gir: Gir,
    pub description: String,
    pub advice: AdviceReport,
}
