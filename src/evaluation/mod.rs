//! Autonomy assessment intake, grid scoring, and advice selection.
//!
//! The grid itself (`grid::score`, `grid::advise`) is a pair of pure
//! functions over a materialized answer set; the surrounding modules supply
//! the intake validation, storage seam, and HTTP surface the wizard layer
//! talks to.

pub mod domain;
pub mod grid;
pub(crate) mod intake;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Answer, AnswerSet, AssessmentId, AssessmentProfile, AssessmentStatus, AssessmentSubmission,
    CoreItem, Gir, SupplementaryItem,
};
pub use grid::{
    advise, score, AdviceReport, AttentionFlag, EvaluationOutcome, GridError, Tip, TipSection,
};
pub use intake::IntakeGuard;
pub use repository::{
    AssessmentRecord, AssessmentRepository, AssessmentStatusView, InMemoryRepository,
    LogReferralPublisher, ReferralAlert, ReferralError, ReferralPublisher, RepositoryError,
};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
