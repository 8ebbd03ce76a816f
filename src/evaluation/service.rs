use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{AssessmentId, AssessmentStatus, AssessmentSubmission};
use super::grid::{self, EvaluationOutcome, GridError};
use super::intake::IntakeGuard;
use super::repository::{
    AssessmentRecord, AssessmentRepository, ReferralAlert, ReferralError, ReferralPublisher,
    RepositoryError,
};

/// Service composing the intake guard, repository, and grid evaluation.
pub struct AssessmentService<R, P> {
    guard: IntakeGuard,
    repository: Arc<R>,
    referrals: Arc<P>,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asmt-{id:06}"))
}

impl<R, P> AssessmentService<R, P>
where
    R: AssessmentRepository + 'static,
    P: ReferralPublisher + 'static,
{
    pub fn new(repository: Arc<R>, referrals: Arc<P>) -> Self {
        Self {
            guard: IntakeGuard,
            repository,
            referrals,
        }
    }

    /// Validate and store a completed questionnaire, returning the record.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let mut profile = self.guard.profile_from_submission(submission)?;
        profile.assessment_id = next_assessment_id();

        let record = AssessmentRecord {
            profile,
            status: AssessmentStatus::Submitted,
            submitted_at: Utc::now(),
            outcome: None,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Run the grid over a stored assessment and persist the outcome.
    ///
    /// Categories 1-4 open support entitlement, so those outcomes also
    /// dispatch a referral alert.
    pub fn evaluate(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<EvaluationOutcome, AssessmentServiceError> {
        let mut record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;

        let gir = grid::score(&record.profile.answers.core)?;
        let advice = grid::advise(&record.profile.answers);
        let outcome = EvaluationOutcome {
            assessment_id: record.profile.assessment_id.clone(),
            gir,
            description: gir.description().to_string(),
            advice,
        };

        record.status = AssessmentStatus::Evaluated;
        record.outcome = Some(outcome.clone());
        self.repository.update(record)?;

        if outcome.gir.is_support_eligible() {
            let mut details = BTreeMap::new();
            details.insert("gir".to_string(), outcome.gir.rank().to_string());
            self.referrals.publish(ReferralAlert {
                template: "apa_referral".to_string(),
                assessment_id: outcome.assessment_id.clone(),
                details,
            })?;
        }

        Ok(outcome)
    }

    /// Fetch an assessment and current status for API responses.
    pub fn get(
        &self,
        assessment_id: &AssessmentId,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(assessment_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Referral(#[from] ReferralError),
}
