use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AssessmentId, AssessmentProfile, AssessmentStatus};
use super::grid::EvaluationOutcome;

/// Repository record containing the profile, outcome, and status metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub profile: AssessmentProfile,
    pub status: AssessmentStatus,
    pub submitted_at: DateTime<Utc>,
    pub outcome: Option<EvaluationOutcome>,
}

impl AssessmentRecord {
    pub fn outcome_summary(&self) -> String {
        match &self.outcome {
            Some(outcome) => format!("GIR {}: {}", outcome.gir.rank(), outcome.description),
            None => "pending evaluation".to_string(),
        }
    }

    pub fn status_view(&self) -> AssessmentStatusView {
        AssessmentStatusView {
            assessment_id: self.profile.assessment_id.clone(),
            status: self.status.label(),
            outcome_summary: self.outcome_summary(),
            gir: self.outcome.as_ref().map(|outcome| outcome.gir.rank()),
            next_step: self
                .outcome
                .as_ref()
                .map(|outcome| outcome.gir.support_pathway().to_string()),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    fn pending(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing outbound referral hooks (departmental APA intake, e-mail).
pub trait ReferralPublisher: Send + Sync {
    fn publish(&self, referral: ReferralAlert) -> Result<(), ReferralError>;
}

/// Referral payload emitted when a category opens support entitlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralAlert {
    pub template: String,
    pub assessment_id: AssessmentId,
    pub details: BTreeMap<String, String>,
}

/// Referral dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum ReferralError {
    #[error("referral transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of an assessment's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentStatusView {
    pub assessment_id: AssessmentId,
    pub status: &'static str,
    pub outcome_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gir: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_step: Option<String>,
}

/// Process-local repository backing the default server deployment.
#[derive(Default, Clone)]
pub struct InMemoryRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: AssessmentRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.profile.assessment_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.outcome.is_none())
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Referral publisher that records dispatches in the service log.
#[derive(Default, Clone)]
pub struct LogReferralPublisher;

impl ReferralPublisher for LogReferralPublisher {
    fn publish(&self, referral: ReferralAlert) -> Result<(), ReferralError> {
        tracing::info!(
            template = %referral.template,
            assessment_id = %referral.assessment_id.0,
            "referral dispatched"
        );
        Ok(())
    }
}
