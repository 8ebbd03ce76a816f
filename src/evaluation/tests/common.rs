use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::evaluation::domain::{
    Answer, AnswerSet, AssessmentSubmission, CoreItem, SupplementaryItem,
};
use crate::evaluation::repository::{
    AssessmentRecord, AssessmentRepository, InMemoryRepository, ReferralAlert, ReferralError,
    ReferralPublisher, RepositoryError,
};
use crate::evaluation::router::assessment_router;
use crate::evaluation::service::AssessmentService;

/// Raw core answers: everything independent, with the given overrides.
pub(super) fn core_answers(overrides: &[(CoreItem, i64)]) -> BTreeMap<CoreItem, i64> {
    let mut answers: BTreeMap<CoreItem, i64> =
        CoreItem::ALL.iter().map(|&item| (item, 0)).collect();
    for &(item, value) in overrides {
        answers.insert(item, value);
    }
    answers
}

pub(super) fn submission(
    core_overrides: &[(CoreItem, i64)],
    supplementary: &[(SupplementaryItem, i64)],
) -> AssessmentSubmission {
    AssessmentSubmission {
        core_answers: core_answers(core_overrides),
        supplementary_answers: supplementary.iter().copied().collect(),
    }
}

/// Typed core answers for exercising the scorer directly.
pub(super) fn typed_core(overrides: &[(CoreItem, Answer)]) -> BTreeMap<CoreItem, Answer> {
    let mut answers: BTreeMap<CoreItem, Answer> = CoreItem::ALL
        .iter()
        .map(|&item| (item, Answer::Independent))
        .collect();
    for &(item, answer) in overrides {
        answers.insert(item, answer);
    }
    answers
}

pub(super) fn answer_set(
    core_overrides: &[(CoreItem, Answer)],
    supplementary: &[(SupplementaryItem, Answer)],
) -> AnswerSet {
    AnswerSet {
        core: typed_core(core_overrides),
        supplementary: supplementary.iter().copied().collect(),
    }
}

pub(super) fn build_service() -> (
    AssessmentService<InMemoryRepository, MemoryReferrals>,
    Arc<InMemoryRepository>,
    Arc<MemoryReferrals>,
) {
    let repository = Arc::new(InMemoryRepository::default());
    let referrals = Arc::new(MemoryReferrals::default());
    let service = AssessmentService::new(repository.clone(), referrals.clone());
    (service, repository, referrals)
}

pub(super) fn router_with_service(
    service: AssessmentService<InMemoryRepository, MemoryReferrals>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryReferrals {
    events: Arc<Mutex<Vec<ReferralAlert>>>,
}

impl MemoryReferrals {
    pub(super) fn events(&self) -> Vec<ReferralAlert> {
        self.events.lock().expect("referral mutex poisoned").clone()
    }
}

impl ReferralPublisher for MemoryReferrals {
    fn publish(&self, referral: ReferralAlert) -> Result<(), ReferralError> {
        self.events
            .lock()
            .expect("referral mutex poisoned")
            .push(referral);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(
        &self,
        _id: &crate::evaluation::domain::AssessmentId,
    ) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }

    fn pending(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: AssessmentRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(
        &self,
        _id: &crate::evaluation::domain::AssessmentId,
    ) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn pending(&self, _limit: usize) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
