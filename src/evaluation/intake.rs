use std::collections::BTreeMap;

use super::domain::{
    Answer, AnswerSet, AssessmentId, AssessmentProfile, AssessmentSubmission, CoreItem,
    SupplementaryItem,
};
use super::grid::GridError;

/// Guard responsible for producing `AssessmentProfile` instances.
///
/// This is the completeness and range enforcement the wizard layer owes the
/// grid: nothing past this point can hold an out-of-range answer value.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Convert an inbound submission into a validated assessment profile.
    pub fn profile_from_submission(
        &self,
        submission: AssessmentSubmission,
    ) -> Result<AssessmentProfile, GridError> {
        let mut core: BTreeMap<CoreItem, Answer> = BTreeMap::new();
        for (item, raw) in submission.core_answers {
            let answer = Answer::from_raw(raw).ok_or_else(|| GridError::InvalidAnswerValue {
                item: item.display_name().to_string(),
                value: raw,
            })?;
            core.insert(item, answer);
        }

        let missing: Vec<CoreItem> = CoreItem::ALL
            .iter()
            .copied()
            .filter(|item| !core.contains_key(item))
            .collect();
        if !missing.is_empty() {
            return Err(GridError::IncompleteInput { missing });
        }

        let mut supplementary: BTreeMap<SupplementaryItem, Answer> = BTreeMap::new();
        for (item, raw) in submission.supplementary_answers {
            let answer = Answer::from_raw(raw).ok_or_else(|| GridError::InvalidAnswerValue {
                item: item.display_name().to_string(),
                value: raw,
            })?;
            supplementary.insert(item, answer);
        }

        Ok(AssessmentProfile {
            assessment_id: AssessmentId("pending".to_string()),
            answers: AnswerSet {
                core,
                supplementary,
            },
        })
    }
}
