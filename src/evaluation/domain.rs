use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// The ten AGGIR daily-living items, declared in canonical questionnaire order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CoreItem {
    Coherence,
    Orientation,
    Bathing,
    Dressing,
    Eating,
    Elimination,
    Transfers,
    IndoorMobility,
    OutdoorMobility,
    Communication,
}

impl CoreItem {
    /// Canonical ordering used for flags and tips.
    pub const ALL: [CoreItem; 10] = [
        CoreItem::Coherence,
        CoreItem::Orientation,
        CoreItem::Bathing,
        CoreItem::Dressing,
        CoreItem::Eating,
        CoreItem::Elimination,
        CoreItem::Transfers,
        CoreItem::IndoorMobility,
        CoreItem::OutdoorMobility,
        CoreItem::Communication,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            CoreItem::Coherence => "Coherence",
            CoreItem::Orientation => "Orientation",
            CoreItem::Bathing => "Bathing",
            CoreItem::Dressing => "Dressing",
            CoreItem::Eating => "Eating",
            CoreItem::Elimination => "Elimination",
            CoreItem::Transfers => "Transfers",
            CoreItem::IndoorMobility => "Indoor mobility",
            CoreItem::OutdoorMobility => "Outdoor mobility",
            CoreItem::Communication => "Communication",
        }
    }

    /// Coherence and orientation carry special weight in the grid cascade.
    pub const fn is_cognitive(self) -> bool {
        matches!(self, CoreItem::Coherence | CoreItem::Orientation)
    }
}

/// The seven lifestyle items; never scored, only used for prevention advice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SupplementaryItem {
    PhysicalActivity,
    Nutrition,
    Sleep,
    SensoryHealth,
    HomeSafety,
    SocialTies,
    Administrative,
}

impl SupplementaryItem {
    pub const ALL: [SupplementaryItem; 7] = [
        SupplementaryItem::PhysicalActivity,
        SupplementaryItem::Nutrition,
        SupplementaryItem::Sleep,
        SupplementaryItem::SensoryHealth,
        SupplementaryItem::HomeSafety,
        SupplementaryItem::SocialTies,
        SupplementaryItem::Administrative,
    ];

    pub const fn display_name(self) -> &'static str {
        match self {
            SupplementaryItem::PhysicalActivity => "Physical activity",
            SupplementaryItem::Nutrition => "Nutrition and hydration",
            SupplementaryItem::Sleep => "Sleep",
            SupplementaryItem::SensoryHealth => "Vision and hearing",
            SupplementaryItem::HomeSafety => "Home safety",
            SupplementaryItem::SocialTies => "Social ties",
            SupplementaryItem::Administrative => "Paperwork and budget",
        }
    }
}

/// Ordinal answer to a questionnaire item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Independent,
    Occasional,
    Frequent,
}

impl Answer {
    /// Parse the raw wizard value (0, 1, or 2); anything else is a caller defect.
    pub const fn from_raw(value: i64) -> Option<Self> {
        match value {
            0 => Some(Answer::Independent),
            1 => Some(Answer::Occasional),
            2 => Some(Answer::Frequent),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Answer::Independent => "manages independently",
            Answer::Occasional => "occasionally needs help",
            Answer::Frequent => "frequently needs help",
        }
    }

    pub const fn is_severe(self) -> bool {
        matches!(self, Answer::Frequent)
    }

    pub const fn is_partial(self) -> bool {
        matches!(self, Answer::Occasional)
    }

    pub const fn needs_attention(self) -> bool {
        !matches!(self, Answer::Independent)
    }
}

/// Immutable answer set produced by intake; never mutated after construction.
///
/// The core map always holds all ten items once validated. Supplementary items
/// are optional; an absent item means no issue was signaled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    pub core: BTreeMap<CoreItem, Answer>,
    pub supplementary: BTreeMap<SupplementaryItem, Answer>,
}

impl AnswerSet {
    pub fn supplementary_answer(&self, item: SupplementaryItem) -> Answer {
        self.supplementary
            .get(&item)
            .copied()
            .unwrap_or(Answer::Independent)
    }
}

/// Raw questionnaire payload as collected by the wizard layer.
///
/// Answers arrive as plain integers so the intake guard can reject
/// out-of-range values before anything is typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub core_answers: BTreeMap<CoreItem, i64>,
    #[serde(default)]
    pub supplementary_answers: BTreeMap<SupplementaryItem, i64>,
}

/// Validated assessment produced by intake, ready for grid evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentProfile {
    pub assessment_id: AssessmentId,
    pub answers: AnswerSet,
}

/// GIR autonomy-loss category; 1 is the most severe, 6 the most autonomous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Gir {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl Gir {
    pub const fn rank(self) -> u8 {
        match self {
            Gir::One => 1,
            Gir::Two => 2,
            Gir::Three => 3,
            Gir::Four => 4,
            Gir::Five => 5,
            Gir::Six => 6,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Gir::One => "Very heavy loss of autonomy; continuous assistance is required.",
            Gir::Two => {
                "Substantial assistance; confinement to bed or chair, or marked cognitive impairment."
            }
            Gir::Three => "Assistance several times a day for bodily autonomy.",
            Gir::Four => "Occasional assistance for certain activities (transfers, bathing, meals).",
            Gir::Five => "Overall autonomy preserved; housekeeping or prevention support may help.",
            Gir::Six => "Autonomous for the essential activities of daily living.",
        }
    }

    /// GIR 1-4 generally open entitlement to departmental autonomy support.
    pub const fn is_support_eligible(self) -> bool {
        self.rank() <= 4
    }

    pub const fn support_pathway(self) -> &'static str {
        if self.is_support_eligible() {
            "File an autonomy support request (combined APA and pension-fund dossier) with your departmental council."
        } else {
            "Consider prevention support through your pension fund (most often the CARSAT)."
        }
    }
}

impl From<Gir> for u8 {
    fn from(gir: Gir) -> Self {
        gir.rank()
    }
}

impl TryFrom<u8> for Gir {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Gir::One),
            2 => Ok(Gir::Two),
            3 => Ok(Gir::Three),
            4 => Ok(Gir::Four),
            5 => Ok(Gir::Five),
            6 => Ok(Gir::Six),
            other => Err(format!("GIR category must be 1..=6, got {other}")),
        }
    }
}

/// High level status tracked throughout the assessment workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Submitted,
    Evaluated,
}

impl AssessmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentStatus::Submitted => "submitted",
            AssessmentStatus::Evaluated => "evaluated",
        }
    }
}
