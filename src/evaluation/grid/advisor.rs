use serde::{Deserialize, Serialize};

use super::tables;
use crate::evaluation::domain::{Answer, AnswerSet, CoreItem, SupplementaryItem};

/// A core item whose answer signals a need for attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttentionFlag {
    pub item: CoreItem,
    pub answer: Answer,
    pub label: String,
}

/// One targeted recommendation, keyed by the item that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub item: String,
    pub text: String,
}

/// Tip listing that never renders as a silently empty section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TipSection {
    Findings { tips: Vec<Tip> },
    AllClear { message: String },
}

impl TipSection {
    fn from_tips(tips: Vec<Tip>, all_clear: &str) -> Self {
        if tips.is_empty() {
            TipSection::AllClear {
                message: all_clear.to_string(),
            }
        } else {
            TipSection::Findings { tips }
        }
    }

    pub fn tips(&self) -> &[Tip] {
        match self {
            TipSection::Findings { tips } => tips,
            TipSection::AllClear { .. } => &[],
        }
    }
}

/// Per-item findings and recommendations derived from the full answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceReport {
    pub attention_flags: Vec<AttentionFlag>,
    pub core_tips: TipSection,
    pub supplementary_tips: TipSection,
}

/// Select attention flags and prevention tips for an answer set.
///
/// Three independent derivations, each a threshold on individual answers.
/// Output order follows the canonical item declaration order, not the order
/// answers were collected in.
pub fn advise(answers: &AnswerSet) -> AdviceReport {
    let attention_flags: Vec<AttentionFlag> = CoreItem::ALL
        .iter()
        .copied()
        .filter_map(|item| {
            let answer = answers.core.get(&item).copied()?;
            answer.needs_attention().then(|| AttentionFlag {
                item,
                answer,
                label: answer.label().to_string(),
            })
        })
        .collect();

    let core_tips: Vec<Tip> = attention_flags
        .iter()
        .map(|flag| Tip {
            item: flag.item.display_name().to_string(),
            text: tables::core_tip(flag.item).to_string(),
        })
        .collect();

    // No distinction between "could be better" and "difficult" here: any
    // signal at all selects the item's prevention tip.
    let supplementary_tips: Vec<Tip> = SupplementaryItem::ALL
        .iter()
        .copied()
        .filter(|item| answers.supplementary_answer(*item).needs_attention())
        .map(|item| Tip {
            item: item.display_name().to_string(),
            text: tables::supplementary_tip(item).to_string(),
        })
        .collect();

    AdviceReport {
        attention_flags,
        core_tips: TipSection::from_tips(core_tips, tables::CORE_ALL_CLEAR),
        supplementary_tips: TipSection::from_tips(supplementary_tips, tables::SUPPLEMENTARY_ALL_CLEAR),
    }
}
