use std::collections::BTreeMap;

use super::GridError;
use crate::evaluation::domain::{Answer, CoreItem, Gir};

/// Map a complete set of core answers to a GIR category.
///
/// The cascade is a priority list: the first matching branch wins, so the
/// branch order is part of the contract. `severe` counts answers of
/// "frequently needs help", `partial` counts "occasionally needs help".
pub fn score(core: &BTreeMap<CoreItem, Answer>) -> Result<Gir, GridError> {
    let missing: Vec<CoreItem> = CoreItem::ALL
        .iter()
        .copied()
        .filter(|item| !core.contains_key(item))
        .collect();
    if !missing.is_empty() {
        return Err(GridError::IncompleteInput { missing });
    }

    let severe = core.values().filter(|answer| answer.is_severe()).count();
    let partial = core.values().filter(|answer| answer.is_partial()).count();
    let cognitive_severe = core
        .iter()
        .any(|(item, answer)| item.is_cognitive() && answer.is_severe());

    let gir = if severe >= 4 && cognitive_severe {
        Gir::One
    } else if severe >= 2 {
        Gir::Two
    } else if severe >= 1 && partial >= 2 {
        Gir::Three
    } else if partial >= 1 {
        Gir::Four
    } else if severe == 0 && partial == 0 {
        Gir::Six
    } else {
        // Residual branch: exactly one severe answer and no partial ones.
        // The reference grid leaves this in GIR 5 rather than 6; keep it.
        Gir::Five
    };

    Ok(gir)
}
