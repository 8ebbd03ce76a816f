//! Static advice tables carried over from the reference questionnaire.
//!
//! Lookups are exhaustive matches over the item enums, so a missing entry is
//! a compile error rather than a runtime condition.

use crate::evaluation::domain::{CoreItem, SupplementaryItem};

pub(crate) const CORE_ALL_CLEAR: &str =
    "No particular need signaled. Stay attentive to how you feel; it is the best indicator.";

pub(crate) const SUPPLEMENTARY_ALL_CLEAR: &str =
    "Nothing particular to report. Keep up the good momentum.";

pub(crate) const fn core_tip(item: CoreItem) -> &'static str {
    match item {
        CoreItem::Coherence => {
            "Talk with someone close every day, keep a small notebook of reference points (appointments, medication), and consult if troubles appear."
        }
        CoreItem::Orientation => {
            "Keep a calendar and clock clearly visible, hold to stable daily routines, and arrange occasional accompaniment on new routes."
        }
        CoreItem::Bathing => {
            "Install grab bars, a non-slip mat, and a shower seat. Lay out everything needed within reach."
        }
        CoreItem::Dressing => {
            "Prefer clothes that are easy to put on (velcro, simple fasteners) and sit down to get dressed."
        }
        CoreItem::Eating => {
            "Keep meals regular, hydrate throughout the day, and consider meal delivery if needed."
        }
        CoreItem::Elimination => {
            "Keep the way to the toilet clear, add a raised seat or handles, light the path at night, and watch for leaks or infections."
        }
        CoreItem::Transfers => {
            "Use a stable chair and a bed at the right height, move deliberately, and consider a technical aid (cane, stand-assist)."
        }
        CoreItem::IndoorMobility => {
            "Clear the walkways, remove slippery rugs, and add automatic lighting (motion detectors)."
        }
        CoreItem::OutdoorMobility => {
            "Arrange accompanied outings when needed, stick to familiar routes, use a cane or walker, and request a priority card if eligible."
        }
        CoreItem::Communication => {
            "Use a simplified telephone, keep emergency numbers as favorites, and consider an alert pendant or bracelet if isolated."
        }
    }
}

pub(crate) const fn supplementary_tip(item: SupplementaryItem) -> &'static str {
    match item {
        SupplementaryItem::PhysicalActivity => {
            "Moving a little every day (gentle walking, seated or standing exercises), even 10 to 15 minutes, is very useful."
        }
        SupplementaryItem::Nutrition => {
            "Split meals through the day, vary textures, and think of hot or cold drinks, soups, and compotes."
        }
        SupplementaryItem::Sleep => {
            "Keep a regular rhythm, get natural light during the day, limit screens in the evening, and try a herbal tea if needed."
        }
        SupplementaryItem::SensoryHealth => {
            "Have vision and hearing checked yearly, keep glasses and hearing aids clean, and ensure good lighting and contrast at home."
        }
        SupplementaryItem::HomeSafety => {
            "Remove obstacles, add non-slip mats and grab bars, and place night lights along the way."
        }
        SupplementaryItem::SocialTies => {
            "Call someone close, drop in at the local association or club, and welcome friendly visits."
        }
        SupplementaryItem::Administrative => {
            "Set up automatic payments, keep papers in one place, and ask for social support if paperwork becomes heavy."
        }
    }
}
