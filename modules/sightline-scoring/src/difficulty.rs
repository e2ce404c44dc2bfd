use sightline_common::Intent;

use crate::intent::purchase_intent;
use crate::likelihood::QUESTION_PREFIXES;

/// Estimate how hard a term is to rank for, 0–100.
///
/// Base difficulty comes from the volume tier. Short head terms carry a
/// penalty (everyone competes for them), commercial terms carry another
/// (ad-heavy SERPs), long-tail and question phrasing discount it.
pub fn keyword_difficulty(term: &str, volume: u32) -> u8 {
    let lowered = term.to_lowercase();
    let words = lowered.split_whitespace().count();

    let mut score: i32 = match volume {
        v if v >= 10_000 => 40,
        v if v >= 5_000 => 30,
        v if v >= 1_000 => 20,
        _ => 10,
    };

    score += match words {
        1 => 30,
        2 => 20,
        3 => 10,
        _ => 0,
    };

    if purchase_intent(&lowered) != Intent::Low {
        score += 15;
    }
    if words >= 5 {
        score -= 15;
    }
    if QUESTION_PREFIXES.iter().any(|p| lowered.starts_with(p)) {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}
