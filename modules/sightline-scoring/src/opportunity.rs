use serde::{Deserialize, Serialize};
use sightline_common::Intent;

use crate::difficulty::keyword_difficulty;
use crate::intent::purchase_intent;
use crate::likelihood::ai_likelihood;

/// The full heuristic scorecard for one term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeywordScores {
    pub ai_likelihood: u8,
    pub difficulty: u8,
    pub opportunity: u8,
    pub intent: Intent,
}

/// Blend volume, difficulty, and AI likelihood into one 0–100 opportunity
/// score. The components are weighted 35/35/30 so the cap lands at 100.
pub fn opportunity(volume: u32, difficulty: u8, ai_likelihood: u8) -> u8 {
    let volume_points: u32 = match volume {
        v if v >= 10_000 => 35,
        v if v >= 5_000 => 28,
        v if v >= 1_000 => 20,
        v if v >= 100 => 12,
        _ => 5,
    };
    let ease_points = (100 - difficulty as u32) * 35 / 100;
    let likelihood_points = ai_likelihood as u32 * 30 / 100;

    (volume_points + ease_points + likelihood_points).min(100) as u8
}

/// Run every keyword heuristic over one term.
pub fn score_keyword(term: &str, volume: u32) -> KeywordScores {
    let ai = ai_likelihood(term);
    let difficulty = keyword_difficulty(term, volume);
    KeywordScores {
        ai_likelihood: ai,
        difficulty,
        opportunity: opportunity(volume, difficulty, ai),
        intent: purchase_intent(term),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewards_volume_ease_and_likelihood() {
        assert_eq!(opportunity(12_000, 20, 80), 87);
    }

    #[test]
    fn higher_likelihood_means_higher_opportunity() {
        assert!(opportunity(5_000, 50, 90) > opportunity(5_000, 50, 10));
    }

    #[test]
    fn higher_difficulty_means_lower_opportunity() {
        assert!(opportunity(5_000, 90, 50) < opportunity(5_000, 10, 50));
    }

    #[test]
    fn caps_at_100() {
        assert_eq!(opportunity(50_000, 0, 100), 100);
    }

    #[test]
    fn score_keyword_bundles_all_heuristics() {
        let scores = score_keyword("buy monstera online", 4_400);
        assert_eq!(scores.intent, Intent::High);
        assert_eq!(scores.difficulty, keyword_difficulty("buy monstera online", 4_400));
        assert_eq!(
            scores.opportunity,
            opportunity(4_400, scores.difficulty, scores.ai_likelihood)
        );
    }
}
