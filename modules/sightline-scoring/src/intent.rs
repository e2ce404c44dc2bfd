use sightline_common::Intent;

/// Markers that signal the searcher is ready to spend money.
const TRANSACTIONAL_MARKERS: &[&str] = &[
    "buy", "price", "pricing", "cheap", "discount", "deal", "order", "purchase", "coupon", "sale",
    "shop", "cost", "shipping",
];

/// Markers that signal comparison shopping rather than an open wallet.
const COMMERCIAL_MARKERS: &[&str] = &[
    "best", "top", "review", "vs", "compare", "comparison", "alternative",
];

/// Classify the purchase intent of a search term.
///
/// Containment checks run against the lowercased term. A term matching both
/// tiers classifies High: transactional markers win.
pub fn purchase_intent(term: &str) -> Intent {
    let term = term.to_lowercase();
    if TRANSACTIONAL_MARKERS.iter().any(|m| term.contains(m)) {
        return Intent::High;
    }
    if COMMERCIAL_MARKERS.iter().any(|m| term.contains(m)) {
        return Intent::Medium;
    }
    Intent::Low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_terms_are_high_intent() {
        assert_eq!(purchase_intent("buy monstera online"), Intent::High);
        assert_eq!(purchase_intent("snake plant price"), Intent::High);
        assert_eq!(purchase_intent("cheap planters with drainage"), Intent::High);
    }

    #[test]
    fn comparison_terms_are_medium_intent() {
        assert_eq!(purchase_intent("best low light houseplants"), Intent::Medium);
        assert_eq!(purchase_intent("pothos vs philodendron"), Intent::Medium);
        assert_eq!(purchase_intent("fiddle leaf fig alternatives"), Intent::Medium);
    }

    #[test]
    fn informational_terms_are_low_intent() {
        assert_eq!(purchase_intent("how to repot a monstera"), Intent::Low);
        assert_eq!(purchase_intent("snake plant benefits"), Intent::Low);
    }

    #[test]
    fn transactional_wins_when_both_tiers_match() {
        assert_eq!(purchase_intent("best price on monstera"), Intent::High);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(purchase_intent("BUY MONSTERA"), Intent::High);
    }
}
