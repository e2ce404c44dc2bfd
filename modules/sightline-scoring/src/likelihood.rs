/// Question openers that almost always trigger a generated answer block.
pub(crate) const QUESTION_PREFIXES: &[&str] = &[
    "how ", "what ", "why ", "when ", "where ", "which ", "who ", "can ", "does ", "do ", "is ",
    "are ", "should ",
];

/// Informational markers the answer engines favor.
const INFORMATIONAL_MARKERS: &[&str] = &[
    "guide", "benefits", "tips", "ideas", "examples", "tutorial", "meaning", "symptoms", "causes",
    "care", "checklist",
];

/// Comparison framing also tends to get summarized.
const COMPARISON_MARKERS: &[&str] = &["vs", "versus", "difference between", "compare"];

/// Navigational and local lookups rarely get an AI answer.
const NAVIGATIONAL_MARKERS: &[&str] = &[
    "login", "sign in", "signup", "near me", "hours", "phone number", "address", "coupon code",
    "promo code",
];

/// Estimate how likely a query is to trigger an AI Overview, 0–100.
///
/// Additive fixed weights over containment checks: question openers and
/// informational phrasing push the score up, navigational phrasing pushes it
/// down, and longer (conversational) queries get a length bonus.
pub fn ai_likelihood(term: &str) -> u8 {
    let term = term.to_lowercase();
    let words = term.split_whitespace().count();
    let mut score: i32 = 0;

    if QUESTION_PREFIXES.iter().any(|p| term.starts_with(p)) {
        score += 25;
    }
    for marker in INFORMATIONAL_MARKERS {
        if term.contains(marker) {
            score += 10;
        }
    }
    for marker in COMPARISON_MARKERS {
        if term.contains(marker) {
            score += 10;
        }
    }
    if words >= 6 {
        score += 20;
    } else if words >= 4 {
        score += 10;
    }
    for marker in NAVIGATIONAL_MARKERS {
        if term.contains(marker) {
            score -= 20;
        }
    }
    if words == 1 {
        score -= 15;
    }

    score.clamp(0, 100) as u8
}
