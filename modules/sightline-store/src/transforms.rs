use sightline_common::Keyword;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Term,
    Volume,
    AiLikelihood,
    Difficulty,
    Opportunity,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "term" => Some(SortKey::Term),
            "volume" => Some(SortKey::Volume),
            "ai_likelihood" => Some(SortKey::AiLikelihood),
            "difficulty" => Some(SortKey::Difficulty),
            "opportunity" => Some(SortKey::Opportunity),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Stable in-place sort over a keyword list.
pub fn sort_keywords(keywords: &mut [Keyword], key: SortKey, direction: SortDirection) {
    keywords.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Term => a.term.to_lowercase().cmp(&b.term.to_lowercase()),
            SortKey::Volume => a.volume.cmp(&b.volume),
            SortKey::AiLikelihood => a.ai_likelihood.cmp(&b.ai_likelihood),
            SortKey::Difficulty => a.difficulty.cmp(&b.difficulty),
            SortKey::Opportunity => a.opportunity.cmp(&b.opportunity),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Case-insensitive substring filter on the term. An empty query keeps
/// everything; filtering never invents entries.
pub fn filter_keywords(keywords: &[Keyword], query: &str) -> Vec<Keyword> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return keywords.to_vec();
    }
    keywords
        .iter()
        .filter(|k| k.term.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
