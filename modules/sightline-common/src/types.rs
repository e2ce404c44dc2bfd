use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Keyword Types ---

/// Purchase-intent tier assigned to a keyword by the intent heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Low => write!(f, "Low"),
            Intent::Medium => write!(f, "Medium"),
            Intent::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: Uuid,
    pub term: String,
    /// Estimated monthly searches.
    pub volume: u32,
    pub ai_likelihood: u8,
    pub difficulty: u8,
    pub opportunity: u8,
    pub intent: Intent,
    pub starred: bool,
    pub scored_at: DateTime<Utc>,
}

// --- Search Types ---

/// How hard it is to outrank a cited source, judged from its domain alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefDifficulty {
    Easy,
    Moderate,
    Hard,
}

impl std::fmt::Display for RefDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefDifficulty::Easy => write!(f, "Easy"),
            RefDifficulty::Moderate => write!(f, "Moderate"),
            RefDifficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A single cited source: an AI Overview citation or an organic result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    pub link: String,
    pub snippet: String,
    /// Display host with any leading `www.` stripped.
    pub source: String,
    pub position: u32,
    pub difficulty: RefDifficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiOverview {
    pub text: String,
    pub references: Vec<Reference>,
}

/// Reshaped search response returned by the search proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSnapshot {
    pub query: String,
    pub ai_overview: Option<AiOverview>,
    pub organic: Vec<Reference>,
    pub related_questions: Vec<String>,
}

// --- Dashboard Records ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: Uuid,
    pub name: String,
    pub website: String,
    /// Hex accent color used by the dashboard charts.
    pub color: String,
    pub logo_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandProfile {
    pub name: String,
    pub website: String,
    pub color: String,
    pub logo_url: String,
    /// AI-search prompts tracked for the visibility check.
    pub prompts: Vec<String>,
}

// --- Demo Storefront ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoProduct {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub price_cents: u32,
    pub tags: Vec<String>,
}

// --- Readability ---

/// Extracted page content, from the reader vendor or the direct-fetch path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadablePage {
    pub url: String,
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub site_name: Option<String>,
    pub published_time: Option<String>,
}
