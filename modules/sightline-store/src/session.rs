use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sightline_common::{fixtures, BrandProfile, Competitor, Keyword, SightlineError};
use sightline_scoring::KeywordScores;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Cap on live sessions. Opportunistic eviction of expired workspaces runs
/// when the cap is reached, so the map stays bounded without a sweeper task.
const MAX_SESSIONS: usize = 500;

/// Everything one dashboard session holds.
#[derive(Debug, Clone, Serialize)]
pub struct SessionWorkspace {
    pub keywords: Vec<Keyword>,
    pub competitors: Vec<Competitor>,
    pub brand: BrandProfile,
    pub selected: HashSet<Uuid>,
    pub created_at: DateTime<Utc>,
    pub touched_at: DateTime<Utc>,
}

impl SessionWorkspace {
    /// A fresh workspace seeded with the sample dashboard dataset.
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self {
            keywords: fixtures::sample_keywords(),
            competitors: fixtures::sample_competitors(),
            brand: fixtures::sample_brand(),
            selected: HashSet::new(),
            created_at: now,
            touched_at: now,
        }
    }

    /// Insert a keyword, replacing any existing entry with the same id.
    pub fn upsert_keyword(&mut self, keyword: Keyword) {
        match self.keywords.iter_mut().find(|k| k.id == keyword.id) {
            Some(existing) => *existing = keyword,
            None => self.keywords.push(keyword),
        }
    }

    /// Remove a keyword and drop it from the selection. Returns false when
    /// the id is unknown.
    pub fn remove_keyword(&mut self, id: Uuid) -> bool {
        let before = self.keywords.len();
        self.keywords.retain(|k| k.id != id);
        self.selected.remove(&id);
        self.keywords.len() != before
    }

    /// Flip the starred flag. Returns the new state, or None for an unknown id.
    pub fn toggle_star(&mut self, id: Uuid) -> Option<bool> {
        let keyword = self.keywords.iter_mut().find(|k| k.id == id)?;
        keyword.starred = !keyword.starred;
        Some(keyword.starred)
    }

    /// Apply a fresh scorecard to a keyword. Returns false for an unknown id.
    pub fn set_scores(&mut self, id: Uuid, scores: &KeywordScores) -> bool {
        let Some(keyword) = self.keywords.iter_mut().find(|k| k.id == id) else {
            return false;
        };
        keyword.ai_likelihood = scores.ai_likelihood;
        keyword.difficulty = scores.difficulty;
        keyword.opportunity = scores.opportunity;
        keyword.intent = scores.intent;
        keyword.scored_at = Utc::now();
        true
    }

    /// Toggle a keyword in or out of the selection. Returns the new membership,
    /// or None for an unknown id.
    pub fn toggle_selected(&mut self, id: Uuid) -> Option<bool> {
        if !self.keywords.iter().any(|k| k.id == id) {
            return None;
        }
        if self.selected.remove(&id) {
            Some(false)
        } else {
            self.selected.insert(id);
            Some(true)
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Insert a competitor, replacing any existing entry with the same id.
    pub fn upsert_competitor(&mut self, competitor: Competitor) {
        match self.competitors.iter_mut().find(|c| c.id == competitor.id) {
            Some(existing) => *existing = competitor,
            None => self.competitors.push(competitor),
        }
    }

    pub fn remove_competitor(&mut self, id: Uuid) -> bool {
        let before = self.competitors.len();
        self.competitors.retain(|c| c.id != id);
        self.competitors.len() != before
    }

    pub fn set_brand(&mut self, brand: BrandProfile) {
        self.brand = brand;
    }
}

/// TTL'd map of session id → workspace.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionWorkspace>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl_minutes: u64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl: Duration::minutes(ttl_minutes as i64),
        }
    }

    /// Create a seeded session and return its id with the seeded workspace.
    pub async fn create_session(&self) -> (Uuid, SessionWorkspace) {
        let id = Uuid::new_v4();
        let workspace = SessionWorkspace::seeded();

        let mut sessions = self.sessions.write().await;
        if sessions.len() >= MAX_SESSIONS {
            let now = Utc::now();
            sessions.retain(|_, w| w.touched_at + self.ttl > now);
        }
        sessions.insert(id, workspace.clone());

        (id, workspace)
    }

    /// Read from a live session. Expired sessions read as unknown.
    pub async fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&SessionWorkspace) -> T,
    ) -> Result<T, SightlineError> {
        let sessions = self.sessions.read().await;
        let workspace = sessions
            .get(&id)
            .filter(|w| self.is_live(w))
            .ok_or_else(|| SightlineError::UnknownSession(id.to_string()))?;
        Ok(f(workspace))
    }

    /// Mutate a live session, refreshing its TTL. Expired sessions are
    /// evicted rather than revived.
    pub async fn mutate<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SessionWorkspace) -> T,
    ) -> Result<T, SightlineError> {
        let mut sessions = self.sessions.write().await;
        if sessions.get(&id).is_some_and(|w| !self.is_live(w)) {
            sessions.remove(&id);
        }
        let workspace = sessions
            .get_mut(&id)
            .ok_or_else(|| SightlineError::UnknownSession(id.to_string()))?;
        workspace.touched_at = Utc::now();
        Ok(f(workspace))
    }

    fn is_live(&self, workspace: &SessionWorkspace) -> bool {
        workspace.touched_at + self.ttl > Utc::now()
    }
}
