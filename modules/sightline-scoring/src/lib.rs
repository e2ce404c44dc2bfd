//! Pure scoring heuristics: keyword intent/difficulty/likelihood, reference
//! difficulty tags, brand-mention counting, and the content audit. No I/O;
//! every function is a deterministic input→output mapping over fixed word
//! lists and thresholds.

pub mod audit;
pub mod difficulty;
pub mod intent;
pub mod likelihood;
pub mod mentions;
pub mod opportunity;
pub mod references;

pub use audit::{audit_content, ContentAudit};
pub use difficulty::keyword_difficulty;
pub use intent::purchase_intent;
pub use likelihood::ai_likelihood;
pub use mentions::count_mentions;
pub use opportunity::{opportunity, score_keyword, KeywordScores};
pub use references::{display_host, reference_difficulty};
