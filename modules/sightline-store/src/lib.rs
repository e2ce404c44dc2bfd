//! Session-scoped in-memory state. Each session holds the dashboard's
//! workspace (keywords, competitors, brand profile) behind a TTL so
//! abandoned sessions drain away, the server-side equivalent of the
//! browser clearing session storage with the tab.

pub mod session;
pub mod transforms;

pub use session::{SessionStore, SessionWorkspace};
pub use transforms::{filter_keywords, sort_keywords, SortDirection, SortKey};
