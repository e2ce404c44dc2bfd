//! HTTP API for the Sightline marketing site, keyword dashboard, and demo
//! storefront. Routes live in `rest`, vendor seams in `providers`, and the
//! scripted shop assistant in `script`.

pub mod fetch;
pub mod providers;
pub mod rest;
pub mod router;
pub mod script;
pub mod state;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use router::build_router;
pub use state::AppState;
