//! HTTP API for the lunar calendar.
//!
//! This crate provides an Axum HTTP server that exposes the phase
//! calculator and the calendar rules of `lunar-core` to the dashboard:
//!
//! - **Phase and calendar endpoints** for the header summary, the month
//!   grid and the day-detail dialog
//! - **Profile endpoints** backed by an in-memory profile seeded from
//!   configuration
//! - **Advisory, forecast and holiday endpoints** for the side panels
//! - **Minimal HTML status page** (`GET /`) showing today's phase
//!
//! All state lives in [`AppState`]; the only mutable part is the profile.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
