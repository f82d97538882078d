//! Shared type definitions for the lunar calendar.
//!
//! This crate is the single source of truth for the values exchanged
//! between the phase calculator, the HTTP API and the dashboard. Types
//! flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`enums`] -- Phase buckets, profile, advisory, weather and holiday enums
//! - [`structs`] -- The [`MoonPhase`] value object and the projections built
//!   from it (month grid, day details, forecast, advisories, holidays)

pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    AdvisoryKind, AdvisoryStatus, Gender, HolidayKind, LifeArea, PhaseName, WeatherCondition,
};
pub use structs::{
    Advisory, CalendarCell, DayDetails, Holiday, MonthGrid, MoonPhase, PHASE_BUCKETS,
    PressureStats, ProfileMetrics, UserProfile, WeatherDay, unit_fraction,
};
