//! Moon phase calculation and lunar-calendar rules.
//!
//! Everything here is a pure function of its inputs, apart from
//! [`phase::today`] and [`calendar::local_today`] which read the system
//! clock.
//!
//! # Modules
//!
//! - [`phase`] -- Julian Day, synodic cycle fraction and the
//!   [`MoonPhase`](lunar_types::MoonPhase) for a calendar date.
//! - [`calendar`] -- Monday-first month grid and per-day details.
//! - [`advisory`] -- Lunar-influence advisory selection from phase and
//!   profile.
//! - [`profile`] -- Age and BMI derived from a user profile.
//! - [`weather`] -- Modelled surface pressure and forecast statistics.
//! - [`holidays`] -- Fixed-date public holidays.
//! - [`config`] -- Configuration loading from `lunar-config.yaml` into
//!   strongly-typed structs.

pub mod advisory;
pub mod calendar;
pub mod config;
pub mod holidays;
pub mod phase;
pub mod profile;
pub mod weather;
