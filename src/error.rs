// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the Moon engine.
//!
//! Only malformed calendar input and out-of-range observers are hard errors.
//! Everything else (extrapolated ΔT, a rise/set search that hit its
//! iteration cap, circumpolar days) is reported through the result values.

use thiserror::Error;

/// Hard failures surfaced to callers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The calendar fields do not describe a real date, or the instant is
    /// not a finite Julian Day.
    #[error("invalid date {0}")]
    InvalidDate(String),

    /// The observer's geographic coordinates or atmosphere are unusable.
    #[error("invalid observer: {0}")]
    InvalidObserver(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_date(year: i32, month: u32, day: f64, reason: &'static str) -> Self {
        Self::InvalidDate(format!("{year}-{month:02}-{day}: {reason}"))
    }

    pub(crate) fn non_finite_instant(jd: f64) -> Self {
        Self::InvalidDate(format!("Julian Day {jd} is not finite"))
    }
}
