// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The Moon: series, phase, parallax and the per-observer computation.

pub mod ephemeris;
pub mod parallax;
pub mod phase;
pub mod series;

pub use ephemeris::{
    apparent_position, compute, compute_at_utc, compute_with_events, MoonOutput, MoonPosition,
};
pub use phase::{MoonPhase, PhaseName, SYNODIC_MONTH};
