// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Moon Engine
//!
//! Position, phase and rise/transit/set of the Moon for an observer on the
//! Earth, built on typed astronomical time scales.
//!
//! # Pipeline
//!
//! 1. A civil date becomes a Julian Day ([`calendar`]), which moves between
//!    UTC, TAI, TT and UT1 through the leap-second and ΔT tables
//!    ([`leap_seconds`], [`delta_t`]).
//! 2. UT1 gives the apparent sidereal time ([`sidereal`]).
//! 3. TT drives the lunar series, nutation and the Sun ([`moon`],
//!    [`nutation`], [`sun`]).
//! 4. The geocentric place is shifted to the observer and onto the local
//!    horizon ([`coordinates`], [`refraction`]).
//! 5. [`rise_set`] searches one UTC day for rise, transit and set.
//!
//! Angles are rendered with [`format`].
//!
//! # Core types
//!
//! - [`Time<S>`]: an instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`]: `Time<JD>`, the Julian Day on the TT axis.
//! - [`Observer`]: a validated site; longitude is east-positive.
//! - [`MoonOutput`]: everything [`compute`] returns.
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Day (TT axis) |
//! | [`MJD`] | Modified Julian Date |
//! | [`TT`] | Terrestrial Time |
//! | [`TAI`] | International Atomic Time |
//! | [`UTC`] | Coordinated Universal Time |
//! | [`UT`] | Universal Time UT1 |
//!
//! # Example
//!
//! ```
//! use lunaris::{compute, JulianDate, Observer};
//! use qtty::Degrees;
//!
//! let palomar = Observer::new(Degrees::new(-116.865), Degrees::new(33.356), 1706.0)?;
//! let moon = compute(JulianDate::new(2_459_596.101598), &palomar)?;
//! assert_eq!(moon.phase.name.label(), "Full Moon");
//! # Ok::<(), lunaris::Error>(())
//! ```

pub mod calendar;
pub mod coordinates;
pub mod delta_t;
mod error;
pub mod format;
pub(crate) mod instant;
mod julian_date_ext;
pub mod leap_seconds;
pub mod moon;
pub mod nutation;
pub mod observer;
pub mod refraction;
pub mod rise_set;
pub(crate) mod scales;
pub mod sidereal;
pub mod sun;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{julian_day, CalendarDate, DateTimeResult};
pub use delta_t::{DeltaT, DeltaTConfidence};
pub use error::{Error, Result};
pub use format::{to_dms, to_dms_padded, to_hms, to_hms_padded};
pub use instant::{Time, TimeScale};
pub use moon::{compute, compute_at_utc, compute_with_events, MoonOutput, MoonPhase, PhaseName};
pub use observer::Observer;
pub use rise_set::{rise_transit_set, Circumpolar, EventTime, RiseTransitSet};
pub use scales::{utc_to_ut1, JD, MJD, TAI, TT, TT_MINUS_TAI, UT, UTC};
pub use sidereal::{apparent_sidereal_time, local_sidereal_time, mean_sidereal_time};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Day on the TT axis, the argument of every series in the crate.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Modified Julian Date: `JD − 2 400 000.5`.
pub type ModifiedJulianDate = Time<MJD>;

/// Universal Time UT1, the scale of sidereal time.
pub type UniversalTime = Time<UT>;
