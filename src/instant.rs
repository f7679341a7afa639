// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic time–scale parameterised instant.
//!
//! [`Time<S>`] stores a scalar quantity in [`Days`] whose *meaning* is
//! determined by the compile-time marker `S: TimeScale`.  Every scale knows
//! how to reach the canonical **Julian Day in TT**, so any instant can be
//! moved to any other scale with [`Time::to`].
//!
//! Scale-specific helpers (e.g. [`Time::<JD>::julian_centuries()`] or
//! [`Time::<UT>::delta_t()`]) live in inherent `impl` blocks gated on the
//! concrete marker type.

use chrono::{DateTime, Utc};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// JD of the Unix epoch, 1970-01-01T00:00:00.
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for time scales.
///
/// A scale supplies a display label and the pair of conversions between its
/// native day count and **JD(TT)**.  Epoch counters (JD, MJD) are constant
/// offsets; civil and rotational scales (UTC, UT1) go through the leap-second
/// and ΔT tables.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity in this scale's native unit to an absolute JD(TT).
    fn to_jd_tt(value: Days) -> Days;

    /// Convert an absolute JD(TT) back to this scale's native quantity.
    fn from_jd_tt(jd_tt: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>: the generic instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`.
///
/// Layout-identical to a single `f64`: the scale is a zero-sized marker.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar (days since the scale's epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Absolute Julian Day (TT) corresponding to this instant.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_jd_tt(self.quantity)
    }

    /// Build an instant from an absolute Julian Day (TT).
    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_jd_tt(jd))
    }

    // ── cross-scale conversion ────────────────────────────────────────

    /// Convert this instant to another time scale, routing through JD(TT).
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(S::to_jd_tt(self.quantity))
    }

    // ── UTC helpers ───────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>`.
    ///
    /// Goes through the [`UTC`](super::scales::UTC) scale, so leap seconds
    /// are removed before the Unix timestamp is formed.  Returns `None` if
    /// the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        use super::scales::UTC;
        let jd_utc = self.to::<UTC>().quantity();
        let seconds_since_epoch = (jd_utc - UNIX_EPOCH_JD).to::<Second>().value();
        if !seconds_since_epoch.is_finite() {
            return None;
        }
        let secs = seconds_since_epoch.floor();
        let mut nanos = ((seconds_since_epoch - secs) * 1e9).round() as u32;
        let mut secs = secs as i64;
        if nanos >= 1_000_000_000 {
            secs += 1;
            nanos -= 1_000_000_000;
        }
        DateTime::<Utc>::from_timestamp(secs, nanos)
    }

    /// Build an instant from a `chrono::DateTime<Utc>`.
    ///
    /// The timestamp is read as UTC, so the leap-second count and the
    /// TT − TAI offset are applied on the way to the target scale.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        use super::scales::UTC;
        let seconds_since_epoch = Seconds::new(datetime.timestamp() as f64);
        let nanos = Seconds::new(datetime.timestamp_subsec_nanos() as f64 / 1e9);
        let jd_utc = UNIX_EPOCH_JD + (seconds_since_epoch + nanos).to::<Day>();
        Time::<UTC>::from_days(jd_utc).to::<S>()
    }

    // ── min / max ─────────────────────────────────────────────────────

    /// Element-wise minimum.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::from_days(self.quantity.min_const(other.quantity))
    }

    /// Element-wise maximum.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::from_days(self.quantity.max_const(other.quantity))
    }

    /// Midpoint between two instants on the same time scale.
    #[inline]
    pub const fn mean(self, other: Self) -> Self {
        Self::from_days(self.quantity.const_add(other.quantity).const_div(2.0))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> AddAssign<Days> for Time<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> SubAssign<Days> for Time<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl<S: TimeScale> std::ops::Div<Days> for Time<S> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Days) -> Self::Output {
        (self.quantity / rhs).simplify().value()
    }
}

// ── From/Into Days ────────────────────────────────────────────────────────

impl<S: TimeScale> From<Days> for Time<S> {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl<S: TimeScale> From<Time<S>> for Days {
    #[inline]
    fn from(time: Time<S>) -> Self {
        time.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::super::scales::{JD, MJD, UTC};
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn julian_day_creation() {
        let jd = Time::<JD>::new(2_451_545.0);
        assert_eq!(jd.quantity(), Days::new(2_451_545.0));
    }

    #[test]
    fn jd_utc_roundtrip() {
        let datetime = Utc.with_ymd_and_hms(2022, 1, 16, 14, 26, 18).unwrap();
        let jd = Time::<JD>::from_utc(datetime);
        let back = jd.to_utc().expect("to_utc");
        let delta_ns =
            back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
        // One ulp of a JD near 2.46e6 is about 40 µs.
        assert!(delta_ns.abs() < 100_000, "roundtrip error: {} ns", delta_ns);
    }

    #[test]
    fn from_utc_applies_leap_seconds_and_tai_offset() {
        // 2022: TAI − UTC = 37 s, TT − TAI = 32.184 s.
        let datetime = Utc.with_ymd_and_hms(2022, 1, 16, 0, 0, 0).unwrap();
        let jd_tt = Time::<JD>::from_utc(datetime);
        let jd_utc = Time::<UTC>::from_utc(datetime);
        let offset = (jd_tt.quantity() - jd_utc.quantity()).to::<Second>();
        assert!(
            (offset - Seconds::new(69.184)).abs() < Seconds::new(1e-4),
            "TT − UTC = {offset}"
        );
    }

    #[test]
    fn utc_scale_value_matches_civil_julian_day() {
        let datetime = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let jd_utc = Time::<UTC>::from_utc(datetime);
        assert!((jd_utc.value() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn const_min_max_mean() {
        const A: Time<JD> = Time::<JD>::new(10.0);
        const B: Time<JD> = Time::<JD>::new(14.0);
        const MIN: Time<JD> = A.min(B);
        const MAX: Time<JD> = A.max(B);
        const MID: Time<JD> = A.mean(B);
        assert_eq!(MIN.quantity(), Days::new(10.0));
        assert_eq!(MAX.quantity(), Days::new(14.0));
        assert_eq!(MID.quantity(), Days::new(12.0));
    }

    #[test]
    fn into_days_and_back() {
        let jd = Time::<JD>::new(2_451_547.5);
        let days: Days = jd.into();
        assert_eq!(days, 2_451_547.5);
        assert_eq!(Time::<JD>::from(days), jd);
    }

    #[test]
    fn mjd_arithmetic() {
        let mjd = Time::<MJD>::new(59_000.0);
        assert_eq!((mjd + Days::new(1.5)).quantity(), Days::new(59_001.5));
        assert_eq!((mjd - Days::new(1.5)).quantity(), Days::new(58_998.5));
        assert_eq!(Time::<MJD>::new(59_001.0) - mjd, 1.0);
        assert!(mjd < Time::<MJD>::new(59_001.0));
    }

    #[test]
    fn add_assign_sub_assign() {
        let mut jd = Time::<JD>::new(2_451_545.0);
        jd += Days::new(1.0);
        assert_eq!(jd.quantity(), Days::new(2_451_546.0));
        jd -= Days::new(0.5);
        assert_eq!(jd.quantity(), Days::new(2_451_545.5));
    }

    #[test]
    fn display_uses_scale_label() {
        assert!(format!("{}", Time::<JD>::new(2_451_545.0)).contains("Julian Day"));
        assert!(format!("{}", Time::<MJD>::new(51_544.5)).contains("MJD"));
        assert!(format!("{}", Time::<UTC>::new(2_451_545.0)).contains("UTC"));
    }

    #[test]
    fn div_by_days() {
        let jd = Time::<JD>::new(100.0);
        assert!((jd / Days::new(2.0) - 50.0).abs() < 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_time_is_a_bare_number() {
        let jd = Time::<JD>::new(2_459_596.101598);
        let json = serde_json::to_string(&jd).unwrap();
        assert_eq!(json, "2459596.101598");
        let back: Time<JD> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, jd);
    }
}
