// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a time scale and encodes how its values
//! relate to the canonical **Julian Day in TT**.
//!
//! | Marker | Description | Relation to TT |
//! |--------|-------------|----------------|
//! | [`JD`]  | Julian Day on the TT axis | identity |
//! | [`TT`]  | Terrestrial Time | identity |
//! | [`MJD`] | Modified Julian Date | `JD − 2 400 000.5` |
//! | [`TAI`] | International Atomic Time | `TT − 32.184 s` |
//! | [`UTC`] | Coordinated Universal Time | `TAI − leap(UTC)` |
//! | [`UT`]  | Universal Time UT1 | `TT − ΔT` |

use super::instant::{Time, TimeScale};
use qtty::{Day, Days, Seconds};

/// `TT = TAI + 32.184 s`.
pub const TT_MINUS_TAI: Seconds = Seconds::new(32.184);

// ---------------------------------------------------------------------------
// Epoch counters
// ---------------------------------------------------------------------------

/// Julian Day, the identity scale on the TT axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Modified Julian Date: JD minus 2 400 000.5.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

/// The constant offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt - MJD_EPOCH
    }
}

// ---------------------------------------------------------------------------
// Physical scales
// ---------------------------------------------------------------------------

/// Terrestrial Time, the argument of the lunar and solar series.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TT;

impl TimeScale for TT {
    const LABEL: &'static str = "TT";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// International Atomic Time.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TAI;

impl TimeScale for TAI {
    const LABEL: &'static str = "TAI";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value + TT_MINUS_TAI.to::<Day>()
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt - TT_MINUS_TAI.to::<Day>()
    }
}

// ---------------------------------------------------------------------------
// Civil and rotational scales
// ---------------------------------------------------------------------------

/// Coordinated Universal Time as a Julian Day count.
///
/// `TT = UTC + leap(UTC) + 32.184 s`, with `leap` read from the step table in
/// [`leap_seconds`](crate::leap_seconds).  The inverse looks the table up at
/// a first estimate of UTC and refines once, which is exact everywhere except
/// inside an inserted leap second.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UTC;

#[inline]
fn tt_minus_utc(jd_utc: Days) -> Days {
    let leap = crate::leap_seconds::tai_minus_utc(Time::<UTC>::from_days(jd_utc));
    (leap + TT_MINUS_TAI).to::<Day>()
}

impl TimeScale for UTC {
    const LABEL: &'static str = "UTC";

    #[inline]
    fn to_jd_tt(value: Days) -> Days {
        value + tt_minus_utc(value)
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        let mut utc = jd_tt - TT_MINUS_TAI.to::<Day>();
        for _ in 0..2 {
            utc = jd_tt - tt_minus_utc(utc);
        }
        utc
    }
}

/// Universal Time UT1, the scale of Earth's rotation angle.
///
/// The conversion to JD(TT) adds ΔT from the merged measured/predicted
/// table; the inverse uses a three-step fixed-point iteration, which
/// converges immediately because dΔT/dJD is of order 10⁻⁸.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UT;

impl TimeScale for UT {
    const LABEL: &'static str = "UT1";

    #[inline]
    fn to_jd_tt(ut_value: Days) -> Days {
        let dt = crate::delta_t::delta_t(Time::<JD>::from_days(ut_value));
        ut_value + dt.seconds.to::<Day>()
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        let mut ut = jd_tt;
        for _ in 0..3 {
            let dt = crate::delta_t::delta_t(Time::<JD>::from_days(ut));
            ut = jd_tt - dt.seconds.to::<Day>();
        }
        ut
    }
}

// ---------------------------------------------------------------------------
// UTC → UT1
// ---------------------------------------------------------------------------

/// `UT1 = UTC − (ΔT − leap(UTC) − 32.184 s)`.
///
/// ΔT is read at the UTC instant itself; the sub-second difference between
/// UTC and UT1 has no visible effect on a table that changes by milliseconds
/// per day.
pub fn utc_to_ut1(utc: Time<UTC>) -> Time<UT> {
    let leap = crate::leap_seconds::tai_minus_utc(utc);
    let dt = crate::delta_t::delta_t(Time::<JD>::from_days(utc.quantity()));
    let correction: Seconds = dt.seconds - leap - TT_MINUS_TAI;
    Time::<UT>::from_days(utc.quantity() - correction.to::<Day>())
}

// ---------------------------------------------------------------------------
// Cross-scale From/Into (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<Time<$first>> for Time<$rest> {
                #[inline]
                fn from(t: Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<Time<$rest>> for Time<$first> {
                #[inline]
                fn from(t: Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, MJD, TT, TAI, UTC, UT);

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Second;

    #[test]
    fn jd_mjd_roundtrip() {
        let jd = Time::<JD>::new(2_451_545.0);
        let mjd: Time<MJD> = jd.into();
        assert!((mjd.quantity() - Days::new(51_544.5)).abs() < Days::new(1e-10));
        let back: Time<JD> = Time::from(mjd);
        assert!((back.quantity() - jd.quantity()).abs() < Days::new(1e-10));
    }

    #[test]
    fn tai_tt_offset() {
        let tai = Time::<TAI>::new(2_451_545.0);
        let tt: Time<TT> = tai.to::<TT>();
        let expected_offset = Seconds::new(32.184).to::<Day>();
        assert!((tt.quantity() - (tai.quantity() + expected_offset)).abs() < Days::new(1e-15));
    }

    #[test]
    fn utc_to_tt_uses_leap_seconds() {
        // 2003: TAI − UTC = 32 s
        let utc = Time::<UTC>::new(2_452_879.5);
        let tt = utc.to::<TT>();
        let offset = (tt.quantity() - utc.quantity()).to::<Second>();
        assert!((offset - Seconds::new(64.184)).abs() < Seconds::new(1e-4));
    }

    #[test]
    fn utc_tt_roundtrip_away_from_leap_boundary() {
        let utc = Time::<UTC>::new(2_459_596.101598);
        let back: Time<UTC> = utc.to::<TT>().to::<UTC>();
        assert!((back - utc).abs() < Days::new(1e-9));
    }

    #[test]
    fn utc_to_tt_just_after_2017_leap_second() {
        let utc = Time::<UTC>::new(2_457_754.5 + 1e-4);
        let offset = (utc.to::<TT>().quantity() - utc.quantity()).to::<Second>();
        assert!((offset - Seconds::new(69.184)).abs() < Seconds::new(1e-4));
    }

    #[test]
    fn ut_to_jd_applies_delta_t() {
        let ut = Time::<UT>::new(2_451_545.0);
        let jd: Time<JD> = ut.to::<JD>();
        let offset_secs = (jd.quantity() - ut.quantity()).to::<Second>();
        assert!(
            (offset_secs - Seconds::new(63.83)).abs() < Seconds::new(0.1),
            "UT1→TT offset = {} s",
            offset_secs
        );
    }

    #[test]
    fn ut_jd_roundtrip() {
        let jd = Time::<JD>::new(2_459_596.101598);
        let back: Time<JD> = jd.to::<UT>().to::<JD>();
        assert!((back - jd).abs() < Days::new(1e-9));
    }

    #[test]
    fn utc_to_ut1_is_within_a_second_of_utc_in_the_leap_second_era() {
        for jd in [2_445_000.5, 2_451_545.0, 2_459_596.101598] {
            let utc = Time::<UTC>::new(jd);
            let ut1 = utc_to_ut1(utc);
            let dut1 = (ut1.quantity() - utc.quantity()).to::<Second>();
            assert!(dut1.abs() < Seconds::new(1.0), "UT1 − UTC = {dut1} at {jd}");
        }
    }

    #[test]
    fn utc_to_ut1_agrees_with_scale_route() {
        let utc = Time::<UTC>::new(2_459_596.101598);
        let direct = utc_to_ut1(utc);
        let routed: Time<UT> = utc.to::<UT>();
        assert!((direct - routed).abs() < Days::new(1e-9));
    }
}
