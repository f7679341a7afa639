// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for the time layer: Julian Days, leap seconds, ΔT, UT1 and
//! sidereal time.

use crate::catch_panic;
use crate::error::LunarisStatus;
use lunaris::{
    julian_day, leap_seconds, local_sidereal_time, utc_to_ut1, CalendarDate, DeltaTConfidence,
    JulianDate, Time, UniversalTime, JD, UTC,
};
use qtty::Degrees;

/// `DeltaTConfidence` values written by [`lunaris_delta_t`].
pub const LUNARIS_DELTA_T_MEASURED: i32 = 0;
pub const LUNARIS_DELTA_T_PREDICTED: i32 = 1;
pub const LUNARIS_DELTA_T_EXTRAPOLATED: i32 = 2;

/// Julian Day of a calendar date with a fractional day (Meeus ch. 7).
///
/// # Safety
/// `out` must be a valid, writable pointer to `f64`.
#[no_mangle]
pub unsafe extern "C" fn lunaris_julian_day(
    year: i32,
    month: u32,
    fractional_day: f64,
    out: *mut f64,
) -> LunarisStatus {
    catch_panic!(LunarisStatus::Panic, {
        if out.is_null() {
            return LunarisStatus::NullPointer;
        }
        match julian_day(year, month, fractional_day) {
            Ok(jd) => {
                unsafe { *out = jd.value() };
                LunarisStatus::Ok
            }
            Err(err) => err.into(),
        }
    })
}

/// Julian Day on the TT axis of a UTC civil date and time.
///
/// # Safety
/// `out` must be a valid, writable pointer to `f64`.
#[no_mangle]
pub unsafe extern "C" fn lunaris_jd_from_utc(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
    out: *mut f64,
) -> LunarisStatus {
    catch_panic!(LunarisStatus::Panic, {
        if out.is_null() {
            return LunarisStatus::NullPointer;
        }
        match CalendarDate::from_ymd_hms(year, month, day, hour, minute, second) {
            Ok(date) => {
                let jd: JulianDate = date.to_time::<UTC>().to::<JD>();
                unsafe { *out = jd.value() };
                LunarisStatus::Ok
            }
            Err(err) => err.into(),
        }
    })
}

/// ΔT = TT − UT1 in seconds for a Julian Day on the UT axis.
///
/// `confidence` may be null; otherwise it receives one of the
/// `LUNARIS_DELTA_T_*` values.
///
/// # Safety
/// `out` must be a valid, writable pointer to `f64`; `confidence` must be
/// null or writable.
#[no_mangle]
pub unsafe extern "C" fn lunaris_delta_t(
    jd: f64,
    out: *mut f64,
    confidence: *mut i32,
) -> LunarisStatus {
    catch_panic!(LunarisStatus::Panic, {
        if out.is_null() {
            return LunarisStatus::NullPointer;
        }
        if !jd.is_finite() {
            return LunarisStatus::InvalidDate;
        }
        let dt = lunaris::delta_t::delta_t(JulianDate::new(jd));
        unsafe { *out = dt.seconds.value() };
        if !confidence.is_null() {
            let code = match dt.confidence {
                DeltaTConfidence::Measured => LUNARIS_DELTA_T_MEASURED,
                DeltaTConfidence::Predicted => LUNARIS_DELTA_T_PREDICTED,
                DeltaTConfidence::Extrapolated => LUNARIS_DELTA_T_EXTRAPOLATED,
            };
            unsafe { *confidence = code };
        }
        LunarisStatus::Ok
    })
}

/// TAI − UTC in seconds at a UTC Julian Day.
#[no_mangle]
pub extern "C" fn lunaris_leap_seconds(jd_utc: f64) -> f64 {
    leap_seconds::tai_minus_utc(Time::<UTC>::new(jd_utc)).value()
}

/// UT1 Julian Day of a UTC Julian Day.
#[no_mangle]
pub extern "C" fn lunaris_utc_to_ut1(jd_utc: f64) -> f64 {
    utc_to_ut1(Time::<UTC>::new(jd_utc)).value()
}

/// Local apparent sidereal time, degrees, for a UT1 Julian Day and an
/// **east-positive** longitude.
#[no_mangle]
pub extern "C" fn lunaris_local_sidereal_time(jd_ut1: f64, longitude_east: f64) -> f64 {
    local_sidereal_time(UniversalTime::new(jd_ut1), Degrees::new(longitude_east)).value()
}
