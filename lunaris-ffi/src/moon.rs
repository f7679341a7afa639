// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI entry point for the full Moon computation.

use crate::catch_panic;
use crate::error::LunarisStatus;
use lunaris::{
    compute, compute_with_events, Circumpolar, DateTimeResult, JulianDate, Observer, PhaseName,
};
use qtty::Degrees;
use std::ffi::c_char;

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// Query for [`lunaris_moon_compute`].
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LunarisMoonInput {
    /// Julian Day used as the argument of the lunar series (TT).
    pub jd: f64,
    /// Geographic longitude, degrees, **west-positive**.
    pub longitude_west: f64,
    /// Geographic latitude, degrees, north-positive.
    pub latitude: f64,
    /// Height above sea level, metres.
    pub height: f64,
    /// Air pressure, millibars.
    pub pressure: f64,
    /// Air temperature, degrees Celsius.
    pub temperature: f64,
    /// Observer clock offset from UTC, hours; applied to event times.
    pub utc_offset_hours: f64,
    /// Also search the UTC day for rise, transit and set.
    pub with_events: bool,
}

/// Calendar breakdown of an event time.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarisDateTimeResult {
    /// `false` when the event does not happen that day; ignore the rest.
    pub is_valid: bool,
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl From<DateTimeResult> for LunarisDateTimeResult {
    fn from(dt: DateTimeResult) -> Self {
        Self {
            is_valid: dt.is_valid,
            year: dt.year,
            month: dt.month as u8,
            day: dt.day as u8,
            hour: dt.hour as u8,
            minute: dt.minute as u8,
            second: dt.second,
        }
    }
}

/// Phase names.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LunarisPhaseName {
    NewMoon = 0,
    WaxingCrescent = 1,
    FirstQuarter = 2,
    WaxingGibbous = 3,
    FullMoon = 4,
    WaningGibbous = 5,
    LastQuarter = 6,
    WaningCrescent = 7,
}

impl From<PhaseName> for LunarisPhaseName {
    fn from(name: PhaseName) -> Self {
        match name {
            PhaseName::NewMoon => Self::NewMoon,
            PhaseName::WaxingCrescent => Self::WaxingCrescent,
            PhaseName::FirstQuarter => Self::FirstQuarter,
            PhaseName::WaxingGibbous => Self::WaxingGibbous,
            PhaseName::FullMoon => Self::FullMoon,
            PhaseName::WaningGibbous => Self::WaningGibbous,
            PhaseName::LastQuarter => Self::LastQuarter,
            PhaseName::WaningCrescent => Self::WaningCrescent,
        }
    }
}

impl From<LunarisPhaseName> for PhaseName {
    fn from(name: LunarisPhaseName) -> Self {
        PhaseName::ALL[name as usize]
    }
}

/// `circumpolar` value: the Moon rises or sets this day.
pub const LUNARIS_CIRCUMPOLAR_NONE: i32 = 0;
/// `circumpolar` value: the Moon stays above the horizon all day.
pub const LUNARIS_CIRCUMPOLAR_UP: i32 = 1;
/// `circumpolar` value: the Moon stays below the horizon all day.
pub const LUNARIS_CIRCUMPOLAR_DOWN: i32 = 2;

/// Result of [`lunaris_moon_compute`]. Angles in degrees.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LunarisMoonOutput {
    /// Moon − Sun elongation folded into [0, 180].
    pub phase_angle: f64,
    /// Days since new Moon.
    pub phase_age: f64,
    pub illuminated_fraction: f64,
    pub phase_name: LunarisPhaseName,
    /// Apparent geocentric ecliptic longitude.
    pub longitude: f64,
    /// Geocentric ecliptic latitude.
    pub latitude: f64,
    pub distance_km: f64,
    /// Topocentric hour angle.
    pub hour_angle: f64,
    /// Topocentric right ascension.
    pub right_ascension: f64,
    /// Topocentric declination.
    pub declination: f64,
    /// Azimuth from north through east.
    pub azimuth: f64,
    /// Refracted topocentric altitude.
    pub altitude: f64,
    pub rise: LunarisDateTimeResult,
    pub transit: LunarisDateTimeResult,
    pub set: LunarisDateTimeResult,
    /// One of the `LUNARIS_CIRCUMPOLAR_*` values.
    pub circumpolar: i32,
}

fn observer(input: &LunarisMoonInput) -> lunaris::Result<Observer> {
    Observer::new(
        Degrees::new(-input.longitude_west),
        Degrees::new(input.latitude),
        input.height,
    )?
    .with_atmosphere(input.pressure, input.temperature)?
    .with_utc_offset(input.utc_offset_hours)
}

// ═══════════════════════════════════════════════════════════════════════════
// Functions
// ═══════════════════════════════════════════════════════════════════════════

/// Compute the Moon for one instant and site.
///
/// # Safety
/// `out` must be a valid, writable pointer to `LunarisMoonOutput`.
#[no_mangle]
pub unsafe extern "C" fn lunaris_moon_compute(
    input: LunarisMoonInput,
    out: *mut LunarisMoonOutput,
) -> LunarisStatus {
    catch_panic!(LunarisStatus::Panic, {
        if out.is_null() {
            return LunarisStatus::NullPointer;
        }
        if !input.jd.is_finite() {
            return LunarisStatus::InvalidDate;
        }
        let site = match observer(&input) {
            Ok(site) => site,
            Err(err) => return err.into(),
        };
        let jd = JulianDate::new(input.jd);
        let result = if input.with_events {
            compute_with_events(jd, &site)
        } else {
            compute(jd, &site)
        };
        let moon = match result {
            Ok(moon) => moon,
            Err(err) => return err.into(),
        };

        let invalid = LunarisDateTimeResult::from(DateTimeResult::INVALID);
        let (rise, transit, set, circumpolar) = match moon.events {
            Some(events) => {
                let local = events.to_local(site.utc_offset_hours());
                let circumpolar = match events.circumpolar {
                    None => LUNARIS_CIRCUMPOLAR_NONE,
                    Some(Circumpolar::AlwaysUp) => LUNARIS_CIRCUMPOLAR_UP,
                    Some(Circumpolar::AlwaysDown) => LUNARIS_CIRCUMPOLAR_DOWN,
                };
                (
                    local.rise.into(),
                    local.transit.into(),
                    local.set.into(),
                    circumpolar,
                )
            }
            None => (invalid, invalid, invalid, LUNARIS_CIRCUMPOLAR_NONE),
        };

        let output = LunarisMoonOutput {
            phase_angle: moon.phase.phase_angle.value(),
            phase_age: moon.phase.age_days,
            illuminated_fraction: moon.phase.illuminated_fraction,
            phase_name: moon.phase.name.into(),
            longitude: moon.geocentric.ecliptic.longitude.value(),
            latitude: moon.geocentric.ecliptic.latitude.value(),
            distance_km: moon.geocentric.distance_km,
            hour_angle: moon.hour_angle.value(),
            right_ascension: moon.topocentric.right_ascension.value(),
            declination: moon.topocentric.declination.value(),
            azimuth: moon.horizontal.azimuth.value(),
            altitude: moon.horizontal.altitude.value(),
            rise,
            transit,
            set,
            circumpolar,
        };
        unsafe { *out = output };
        LunarisStatus::Ok
    })
}

/// Static NUL-terminated label of a phase name ("Full Moon", ...).
#[no_mangle]
pub extern "C" fn lunaris_phase_name_str(name: LunarisPhaseName) -> *const c_char {
    let label: &'static std::ffi::CStr = match PhaseName::from(name) {
        PhaseName::NewMoon => c"New Moon",
        PhaseName::WaxingCrescent => c"Waxing Crescent",
        PhaseName::FirstQuarter => c"First Quarter",
        PhaseName::WaxingGibbous => c"Waxing Gibbous",
        PhaseName::FullMoon => c"Full Moon",
        PhaseName::WaningGibbous => c"Waning Gibbous",
        PhaseName::LastQuarter => c"Last Quarter",
        PhaseName::WaningCrescent => c"Waning Crescent",
    };
    label.as_ptr()
}
