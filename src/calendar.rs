// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar dates and their Julian Day numbers.
//!
//! Dates from 1582-10-15 onward are Gregorian, earlier dates are Julian
//! (Meeus, *Astronomical Algorithms*, ch. 7).  The ten days removed by the
//! reform (1582-10-05 … 1582-10-14) are rejected.  The day field is
//! fractional: `16.5` is noon on the 16th.
//!
//! A calendar date carries no time scale.  [`CalendarDate::to_time`] places
//! the Julian Day number on the scale the caller names, usually
//! [`UTC`](crate::UTC) for civil input.

use crate::error::{Error, Result};
use crate::instant::{Time, TimeScale};
use chrono::{DateTime, Datelike, Timelike, Utc};
use qtty::Days;

/// First Julian Day of the Gregorian calendar (1582-10-15 0h).
const GREGORIAN_START_JD: f64 = 2_299_160.5;

/// Earliest year accepted (start of the Julian Period).
pub const MIN_YEAR: i32 = -4712;

/// A calendar date with a fractional day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: f64,
}

#[inline]
fn is_gregorian(year: i32, month: u32, day: f64) -> bool {
    (year, month, day) >= (1582, 10, 15.0)
}

/// Leap-year rule of whichever calendar is in force in `year`.
pub fn is_leap_year(year: i32) -> bool {
    if year > 1582 {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year.rem_euclid(4) == 0
    }
}

/// Number of days in `month` of `year`, or `None` for a month outside 1–12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Julian Day number of a calendar date.
///
/// Fails with [`Error::InvalidDate`] when the month is outside 1–12, the
/// day is outside `[1, days_in_month + 1)`, the year precedes −4712, or the
/// date falls in the days dropped by the Gregorian reform.
pub fn julian_day(year: i32, month: u32, fractional_day: f64) -> Result<Days> {
    Ok(CalendarDate::new(year, month, fractional_day)?.julian_day())
}

impl CalendarDate {
    /// Validated constructor.
    pub fn new(year: i32, month: u32, day: f64) -> Result<Self> {
        let Some(dim) = days_in_month(year, month) else {
            return Err(Error::invalid_date(year, month, day, "month out of range"));
        };
        if !day.is_finite() || day < 1.0 || day >= f64::from(dim) + 1.0 {
            return Err(Error::invalid_date(year, month, day, "day out of range"));
        }
        if year < MIN_YEAR {
            return Err(Error::invalid_date(
                year,
                month,
                day,
                "year precedes the Julian Period",
            ));
        }
        if year == 1582 && month == 10 && (5.0..15.0).contains(&day.floor()) {
            return Err(Error::invalid_date(
                year,
                month,
                day,
                "day removed by the Gregorian reform",
            ));
        }
        Ok(Self { year, month, day })
    }

    /// Date and time of day, folded into a fractional day.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self> {
        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(Error::invalid_date(
                year,
                month,
                f64::from(day),
                "time of day out of range",
            ));
        }
        let fraction = (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;
        Self::new(year, month, f64::from(day) + fraction)
    }

    /// Calendar date of a `chrono` UTC timestamp.
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        let seconds = f64::from(dt.second()) + f64::from(dt.nanosecond()) / 1e9;
        let fraction =
            (f64::from(dt.hour()) + (f64::from(dt.minute()) + seconds / 60.0) / 60.0) / 24.0;
        Self {
            year: dt.year(),
            month: dt.month(),
            day: f64::from(dt.day()) + fraction,
        }
    }

    /// Julian Day number (Meeus eq. 7.1).
    pub fn julian_day(&self) -> Days {
        let (mut y, mut m) = (self.year, self.month as i32);
        if m <= 2 {
            y -= 1;
            m += 12;
        }
        let b = if is_gregorian(self.year, self.month, self.day) {
            let a = (f64::from(y) / 100.0).floor();
            2.0 - a + (a / 4.0).floor()
        } else {
            0.0
        };
        let jd = (365.25 * f64::from(y + 4716)).floor()
            + (30.6001 * f64::from(m + 1)).floor()
            + self.day
            + b
            - 1524.5;
        Days::new(jd)
    }

    /// The Julian Day number read on time scale `S`.
    #[inline]
    pub fn to_time<S: TimeScale>(&self) -> Time<S> {
        Time::<S>::from_days(self.julian_day())
    }

    /// Calendar date of a Julian Day number (Meeus ch. 7, inverse).
    pub fn from_julian_day(jd: Days) -> Self {
        let jd = jd.value() + 0.5;
        let z = jd.floor();
        let f = jd - z;
        let a = if z < GREGORIAN_START_JD + 0.5 {
            z
        } else {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        };
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = b - d - (30.6001 * e).floor() + f;
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
        Self {
            year: year as i32,
            month: month as u32,
            day,
        }
    }

    /// Calendar date of an instant, read on its own scale.
    #[inline]
    pub fn from_time<S: TimeScale>(time: Time<S>) -> Self {
        Self::from_julian_day(time.quantity())
    }

    /// Ordinal day of the year, 1-based (Meeus ch. 7).
    pub fn day_of_year(&self) -> u32 {
        let m = self.month as i32;
        let k = if is_leap_year(self.year) { 1 } else { 2 };
        let n = (275 * m) / 9 - k * ((m + 9) / 12) + self.day.floor() as i32 - 30;
        n as u32
    }

    /// Year with the elapsed part of the year as a fraction.
    pub fn fractional_year(&self) -> f64 {
        let days_in_year = if is_leap_year(self.year) { 366.0 } else { 365.0 };
        let elapsed = f64::from(self.day_of_year() - 1) + self.day.fract();
        f64::from(self.year) + elapsed / days_in_year
    }

    /// Split the fractional part of the day into hours, minutes and seconds.
    pub fn hms(&self) -> (u32, u32, f64) {
        let total = self.day.fract() * 86_400.0;
        let hour = (total / 3600.0).floor();
        let minute = ((total - hour * 3600.0) / 60.0).floor();
        let second = total - hour * 3600.0 - minute * 60.0;
        (hour as u32, minute as u32, second)
    }
}

/// Calendar breakdown of an event time.
///
/// `is_valid == false` means the event does not happen in the queried
/// interval; the remaining fields are then zero and carry no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTimeResult {
    pub is_valid: bool,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl DateTimeResult {
    /// The "no event" value.
    pub const INVALID: Self = Self {
        is_valid: false,
        year: 0,
        month: 0,
        day: 0,
        hour: 0,
        minute: 0,
        second: 0.0,
    };

    /// Break a Julian Day number into calendar fields.
    pub fn from_julian_day(jd: Days) -> Self {
        let date = CalendarDate::from_julian_day(jd);
        let (hour, minute, second) = date.hms();
        Self {
            is_valid: true,
            year: date.year,
            month: date.month,
            day: date.day.floor() as u32,
            hour,
            minute,
            second,
        }
    }
}

impl From<&DateTime<Utc>> for CalendarDate {
    fn from(dt: &DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}
