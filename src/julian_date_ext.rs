// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day (`Time<JD>`) specific extensions.

use qtty::*;

use super::calendar::CalendarDate;
use super::instant::Time;
use super::scales::{JD, UT};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TT  (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian centuries since J2000.0, the argument of every series in the
    /// crate (nutation, lunar and solar arguments, sidereal time).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Calendar date of this Julian Day.
    #[inline]
    pub fn to_calendar(&self) -> CalendarDate {
        CalendarDate::from_julian_day(self.quantity())
    }
}

impl Time<UT> {
    /// Julian centuries of UT1 since J2000.0, used by sidereal time.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Time::<JD>::from_days(self.quantity()).julian_centuries()
    }

    /// Days of UT1 elapsed since J2000.0.
    #[inline]
    pub fn days_since_j2000(&self) -> Days {
        self.quantity() - Time::<JD>::J2000.quantity()
    }
}

impl From<Centuries> for Time<JD> {
    fn from(centuries: Centuries) -> Self {
        Self::J2000 + Days::new(centuries.value() * Self::JULIAN_CENTURY.value())
    }
}

impl From<Time<JD>> for Centuries {
    fn from(jd: Time<JD>) -> Self {
        jd.julian_centuries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centuries_since_j2000() {
        let jd = Time::<JD>::J2000 + Days::new(36_525.0 * 3.0);
        let centuries: Centuries = jd.into();
        assert!((centuries - Centuries::new(3.0)).abs() < Centuries::new(1e-12));
        let back = Time::<JD>::from(centuries);
        assert!((back - jd).abs() < Days::new(1e-9));
    }

    #[test]
    fn meeus_example_47a_argument() {
        // 1992-04-12 0h TD
        let t = Time::<JD>::new(2_448_724.5).julian_centuries();
        assert!((t.value() - (-0.077_221_081_451)).abs() < 1e-12);
    }

    #[test]
    fn calendar_view() {
        let date = Time::<JD>::J2000.to_calendar();
        assert_eq!((date.year, date.month), (2000, 1));
        assert!((date.day - 1.5).abs() < 1e-9);
    }

    #[test]
    fn ut_centuries_share_the_tt_epoch() {
        let ut = Time::<UT>::new(2_446_895.5);
        assert!((ut.julian_centuries().value() - (-0.127_296_372_348)).abs() < 1e-12);
        assert_eq!(ut.days_since_j2000(), Days::new(-4_649.5));
    }
}
