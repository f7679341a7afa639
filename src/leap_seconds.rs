// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Cumulative TAI − UTC offsets.
//!
//! The table records the UTC Julian Day at which each offset takes effect,
//! starting with the 10 s offset of 1972-01-01 when UTC adopted whole leap
//! seconds.  Lookups are a step function: no interpolation happens between
//! entries, and the offset is zero before the first one.

use crate::instant::Time;
use crate::scales::UTC;
use qtty::Seconds;

/// One row of the leap-second table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeapSecondEntry {
    /// UTC Julian Day at which `tai_minus_utc` starts to apply.
    pub effective_jd: f64,
    /// Cumulative TAI − UTC in seconds.
    pub tai_minus_utc: f64,
}

const fn entry(effective_jd: f64, tai_minus_utc: f64) -> LeapSecondEntry {
    LeapSecondEntry {
        effective_jd,
        tai_minus_utc,
    }
}

/// TAI − UTC history from 1972-01-01 to the 2017-01-01 leap second.
#[rustfmt::skip]
pub const LEAP_SECONDS: [LeapSecondEntry; 28] = [
    entry(2_441_317.5, 10.0), // 1972-01-01
    entry(2_441_499.5, 11.0), // 1972-07-01
    entry(2_441_683.5, 12.0), // 1973-01-01
    entry(2_442_048.5, 13.0), // 1974-01-01
    entry(2_442_413.5, 14.0), // 1975-01-01
    entry(2_442_778.5, 15.0), // 1976-01-01
    entry(2_443_144.5, 16.0), // 1977-01-01
    entry(2_443_509.5, 17.0), // 1978-01-01
    entry(2_443_874.5, 18.0), // 1979-01-01
    entry(2_444_239.5, 19.0), // 1980-01-01
    entry(2_444_786.5, 20.0), // 1981-07-01
    entry(2_445_151.5, 21.0), // 1982-07-01
    entry(2_445_516.5, 22.0), // 1983-07-01
    entry(2_446_247.5, 23.0), // 1985-07-01
    entry(2_447_161.5, 24.0), // 1988-01-01
    entry(2_447_892.5, 25.0), // 1990-01-01
    entry(2_448_257.5, 26.0), // 1991-01-01
    entry(2_448_804.5, 27.0), // 1992-07-01
    entry(2_449_169.5, 28.0), // 1993-07-01
    entry(2_449_534.5, 29.0), // 1994-07-01
    entry(2_450_083.5, 30.0), // 1996-01-01
    entry(2_450_630.5, 31.0), // 1997-07-01
    entry(2_451_179.5, 32.0), // 1999-01-01
    entry(2_453_736.5, 33.0), // 2006-01-01
    entry(2_454_832.5, 34.0), // 2009-01-01
    entry(2_456_109.5, 35.0), // 2012-07-01
    entry(2_457_204.5, 36.0), // 2015-07-01
    entry(2_457_754.5, 37.0), // 2017-01-01
];

/// TAI − UTC in effect at the given UTC instant.
///
/// Returns the offset of the latest entry whose effective date is not after
/// `utc`, or zero before 1972.
pub fn tai_minus_utc(utc: Time<UTC>) -> Seconds {
    let jd = utc.value();
    let idx = LEAP_SECONDS.partition_point(|e| e.effective_jd <= jd);
    match idx {
        0 => Seconds::new(0.0),
        i => Seconds::new(LEAP_SECONDS[i - 1].tai_minus_utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leap_at(jd: f64) -> f64 {
        tai_minus_utc(Time::<UTC>::new(jd)).value()
    }

    #[test]
    fn table_is_sorted() {
        assert!(LEAP_SECONDS
            .windows(2)
            .all(|w| w[0].effective_jd < w[1].effective_jd));
    }

    #[test]
    fn every_step_is_one_whole_second() {
        assert_eq!(LEAP_SECONDS[0].tai_minus_utc, 10.0);
        assert!(LEAP_SECONDS
            .windows(2)
            .all(|w| w[1].tai_minus_utc - w[0].tai_minus_utc == 1.0));
    }

    #[test]
    fn offset_is_non_decreasing() {
        let mut previous = leap_at(2_437_000.5);
        let mut jd = 2_437_000.5;
        while jd < 2_460_000.5 {
            let current = leap_at(jd);
            assert!(current >= previous, "TAI − UTC fell to {current} at JD {jd}");
            previous = current;
            jd += 0.5;
        }
        for e in LEAP_SECONDS {
            assert!(leap_at(e.effective_jd) >= leap_at(e.effective_jd - 0.1));
        }
    }

    #[test]
    fn zero_before_first_entry() {
        assert_eq!(leap_at(2_441_317.5 - 1e-6), 0.0);
        assert_eq!(leap_at(2_437_512.4), 0.0);
        assert_eq!(leap_at(0.0), 0.0);
    }

    #[test]
    fn step_applies_exactly_at_entry() {
        assert_eq!(leap_at(2_457_754.5 - 1e-6), 36.0);
        assert_eq!(leap_at(2_457_754.5), 37.0);
    }

    #[test]
    fn value_in_2003() {
        // 2003-08-28
        assert_eq!(leap_at(2_452_879.5), 32.0);
    }

    #[test]
    fn holds_last_value_into_the_future() {
        assert_eq!(leap_at(2_470_000.0), 37.0);
    }
}
