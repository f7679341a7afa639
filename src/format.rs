// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sexagesimal rendering of angles.
//!
//! Seconds are rounded to the requested number of decimals first and the
//! carry is propagated into minutes and then degrees (or hours), so a field
//! never reads `60`.  The sign is kept even when the leading field is zero.

use qtty::Degrees;

/// Largest number of decimals honoured for the seconds field.
pub const MAX_PRECISION: usize = 9;

/// An angle split into sign, leading field, minutes and rounded seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    pub negative: bool,
    pub whole: u64,
    pub minutes: u32,
    pub seconds: f64,
    precision: usize,
}

impl Sexagesimal {
    /// Split `value` (degrees or hours) with seconds rounded to `precision`.
    pub fn new(value: f64, precision: usize) -> Self {
        let precision = precision.min(MAX_PRECISION);
        let scale = 10u64.pow(precision as u32);
        let units = (value.abs() * 3600.0 * scale as f64).round() as u64;

        let per_minute = 60 * scale;
        let per_whole = 60 * per_minute;
        let whole = units / per_whole;
        let minutes = (units % per_whole) / per_minute;
        let seconds = (units % per_minute) as f64 / scale as f64;

        Self {
            negative: value.is_sign_negative() && units > 0,
            whole,
            minutes: minutes as u32,
            seconds,
            precision,
        }
    }

    fn render(&self, marks: [&str; 3], width: usize) -> String {
        let sign = if self.negative { "-" } else { "" };
        let p = self.precision;
        let sec_width = if p == 0 { width } else { width + p + 1 };
        format!(
            "{sign}{}{} {:0width$}{} {:0sec_width$.p$}{}",
            self.whole, marks[0], self.minutes, marks[1], self.seconds, marks[2],
        )
    }
}

/// `13° 46' 10.766"`
pub fn to_dms(angle: Degrees, precision: usize) -> String {
    to_dms_padded(angle, precision, 0)
}

/// `16h 6m 46.994s`; the angle is converted to hours first.
pub fn to_hms(angle: Degrees, precision: usize) -> String {
    to_hms_padded(angle, precision, 0)
}

/// [`to_dms`] with minutes and whole seconds zero-padded to `width` digits.
pub fn to_dms_padded(angle: Degrees, precision: usize, width: usize) -> String {
    Sexagesimal::new(angle.value(), precision).render(["°", "'", "\""], width)
}

/// [`to_hms`] with minutes and whole seconds zero-padded to `width` digits.
pub fn to_hms_padded(angle: Degrees, precision: usize, width: usize) -> String {
    Sexagesimal::new(angle.value() / 15.0, precision).render(["h", "m", "s"], width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deg(x: f64) -> Degrees {
        Degrees::new(x)
    }

    #[test]
    fn dms() {
        assert_eq!(to_dms(deg(13.769_657_226_951_539), 3), "13° 46' 10.766\"");
        assert_eq!(to_dms(deg(13.769_657_226_951_539), 2), "13° 46' 10.77\"");
        assert_eq!(to_dms(deg(-19.6475), 2), "-19° 38' 51.00\"");
    }

    #[test]
    fn hms() {
        assert_eq!(to_hms(deg(241.695_809_251_315_5), 3), "16h 6m 46.994s");
        assert_eq!(to_hms(deg(0.0), 1), "0h 0m 0.0s");
    }

    #[test]
    fn carry_never_prints_sixty() {
        assert_eq!(to_dms(deg(59.999_999), 2), "60° 0' 0.00\"");
        assert_eq!(to_dms(deg(59.9999), 0), "60° 0' 0\"");
        assert_eq!(to_dms(deg(10.0 + 59.999_9 / 60.0), 1), "11° 0' 0.0\"");
        // 23h 59m 59.9996s
        assert_eq!(to_hms(deg(359.999_998_3), 3), "24h 0m 0.000s");
    }

    #[test]
    fn sign_survives_a_zero_leading_field() {
        assert_eq!(to_dms(deg(-0.5), 1), "-0° 30' 0.0\"");
        assert_eq!(to_hms(deg(-7.5), 0), "-0h 30m 0s");
        // Rounds to zero: no sign
        assert_eq!(to_dms(deg(-1e-9), 2), "0° 0' 0.00\"");
    }

    #[test]
    fn padded() {
        assert_eq!(to_dms_padded(deg(5.1), 2, 2), "5° 06' 00.00\"");
        assert_eq!(to_hms_padded(deg(241.695_809_251_315_5), 0, 2), "16h 06m 47s");
    }

    #[test]
    fn precision_is_capped() {
        let s = Sexagesimal::new(1.0, 30);
        assert_eq!(s.whole, 1);
        assert_eq!(to_dms(deg(1.0), 30), "1° 0' 0.000000000\"");
    }
}
