// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Greenwich and local sidereal time.
//!
//! Mean sidereal time follows the IAU 1982 expression (Meeus eq. 12.4),
//! evaluated on UT1.  Apparent sidereal time adds the equation of the
//! equinoxes `Δψ · cos ε`.  Every angle is returned in degrees normalised
//! to `[0°, 360°)`.

use crate::instant::Time;
use crate::nutation::{nutation, true_obliquity};
use crate::scales::{JD, UT};
use qtty::{Degree, Degrees};

/// Greenwich mean sidereal time at a UT1 instant.
pub fn mean_sidereal_time(ut: Time<UT>) -> Degrees {
    let t = ut.julian_centuries().value();
    let d = ut.days_since_j2000().value();
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    Degrees::new(theta).wrap_pos()
}

/// Greenwich apparent sidereal time at a UT1 instant.
pub fn apparent_sidereal_time(ut: Time<UT>) -> Degrees {
    // Nutation changes by microarcseconds over ΔT; reading it on the UT1
    // count is indistinguishable from reading it on TT.
    let jd = Time::<JD>::from_days(ut.quantity());
    let dpsi = nutation(jd).longitude.to::<Degree>();
    let eq_equinoxes = Degrees::new(dpsi.value() * true_obliquity(jd).cos());
    (mean_sidereal_time(ut) + eq_equinoxes).wrap_pos()
}

/// Local apparent sidereal time for an east-positive longitude.
pub fn local_sidereal_time(ut: Time<UT>, longitude_east: Degrees) -> Degrees {
    (apparent_sidereal_time(ut) + longitude_east).wrap_pos()
}

/// Local hour angle `H = LST − α`, in `[0°, 360°)`.
#[inline]
pub fn hour_angle(local_sidereal_time: Degrees, right_ascension: Degrees) -> Degrees {
    (local_sidereal_time - right_ascension).wrap_pos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_12a() {
        // 1987-04-10 0h UT
        let ut = Time::<UT>::new(2_446_895.5);
        assert!((mean_sidereal_time(ut).value() - 197.693_195_08).abs() < 1e-6);
        // 13h 10m 46.1351s
        let expected = (13.0 + 10.0 / 60.0 + 46.1351 / 3600.0) * 15.0;
        assert!((apparent_sidereal_time(ut).value() - expected).abs() < 1e-4);
    }

    #[test]
    fn meeus_example_12b() {
        // 1987-04-10 19h21m UT
        let ut = Time::<UT>::new(2_446_896.306_25);
        assert!((mean_sidereal_time(ut).value() - 128.737_873_4).abs() < 1e-6);
    }

    #[test]
    fn local_sidereal_time_reference_instant() {
        // Mean 22h 10m 19.92073s, apparent 22h 10m 19.10356s
        let ut = Time::<UT>::new(2_459_596.101598);
        let mean = (22.0 + 10.0 / 60.0 + 19.920_73 / 3600.0) * 15.0;
        assert!((mean_sidereal_time(ut).value() - mean).abs() < 1e-6);

        let lst = local_sidereal_time(ut, Degrees::new(116.864_995_912_233_1));
        assert!((lst.value() - 89.444_594_08).abs() < 1e-6, "LST = {lst}");
    }

    #[test]
    fn result_is_normalised() {
        for k in 0..50 {
            let ut = Time::<UT>::new(2_451_545.0 + 17.37 * f64::from(k));
            let lst = local_sidereal_time(ut, Degrees::new(-170.0));
            assert!((0.0..360.0).contains(&lst.value()));
        }
    }

    #[test]
    fn hour_angle_wraps() {
        let h = hour_angle(Degrees::new(10.0), Degrees::new(350.0));
        assert!((h.value() - 20.0).abs() < 1e-12);
        let h = hour_angle(Degrees::new(350.0), Degrees::new(10.0));
        assert!((h.value() - 340.0).abs() < 1e-12);
    }
}
