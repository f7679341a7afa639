// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Apparent geocentric place of the Sun.
//!
//! The Earth's heliocentric place comes from the truncated VSOP87D series in
//! [`earth`].  It is turned around to a geocentric place, reduced to the FK5
//! frame (Meeus eq. 32.3), and corrected for nutation in longitude and
//! annual aberration (Meeus eq. 25.10).  Over the centuries around J2000 the
//! result agrees with the full theory to about one arcsecond.

pub mod earth;

use crate::coordinates::{Ecliptic, Equatorial};
use crate::nutation::{nutation, true_obliquity};
use crate::JulianDate;
use qtty::{Arcseconds, Degree, Degrees};

/// Kilometres per astronomical unit.
pub const AU_KM: f64 = 149_597_870.7;

/// Constant of aberration divided by one astronomical unit.
const ABERRATION: Arcseconds = Arcseconds::new(20.4898);

/// Apparent geocentric position of the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Apparent ecliptic place, true equinox of date.
    pub ecliptic: Ecliptic,
    pub equatorial: Equatorial,
    /// Earth–Sun distance in astronomical units.
    pub distance_au: f64,
}

/// Reduce a VSOP87 geocentric place to the FK5 frame.
fn to_fk5(t: f64, longitude: Degrees, latitude: Degrees) -> Ecliptic {
    let lambda = Degrees::new(longitude.value() - 1.397 * t - 0.000_31 * t * t);
    let (sin_l, cos_l) = lambda.sin_cos();
    let dl = -0.090_33 + 0.039_16 * (cos_l + sin_l) * latitude.tan();
    let db = 0.039_16 * (cos_l - sin_l);
    Ecliptic {
        longitude: longitude + Arcseconds::new(dl).to::<Degree>(),
        latitude: latitude + Arcseconds::new(db).to::<Degree>(),
    }
}

/// Sun position at a Julian Day (TT).
pub fn sun_position(jd: JulianDate) -> SunPosition {
    let t = jd.julian_centuries().value();
    let earth = earth::heliocentric(t / 10.0);

    let geometric = to_fk5(
        t,
        (earth.longitude + Degrees::new(180.0)).wrap_pos(),
        Degrees::new(-earth.latitude.value()),
    );

    let aberration = Arcseconds::new(-ABERRATION.value() / earth.radius_au);
    let longitude = geometric.longitude + (nutation(jd).longitude + aberration).to::<Degree>();

    let ecliptic = Ecliptic {
        longitude: longitude.wrap_pos(),
        latitude: geometric.latitude,
    };
    SunPosition {
        ecliptic,
        equatorial: ecliptic.to_equatorial(true_obliquity(jd)),
        distance_au: earth.radius_au,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25b() {
        // 1992-10-13 0h TD
        let sun = sun_position(JulianDate::new(2_448_908.5));
        // Meeus: λ = 199°54′21.82″, R = 0.99760775
        assert!((sun.ecliptic.longitude.value() - 199.906_061).abs() < 1e-5);
        assert!((sun.ecliptic.latitude.value() - 0.000_172_5).abs() < 1e-6);
        assert!((sun.distance_au - 0.997_607_75).abs() < 1e-7);
        // α = 13h13m30.749s, δ = −7°47′01.74″
        assert!((sun.equatorial.right_ascension.value() - 198.378_178).abs() < 1e-5);
        assert!((sun.equatorial.declination.value() - (-7.783_871)).abs() < 1e-5);
    }

    #[test]
    fn reference_instant() {
        let sun = sun_position(JulianDate::new(2_459_596.101598));
        assert!((sun.ecliptic.longitude.value() - 296.427_806).abs() < 1e-5);
        assert!((sun.distance_au - 0.983_688_5).abs() < 1e-6);
    }

    #[test]
    fn fk5_shift_is_a_fraction_of_an_arcsecond() {
        let place = to_fk5(0.2, Degrees::new(120.0), Degrees::new(0.0001));
        assert!((place.longitude - Degrees::new(120.0)).abs() < Degrees::new(0.2 / 3600.0));
        assert!((place.latitude - Degrees::new(0.0001)).abs() < Degrees::new(0.1 / 3600.0));
    }

    #[test]
    fn distance_stays_within_orbit_bounds() {
        for k in 0..36 {
            let sun = sun_position(JulianDate::new(2_451_545.0 + 10.15 * f64::from(k)));
            assert!((0.983..=1.017).contains(&sun.distance_au));
        }
    }
}
