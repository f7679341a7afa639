// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Spherical coordinate frames and the transforms between them.
//!
//! All angles are [`Degrees`]; longitudes and right ascensions are kept in
//! `[0°, 360°)`, latitudes and declinations in `[-90°, 90°]`.  Azimuth is
//! measured from north through east.

use qtty::{Degrees, Radians};

/// Equatorial radius of the Earth used for parallax work (IAU 1976), metres.
pub const EARTH_EQUATORIAL_RADIUS_M: f64 = 6_378_140.0;

/// Polar-to-equatorial axis ratio `b/a` of the reference ellipsoid.
pub const EARTH_AXIS_RATIO: f64 = 0.996_647_19;

#[inline]
fn deg(rad: f64) -> Degrees {
    Radians::new(rad).to()
}

/// Geocentric ecliptic coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ecliptic {
    pub longitude: Degrees,
    pub latitude: Degrees,
}

/// Equatorial coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    pub right_ascension: Degrees,
    pub declination: Degrees,
}

/// Local horizontal coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Horizontal {
    /// Azimuth from north through east.
    pub azimuth: Degrees,
    pub altitude: Degrees,
}

impl Ecliptic {
    /// Rotate into the equatorial frame for the given obliquity (Meeus 13.3, 13.4).
    pub fn to_equatorial(&self, obliquity: Degrees) -> Equatorial {
        let (sin_l, cos_l) = self.longitude.sin_cos();
        let (sin_b, cos_b) = self.latitude.sin_cos();
        let (sin_e, cos_e) = obliquity.sin_cos();

        let alpha = (sin_l * cos_e - self.latitude.tan() * sin_e).atan2(cos_l);
        let delta = (sin_b * cos_e + cos_b * sin_e * sin_l).clamp(-1.0, 1.0).asin();

        Equatorial {
            right_ascension: deg(alpha).wrap_pos(),
            declination: deg(delta),
        }
    }
}

impl Equatorial {
    /// Horizontal coordinates for a local hour angle and geographic latitude.
    pub fn to_horizontal(&self, hour_angle: Degrees, latitude: Degrees) -> Horizontal {
        let (sin_h, cos_h) = hour_angle.sin_cos();
        let (sin_d, cos_d) = self.declination.sin_cos();
        let (sin_p, cos_p) = latitude.sin_cos();

        // Horizon frame: x toward the west point, y toward the south point, z up.
        // Meeus 13.5 scaled by cos δ, so azimuth is measured from the south.
        let x = cos_d * sin_h;
        let y = cos_h * cos_d * sin_p - sin_d * cos_p;
        let z = sin_p * sin_d + cos_p * cos_d * cos_h;
        let az_south = x.atan2(y);
        let alt = z.atan2(x.hypot(y));

        Horizontal {
            azimuth: (deg(az_south) + Degrees::new(180.0)).wrap_pos(),
            altitude: deg(alt),
        }
    }
}

/// `ρ sin φ′` and `ρ cos φ′` for a site, in Earth equatorial radii (Meeus ch. 11).
pub fn geocentric_terms(latitude: Degrees, height_m: f64) -> (f64, f64) {
    let u = (EARTH_AXIS_RATIO * latitude.tan()).atan();
    let h = height_m / EARTH_EQUATORIAL_RADIUS_M;
    let (sin_p, cos_p) = latitude.sin_cos();
    (EARTH_AXIS_RATIO * u.sin() + h * sin_p, u.cos() + h * cos_p)
}

/// Topocentric place of a body and its topocentric hour angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Topocentric {
    pub equatorial: Equatorial,
    pub hour_angle: Degrees,
}

/// Shift a geocentric place to the observer (Meeus 40.2, 40.3).
///
/// `sin_parallax` is the sine of the equatorial horizontal parallax, and
/// `rho` the pair returned by [`geocentric_terms`].
pub fn topocentric(
    geocentric: Equatorial,
    hour_angle: Degrees,
    sin_parallax: f64,
    rho: (f64, f64),
) -> Topocentric {
    let (rho_sin, rho_cos) = rho;
    let (sin_h, cos_h) = hour_angle.sin_cos();
    let (sin_d, cos_d) = geocentric.declination.sin_cos();

    let denom = cos_d - rho_cos * sin_parallax * cos_h;
    let d_alpha = (-rho_cos * sin_parallax * sin_h).atan2(denom);
    let delta = ((sin_d - rho_sin * sin_parallax) * d_alpha.cos()).atan2(denom);

    let d_alpha = deg(d_alpha);
    Topocentric {
        equatorial: Equatorial {
            right_ascension: (geocentric.right_ascension + d_alpha).wrap_pos(),
            declination: deg(delta),
        },
        hour_angle: (hour_angle - d_alpha).wrap_pos(),
    }
}

/// Angular separation of two equatorial positions.
pub fn separation(a: Equatorial, b: Equatorial) -> Degrees {
    let (sin_da, cos_da) = a.declination.sin_cos();
    let (sin_db, cos_db) = b.declination.sin_cos();
    let cos_psi = sin_da * sin_db
        + cos_da * cos_db * (a.right_ascension - b.right_ascension).cos();
    Radians::new(cos_psi.clamp(-1.0, 1.0).acos()).to()
}
