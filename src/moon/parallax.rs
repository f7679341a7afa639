// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Horizontal parallax and apparent size of the Moon.

use crate::coordinates::Equatorial;
use qtty::{Degrees, Radians};

/// Earth equatorial radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_378.14;

/// Ratio of the lunar radius to the Earth's equatorial radius.
pub const MOON_RADIUS_RATIO: f64 = 0.272_481;

/// Sine of the equatorial horizontal parallax for a distance in km.
#[inline]
pub fn sin_parallax(distance_km: f64) -> f64 {
    EARTH_RADIUS_KM / distance_km
}

/// Equatorial horizontal parallax π.
pub fn horizontal_parallax(distance_km: f64) -> Degrees {
    Radians::new(sin_parallax(distance_km).asin()).to()
}

/// Geocentric semidiameter, `sin s = k · sin π`.
pub fn semidiameter(distance_km: f64) -> Degrees {
    Radians::new((MOON_RADIUS_RATIO * sin_parallax(distance_km)).asin()).to()
}

/// Semidiameter seen from the observer (Meeus 40.6, 40.7).
///
/// The Moon looks larger near the zenith because the observer is closer to
/// it by up to one Earth radius.
pub fn topocentric_semidiameter(
    geocentric: Equatorial,
    hour_angle: Degrees,
    distance_km: f64,
    rho: (f64, f64),
) -> Degrees {
    let (rho_sin, rho_cos) = rho;
    let sin_pi = sin_parallax(distance_km);
    let (sin_h, cos_h) = hour_angle.sin_cos();
    let (sin_d, cos_d) = geocentric.declination.sin_cos();

    let a = cos_d * sin_h;
    let b = cos_d * cos_h - rho_cos * sin_pi;
    let c = sin_d - rho_sin * sin_pi;
    let q = (a * a + b * b + c * c).sqrt();

    let sin_s = MOON_RADIUS_RATIO * sin_pi / q;
    Radians::new(sin_s.asin()).to()
}

/// Topocentric semidiameter of the Moon standing on the observer's horizon.
///
/// The line of sight is then perpendicular to the site's radius vector, so
/// the topocentric distance is `√(Δ² − ρ²)` in Earth radii.
pub fn horizon_semidiameter(distance_km: f64, rho: (f64, f64)) -> Degrees {
    let (rho_sin, rho_cos) = rho;
    let sin_pi = sin_parallax(distance_km);
    let rho_sin_pi = rho_sin.hypot(rho_cos) * sin_pi;
    let sin_s = MOON_RADIUS_RATIO * sin_pi / (1.0 - rho_sin_pi * rho_sin_pi).sqrt();
    Radians::new(sin_s.asin()).to()
}
