// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Atmospheric refraction near the horizon.
//!
//! Both directions use Meeus ch. 16: Sæmundsson's formula turns a true
//! (airless) altitude into the lift added by the atmosphere, Bennett's
//! formula does the reverse from an apparent altitude.  Results are scaled
//! for pressure and temperature with `(P / 1010) · (283 / (273 + T))`.
//!
//! Altitudes below [`MIN_ALTITUDE`] are clamped there; the formulas diverge
//! a few degrees under the horizon.

use qtty::{Arcminute, Arcminutes, Degree, Degrees};

/// Lowest altitude fed to the refraction formulas.
pub const MIN_ALTITUDE: Degrees = Degrees::new(-1.900_638_7);

/// Standard sea-level pressure in millibars.
pub const STANDARD_PRESSURE: f64 = 1010.0;

/// Standard air temperature in degrees Celsius.
pub const STANDARD_TEMPERATURE: f64 = 10.0;

#[inline]
fn weather_factor(pressure_mbar: f64, temperature_c: f64) -> f64 {
    (pressure_mbar / STANDARD_PRESSURE) * (283.0 / (273.0 + temperature_c))
}

/// Refraction for a true altitude (Sæmundsson, eq. 16.4).
pub fn refraction_from_true(
    altitude: Degrees,
    pressure_mbar: f64,
    temperature_c: f64,
) -> Degrees {
    let h = altitude.max_const(MIN_ALTITUDE).value();
    // The 0.0019279′ term makes R vanish at the zenith.
    let r = 1.02 / Degrees::new(h + 10.3 / (h + 5.11)).tan() + 0.001_927_9;
    Arcminutes::new(r.max(0.0) * weather_factor(pressure_mbar, temperature_c)).to::<Degree>()
}

/// Refraction for an apparent altitude (Bennett, eq. 16.3).
pub fn refraction_from_apparent(
    altitude: Degrees,
    pressure_mbar: f64,
    temperature_c: f64,
) -> Degrees {
    let h = altitude.max_const(MIN_ALTITUDE).value();
    let r = 1.0 / Degrees::new(h + 7.31 / (h + 4.4)).tan();
    Arcminutes::new(r.max(0.0) * weather_factor(pressure_mbar, temperature_c)).to::<Degree>()
}

/// Apparent altitude seen through the atmosphere.
pub fn apparent_altitude(true_altitude: Degrees, pressure_mbar: f64, temperature_c: f64) -> Degrees {
    true_altitude + refraction_from_true(true_altitude, pressure_mbar, temperature_c)
}

/// Arcminutes of refraction at the true horizon under standard conditions.
pub fn horizon_refraction() -> Arcminutes {
    refraction_from_true(Degrees::new(0.0), STANDARD_PRESSURE, STANDARD_TEMPERATURE)
        .to::<Arcminute>()
}
