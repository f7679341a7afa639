// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observing site.

use crate::coordinates::geocentric_terms;
use crate::error::{Error, Result};
use crate::refraction::{STANDARD_PRESSURE, STANDARD_TEMPERATURE};
use qtty::Degrees;

/// A validated observing site.
///
/// Longitude is east-positive.  Pressure and temperature only feed the
/// refraction model and default to 1010 mbar and 10 °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    longitude: Degrees,
    latitude: Degrees,
    height_m: f64,
    pressure_mbar: f64,
    temperature_c: f64,
    utc_offset_hours: f64,
}

fn check(ok: bool, what: impl FnOnce() -> String) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidObserver(what()))
    }
}

impl Observer {
    /// Site at the given east longitude, latitude and height above sea level.
    pub fn new(longitude_east: Degrees, latitude: Degrees, height_m: f64) -> Result<Self> {
        let lon = longitude_east.value();
        let lat = latitude.value();
        check(lon.is_finite() && (-180.0..=180.0).contains(&lon), || {
            format!("longitude {lon} outside [-180, 180]")
        })?;
        check(lat.is_finite() && (-90.0..=90.0).contains(&lat), || {
            format!("latitude {lat} outside [-90, 90]")
        })?;
        check(height_m.is_finite(), || format!("height {height_m} is not finite"))?;
        Ok(Self {
            longitude: longitude_east,
            latitude,
            height_m,
            pressure_mbar: STANDARD_PRESSURE,
            temperature_c: STANDARD_TEMPERATURE,
            utc_offset_hours: 0.0,
        })
    }

    /// Replace the atmospheric conditions used for refraction.
    pub fn with_atmosphere(mut self, pressure_mbar: f64, temperature_c: f64) -> Result<Self> {
        check(pressure_mbar.is_finite() && pressure_mbar >= 0.0, || {
            format!("pressure {pressure_mbar} mbar is not a valid pressure")
        })?;
        check(temperature_c.is_finite() && temperature_c > -273.0, || {
            format!("temperature {temperature_c} °C is below absolute zero")
        })?;
        self.pressure_mbar = pressure_mbar;
        self.temperature_c = temperature_c;
        Ok(self)
    }

    /// Offset of the observer's civil clock from UTC, in hours.
    pub fn with_utc_offset(mut self, hours: f64) -> Result<Self> {
        check(hours.is_finite() && hours.abs() <= 14.0, || {
            format!("UTC offset {hours} h outside [-14, 14]")
        })?;
        self.utc_offset_hours = hours;
        Ok(self)
    }

    #[inline]
    pub fn longitude(&self) -> Degrees {
        self.longitude
    }

    #[inline]
    pub fn latitude(&self) -> Degrees {
        self.latitude
    }

    #[inline]
    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    #[inline]
    pub fn pressure_mbar(&self) -> f64 {
        self.pressure_mbar
    }

    #[inline]
    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    #[inline]
    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    /// `(ρ sin φ′, ρ cos φ′)` for this site.
    pub fn geocentric_terms(&self) -> (f64, f64) {
        geocentric_terms(self.latitude, self.height_m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let obs = Observer::new(Degrees::new(11.6), Degrees::new(48.1), 520.0).unwrap();
        assert_eq!(obs.pressure_mbar(), 1010.0);
        assert_eq!(obs.temperature_c(), 10.0);
        assert_eq!(obs.utc_offset_hours(), 0.0);
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        for (lon, lat) in [(0.0, 90.5), (0.0, -91.0), (180.1, 0.0), (-200.0, 0.0), (f64::NAN, 0.0)] {
            let err = Observer::new(Degrees::new(lon), Degrees::new(lat), 0.0).unwrap_err();
            assert!(matches!(err, Error::InvalidObserver(_)), "{lon} {lat}");
        }
        assert!(Observer::new(Degrees::new(0.0), Degrees::new(0.0), f64::INFINITY).is_err());
    }

    #[test]
    fn accepts_the_boundaries() {
        assert!(Observer::new(Degrees::new(180.0), Degrees::new(90.0), 0.0).is_ok());
        assert!(Observer::new(Degrees::new(-180.0), Degrees::new(-90.0), -400.0).is_ok());
    }

    #[test]
    fn builder_setters() {
        let obs = Observer::new(Degrees::new(0.0), Degrees::new(51.5), 0.0)
            .and_then(|o| o.with_atmosphere(980.0, -5.0))
            .and_then(|o| o.with_utc_offset(1.0))
            .unwrap();
        assert_eq!(obs.pressure_mbar(), 980.0);
        assert_eq!(obs.temperature_c(), -5.0);
        assert_eq!(obs.utc_offset_hours(), 1.0);

        let base = Observer::new(Degrees::new(0.0), Degrees::new(0.0), 0.0).unwrap();
        assert!(base.with_atmosphere(-1.0, 10.0).is_err());
        assert!(base.with_atmosphere(1010.0, -300.0).is_err());
        assert!(base.with_utc_offset(15.0).is_err());
    }
}
