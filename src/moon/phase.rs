// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunar phase: elongation, illuminated fraction, age and name.
//!
//! The elongation is measured in ecliptic longitude from the Sun and runs
//! through `[0°, 360°)` over one synodic month.  The illuminated fraction
//! uses the selenocentric Sun–Moon–Earth angle `i` of Meeus ch. 48, so it
//! follows the Moon's latitude and distance as well as its longitude.

use crate::coordinates::{separation, Equatorial};
use crate::sun::{SunPosition, AU_KM};
use qtty::{Degrees, Radians};

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588;

/// The eight conventional phase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum PhaseName {
    NewMoon = 0,
    WaxingCrescent = 1,
    FirstQuarter = 2,
    WaxingGibbous = 3,
    FullMoon = 4,
    WaningGibbous = 5,
    LastQuarter = 6,
    WaningCrescent = 7,
}

impl PhaseName {
    pub const ALL: [PhaseName; 8] = [
        PhaseName::NewMoon,
        PhaseName::WaxingCrescent,
        PhaseName::FirstQuarter,
        PhaseName::WaxingGibbous,
        PhaseName::FullMoon,
        PhaseName::WaningGibbous,
        PhaseName::LastQuarter,
        PhaseName::WaningCrescent,
    ];

    /// Phase whose 45° bin contains the elongation.
    ///
    /// Bins are centred on multiples of 45°; a value exactly on an edge goes
    /// to the later phase.
    pub fn from_elongation(elongation: Degrees) -> Self {
        let shifted = (elongation + Degrees::new(22.5)).wrap_pos().value();
        let index = ((shifted / 45.0).floor() as usize).min(7);
        Self::ALL[index]
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            PhaseName::NewMoon => "New Moon",
            PhaseName::WaxingCrescent => "Waxing Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::FullMoon => "Full Moon",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::WaningCrescent => "Waning Crescent",
        }
    }
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Phase quantities at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhase {
    /// Moon − Sun apparent longitude, `[0°, 360°)`.
    pub elongation: Degrees,
    /// Elongation folded into `[0°, 180°]`.
    pub phase_angle: Degrees,
    /// Selenocentric angle between Sun and Earth, `[0°, 180°]`.
    pub illumination_angle: Degrees,
    /// Illuminated fraction of the disk, `[0, 1]`.
    pub illuminated_fraction: f64,
    /// Days since the last mean new Moon, `[0, SYNODIC_MONTH)`.
    pub age_days: f64,
    pub name: PhaseName,
}

/// `k = (1 + cos i) / 2` (Meeus 48.1).
#[inline]
pub fn illuminated_fraction_from_phase_angle(i: Degrees) -> f64 {
    (1.0 + i.cos()) / 2.0
}

impl MoonPhase {
    /// Phase from the apparent places of the Moon and the Sun.
    pub fn new(
        moon_longitude: Degrees,
        moon_equatorial: Equatorial,
        moon_distance_km: f64,
        sun: &SunPosition,
    ) -> Self {
        let elongation = (moon_longitude - sun.ecliptic.longitude).wrap_pos();
        let phase_angle = if elongation.value() > 180.0 {
            Degrees::new(360.0) - elongation
        } else {
            elongation
        };

        // Geocentric elongation ψ, then i from the Earth–Sun–Moon triangle.
        let psi = separation(sun.equatorial, moon_equatorial);
        let r = sun.distance_au * AU_KM;
        let (sin_psi, cos_psi) = psi.sin_cos();
        let i: Degrees = Radians::new((r * sin_psi).atan2(moon_distance_km - r * cos_psi)).to();

        Self {
            elongation,
            phase_angle,
            illumination_angle: i,
            illuminated_fraction: illuminated_fraction_from_phase_angle(i).clamp(0.0, 1.0),
            age_days: elongation.value() / (360.0 / SYNODIC_MONTH),
            name: PhaseName::from_elongation(elongation),
        }
    }
}
