// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The full Moon computation for an observer.

use crate::calendar::CalendarDate;
use crate::coordinates::{topocentric, Ecliptic, Equatorial, Horizontal};
use crate::error::{Error, Result};
use crate::instant::Time;
use crate::moon::parallax::{
    horizontal_parallax, semidiameter, sin_parallax, topocentric_semidiameter,
};
use crate::moon::phase::MoonPhase;
use crate::moon::series::geocentric;
use crate::nutation::{nutation, true_obliquity};
use crate::observer::Observer;
use crate::refraction::{refraction_from_true, MIN_ALTITUDE};
use crate::rise_set::{rise_transit_set, RiseTransitSet};
use crate::scales::{JD, UT, UTC};
use crate::sidereal::{hour_angle, local_sidereal_time};
use crate::sun::sun_position;
use crate::JulianDate;
use chrono::{DateTime, Utc};
use qtty::{Degree, Degrees};

/// Apparent geocentric place of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Ecliptic place including nutation in longitude.
    pub ecliptic: Ecliptic,
    pub equatorial: Equatorial,
    pub distance_km: f64,
}

/// Apparent geocentric Moon at a Julian Day (TT).
pub fn apparent_position(jd: JulianDate) -> MoonPosition {
    let moon = geocentric(jd);
    let ecliptic = Ecliptic {
        longitude: (moon.longitude + nutation(jd).longitude.to::<Degree>()).wrap_pos(),
        latitude: moon.latitude,
    };
    MoonPosition {
        ecliptic,
        equatorial: ecliptic.to_equatorial(true_obliquity(jd)),
        distance_km: moon.distance_km,
    }
}

/// Everything known about the Moon for one observer and instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonOutput {
    pub jd: JulianDate,
    pub phase: MoonPhase,
    /// Apparent geocentric position.
    pub geocentric: MoonPosition,
    /// Right ascension and declination seen from the site.
    pub topocentric: Equatorial,
    pub local_sidereal_time: Degrees,
    /// Topocentric hour angle, `[0°, 360°)`.
    pub hour_angle: Degrees,
    /// Azimuth from north and refracted topocentric altitude.
    pub horizontal: Horizontal,
    pub parallax: Degrees,
    pub semidiameter: Degrees,
    pub topocentric_semidiameter: Degrees,
    /// Rise, transit and set for the UTC day containing `jd`, when asked for.
    pub events: Option<RiseTransitSet>,
}

/// Moon position and phase at `jd` for `observer`.
///
/// `jd` is the argument of the lunar and solar series (TT).  Sidereal time
/// is read on the UT1 instant `jd − ΔT`.
pub fn compute(jd: JulianDate, observer: &Observer) -> Result<MoonOutput> {
    if !jd.value().is_finite() {
        return Err(Error::non_finite_instant(jd.value()));
    }

    let position = apparent_position(jd);
    let sun = sun_position(jd);
    let phase = MoonPhase::new(
        position.ecliptic.longitude,
        position.equatorial,
        position.distance_km,
        &sun,
    );

    let ut = jd.to::<UT>();
    let lst = local_sidereal_time(ut, observer.longitude());
    let geocentric_h = hour_angle(lst, position.equatorial.right_ascension);

    let rho = observer.geocentric_terms();
    let sin_pi = sin_parallax(position.distance_km);
    let topo = topocentric(position.equatorial, geocentric_h, sin_pi, rho);

    let mut horizontal = topo
        .equatorial
        .to_horizontal(topo.hour_angle, observer.latitude());
    if horizontal.altitude >= MIN_ALTITUDE {
        horizontal.altitude = horizontal.altitude
            + refraction_from_true(
                horizontal.altitude,
                observer.pressure_mbar(),
                observer.temperature_c(),
            );
    }

    Ok(MoonOutput {
        jd,
        phase,
        geocentric: position,
        topocentric: topo.equatorial,
        local_sidereal_time: lst,
        hour_angle: topo.hour_angle,
        horizontal,
        parallax: horizontal_parallax(position.distance_km),
        semidiameter: semidiameter(position.distance_km),
        topocentric_semidiameter: topocentric_semidiameter(
            position.equatorial,
            geocentric_h,
            position.distance_km,
            rho,
        ),
        events: None,
    })
}

/// [`compute`] plus rise, transit and set for the UTC day containing `jd`.
pub fn compute_with_events(jd: JulianDate, observer: &Observer) -> Result<MoonOutput> {
    let mut output = compute(jd, observer)?;
    let date = CalendarDate::from_time(jd.to::<UTC>());
    output.events = Some(rise_transit_set(date, observer));
    Ok(output)
}

/// [`compute`] at a civil UTC timestamp.
pub fn compute_at_utc(
    datetime: DateTime<Utc>,
    observer: &Observer,
    with_events: bool,
) -> Result<MoonOutput> {
    let jd = Time::<JD>::from_utc(datetime);
    if with_events {
        compute_with_events(jd, observer)
    } else {
        compute(jd, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moon::phase::PhaseName;

    fn palomar() -> Observer {
        Observer::new(
            Degrees::new(116.864_995_912_233_1),
            Degrees::new(33.356_321_755_733_14),
            1706.0,
        )
        .unwrap()
    }

    #[test]
    fn meeus_example_47a_apparent() {
        let moon = apparent_position(JulianDate::new(2_448_724.5));
        assert!((moon.ecliptic.longitude.value() - 133.167_264).abs() < 1e-5);
        assert!((moon.equatorial.right_ascension.value() - 134.688_470).abs() < 1e-5);
        assert!((moon.equatorial.declination.value() - 13.768_368).abs() < 1e-5);
    }

    #[test]
    fn reference_instant() {
        let out = compute(JulianDate::new(2_459_596.101598), &palomar()).unwrap();
        let geo = out.geocentric;
        assert!((geo.ecliptic.longitude.value() - 101.045_397_1).abs() < 1e-6);
        assert!((geo.ecliptic.latitude.value() - 3.322_697_7).abs() < 1e-6);
        assert!((geo.distance_km - 403_836.919_6).abs() < 1e-3);
        assert!((out.phase.phase_angle.value() - 164.617_555_9).abs() < 1e-4);
        assert!((out.phase.illuminated_fraction - 0.981).abs() < 1e-3);
        assert_eq!(out.phase.name, PhaseName::FullMoon);
        assert!(out.events.is_none());
    }

    #[test]
    fn topocentric_shift_is_bounded_by_parallax() {
        let out = compute(JulianDate::new(2_459_596.101598), &palomar()).unwrap();
        let shift = crate::coordinates::separation(out.geocentric.equatorial, out.topocentric);
        assert!(shift <= out.parallax);
        assert!((0.9..1.0).contains(&out.parallax.value()));
        assert!(out.topocentric_semidiameter.value() > 0.0);
        assert!((0.0..360.0).contains(&out.horizontal.azimuth.value()));
    }

    #[test]
    fn phase_names_across_a_lunation() {
        let obs = palomar();
        let cases = [
            (2_459_553.3, PhaseName::NewMoon),
            (2_459_557.338_747, PhaseName::WaxingCrescent),
            (2_459_580.187, PhaseName::WaningCrescent),
            (2_457_023.5, PhaseName::WaxingGibbous),
        ];
        for (jd, expected) in cases {
            let out = compute(JulianDate::new(jd), &obs).unwrap();
            assert_eq!(out.phase.name, expected, "JD {jd}");
        }
    }

    #[test]
    fn events_for_the_containing_day() {
        let out = compute_with_events(JulianDate::new(2_459_596.101598), &palomar()).unwrap();
        let events = out.events.unwrap();
        let day = CalendarDate::from_time(events.day);
        assert_eq!((day.year, day.month, day.day), (2022, 1, 16.0));
    }

    #[test]
    fn from_chrono() {
        use chrono::TimeZone;
        let dt = Utc.with_ymd_and_hms(2022, 1, 16, 14, 26, 18).unwrap();
        let out = compute_at_utc(dt, &palomar(), false).unwrap();
        // TT runs 69.184 s ahead of UTC in 2022.
        let expected = 2_459_596.101_597_2 + 69.184 / 86_400.0;
        assert!((out.jd.value() - expected).abs() < 1e-6);
    }

    #[test]
    fn rejects_non_finite_instant() {
        for jd in [f64::NAN, f64::INFINITY] {
            let err = compute(JulianDate::new(jd), &palomar()).unwrap_err();
            assert!(matches!(err, Error::InvalidDate(_)), "{err}");
        }
    }
}
