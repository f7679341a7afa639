// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Moonrise, transit and moonset over one UTC calendar day.
//!
//! The search follows Meeus ch. 15.  The Moon's apparent place is sampled
//! at 0h, 12h and 24h UTC; three-point interpolation of those samples gives
//! first estimates of the transit and of the two horizon crossings, which
//! are then refined against the full ephemeris.  Times are fractions `m` of
//! the day, so an estimate that refines out of `[0, 1)` belongs to the
//! neighbouring day and is dropped.
//!
//! The horizon altitude is `h0 = π − R₀ − s`: the parallax lifts the Moon's
//! centre above the geocentric horizon, refraction `R₀` and the upper limb
//! `s` move the event earlier at rise and later at set.

use crate::calendar::{CalendarDate, DateTimeResult};
use crate::instant::Time;
use crate::moon::ephemeris::{apparent_position, MoonPosition};
use crate::moon::parallax::{horizon_semidiameter, horizontal_parallax};
use crate::observer::Observer;
use crate::refraction::refraction_from_true;
use crate::scales::{utc_to_ut1, JD, UTC};
use crate::sidereal::apparent_sidereal_time;
use qtty::{Day, Days, Degrees, Radians, Second, Seconds};

/// Refinement passes allowed per event.
pub const MAX_ITERATIONS: usize = 5;

/// Corrections smaller than this stop the refinement.
pub const TOLERANCE: Seconds = Seconds::new(0.5);

/// Sidereal degrees swept per solar day.
const SIDEREAL_RATE: f64 = 360.985_647;

/// Moon never crosses the horizon on the queried day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Circumpolar {
    AlwaysUp,
    AlwaysDown,
}

/// A solved event instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventTime {
    pub at: Time<UTC>,
    /// `false` when the refinement hit [`MAX_ITERATIONS`]; `at` then holds
    /// the last estimate.
    pub converged: bool,
}

impl EventTime {
    /// Calendar fields of the event on a clock `utc_offset_hours` from UTC.
    pub fn to_local(&self, utc_offset_hours: f64) -> DateTimeResult {
        let local = self.at.quantity() + Days::new(utc_offset_hours / 24.0);
        DateTimeResult::from_julian_day(local)
    }
}

/// Events of one UTC day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseTransitSet {
    /// 0h UTC of the searched day.
    pub day: Time<UTC>,
    pub rise: Option<EventTime>,
    pub transit: EventTime,
    pub set: Option<EventTime>,
    pub circumpolar: Option<Circumpolar>,
}

/// Local calendar breakdown of a [`RiseTransitSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalEvents {
    pub rise: DateTimeResult,
    pub transit: DateTimeResult,
    pub set: DateTimeResult,
}

impl RiseTransitSet {
    /// Express the events on the observer's civil clock.
    pub fn to_local(&self, utc_offset_hours: f64) -> LocalEvents {
        let convert = |event: Option<EventTime>| {
            event.map_or(DateTimeResult::INVALID, |e| e.to_local(utc_offset_hours))
        };
        LocalEvents {
            rise: convert(self.rise),
            transit: self.transit.to_local(utc_offset_hours),
            set: convert(self.set),
        }
    }

    /// Whether the reported transit lies inside the searched UTC day.
    ///
    /// Once a month the Moon's meridian passage skips a calendar day; the
    /// nearest transit is still reported, and this returns `false`.
    pub fn transit_on_day(&self) -> bool {
        (0.0..1.0).contains(&(self.transit.at - self.day).value())
    }
}

/// Three-point interpolation at `n = 2m − 1` (Meeus 3.3).
fn interpolate(y: [f64; 3], m: f64) -> f64 {
    let n = 2.0 * m - 1.0;
    let a = y[1] - y[0];
    let b = y[2] - y[1];
    let c = b - a;
    y[1] + n / 2.0 * (a + b + n * c)
}

#[inline]
fn wrap_signed(angle: f64) -> f64 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Rise,
    Transit,
    Set,
}

struct Search<'a> {
    day: Time<UTC>,
    observer: &'a Observer,
    /// Apparent sidereal time at 0h of the day, degrees.
    theta0: f64,
    h0: Degrees,
}

impl Search<'_> {
    fn position(&self, m: f64) -> MoonPosition {
        let instant = self.day + Days::new(m);
        apparent_position(instant.to::<JD>())
    }

    fn hour_angle(&self, m: f64, ra: Degrees) -> f64 {
        let theta = self.theta0 + SIDEREAL_RATE * m;
        wrap_signed(theta + self.observer.longitude().value() - ra.value())
    }

    /// Refine an estimate of `m`, returning the final value and whether the
    /// last correction fell under [`TOLERANCE`].
    fn refine(&self, event: Event, mut m: f64) -> (f64, bool) {
        let tolerance = TOLERANCE.to::<Day>().value();
        let latitude = self.observer.latitude();
        let (sin_phi, cos_phi) = latitude.sin_cos();

        for iteration in 0..MAX_ITERATIONS {
            let eq = self.position(m).equatorial;
            let h = self.hour_angle(m, eq.right_ascension);
            let delta_m = match event {
                Event::Transit => -h / 360.0,
                Event::Rise | Event::Set => {
                    let (sin_d, cos_d) = eq.declination.sin_cos();
                    let hour = Degrees::new(h);
                    let altitude: Degrees = Radians::new(
                        (sin_phi * sin_d + cos_phi * cos_d * hour.cos())
                            .clamp(-1.0, 1.0)
                            .asin(),
                    )
                    .to();
                    let denom = 360.0 * cos_d * cos_phi * hour.sin();
                    if denom.abs() < f64::EPSILON {
                        log::debug!("{event:?} refinement stalled at m = {m}: sin H ≈ 0");
                        return (m, false);
                    }
                    (altitude - self.h0).value() / denom
                }
            };
            m += delta_m;
            log::trace!(
                "{event:?} pass {iteration}: Δm = {:.3} s",
                Days::new(delta_m).to::<Second>().value()
            );
            if delta_m.abs() < tolerance {
                return (m, true);
            }
        }
        log::debug!(
            "{event:?} did not converge within {MAX_ITERATIONS} passes on {}",
            self.day
        );
        (m, false)
    }

    fn at(&self, m: f64, converged: bool) -> EventTime {
        EventTime {
            at: self.day + Days::new(m),
            converged,
        }
    }

    /// Rise or set, dropped when it refines onto a neighbouring day.
    fn crossing(&self, event: Event, m: f64) -> Option<EventTime> {
        let (m, converged) = self.refine(event, m);
        if !(0.0..1.0).contains(&m) {
            log::debug!("{event:?} at m = {m:.5} falls outside {}", self.day);
            return None;
        }
        Some(self.at(m, converged))
    }
}

/// Rise, transit and set of the Moon on a UTC calendar date.
///
/// Only the year, month and integral day of `date` are used.
pub fn rise_transit_set(date: CalendarDate, observer: &Observer) -> RiseTransitSet {
    let midnight = CalendarDate {
        day: date.day.floor(),
        ..date
    };
    let day = midnight.to_time::<UTC>();
    let theta0 = apparent_sidereal_time(utc_to_ut1(day)).value();

    let samples = [0.0, 0.5, 1.0].map(|m| {
        let instant = day + Days::new(m);
        apparent_position(instant.to::<JD>())
    });

    // Threshold from the midday sample.
    let distance = samples[1].distance_km;
    let refraction = refraction_from_true(
        Degrees::new(0.0),
        observer.pressure_mbar(),
        observer.temperature_c(),
    );
    let h0 = horizontal_parallax(distance)
        - refraction
        - horizon_semidiameter(distance, observer.geocentric_terms());

    let search = Search {
        day,
        observer,
        theta0,
        h0,
    };

    // Unwrap right ascension across 0h before interpolating.
    let mut ra = samples.map(|s| s.equatorial.right_ascension.value());
    for i in 1..3 {
        while ra[i] - ra[i - 1] < -180.0 {
            ra[i] += 360.0;
        }
    }
    let dec = samples.map(|s| s.equatorial.declination.value());

    let lon = observer.longitude().value();
    let transit_estimate = |m: f64| (interpolate(ra, m) - lon - theta0).rem_euclid(360.0) / 360.0;
    let mut m0 = (ra[0] - lon - theta0).rem_euclid(360.0) / 360.0;
    for _ in 0..2 {
        m0 = transit_estimate(m0);
    }

    let (m_transit, converged) = search.refine(Event::Transit, m0);
    if !(0.0..1.0).contains(&m_transit) {
        log::debug!("Transit at m = {m_transit:.5} falls outside {day}, reporting the nearest one");
    }
    let transit = search.at(m_transit, converged);

    let delta = Degrees::new(interpolate(dec, m0));
    let (sin_phi, cos_phi) = observer.latitude().sin_cos();
    let (sin_d, cos_d) = delta.sin_cos();
    let cos_h0 = (h0.sin() - sin_phi * sin_d) / (cos_phi * cos_d);

    let circumpolar = if cos_h0.is_nan() {
        // Observer on a pole: altitude equals ±declination all day.
        if sin_phi * sin_d > h0.sin() {
            Some(Circumpolar::AlwaysUp)
        } else {
            Some(Circumpolar::AlwaysDown)
        }
    } else if cos_h0 < -1.0 {
        Some(Circumpolar::AlwaysUp)
    } else if cos_h0 > 1.0 {
        Some(Circumpolar::AlwaysDown)
    } else {
        None
    };

    let (rise, set) = match circumpolar {
        Some(kind) => {
            log::debug!("Moon {kind:?} on {day} (cos H0 = {cos_h0:.4})");
            (None, None)
        }
        None => {
            let h0_days = cos_h0.acos().to_degrees() / 360.0;
            (
                search.crossing(Event::Rise, (m0 - h0_days).rem_euclid(1.0)),
                search.crossing(Event::Set, (m0 + h0_days).rem_euclid(1.0)),
            )
        }
    };

    RiseTransitSet {
        day,
        rise,
        transit,
        set,
        circumpolar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fraction(event: EventTime, day: Time<UTC>) -> f64 {
        (event.at - day).value()
    }

    #[test]
    fn interpolation_through_samples() {
        let y = [1.0, 4.0, 9.0];
        assert!((interpolate(y, 0.0) - 1.0).abs() < 1e-12);
        assert!((interpolate(y, 0.5) - 4.0).abs() < 1e-12);
        assert!((interpolate(y, 1.0) - 9.0).abs() < 1e-12);
        // y = (1 + 2m)² at m = 0.25
        assert!((interpolate(y, 0.25) - 2.25).abs() < 1e-12);
    }

    #[test]
    fn munich_2000_03_23() {
        let observer = Observer::new(Degrees::new(11.6), Degrees::new(48.1), 0.0).unwrap();
        let date = CalendarDate::new(2000, 3, 23.0).unwrap();
        let events = rise_transit_set(date, &observer);
        assert_eq!(events.circumpolar, None);

        let transit = fraction(events.transit, events.day);
        let rise = fraction(events.rise.unwrap(), events.day);
        let set = fraction(events.set.unwrap(), events.day);
        // 01:38:01, 21:12:13, 07:01:03 UTC
        assert!((transit - 0.068_067).abs() < 1e-3, "transit {transit}");
        assert!((rise - 0.883_484).abs() < 1e-3, "rise {rise}");
        assert!((set - 0.292_396).abs() < 1e-3, "set {set}");
        assert!(events.transit.converged);
        assert!(events.rise.unwrap().converged && events.set.unwrap().converged);
    }

    #[test]
    fn london_rise_falls_on_the_next_day() {
        let lon = -(6.0 / 60.0 + 3.2 / 3600.0);
        let lat = 51.0 + 31.0 / 60.0 + 54.8 / 3600.0;
        let observer = Observer::new(Degrees::new(lon), Degrees::new(lat), 0.0).unwrap();

        let events = rise_transit_set(CalendarDate::new(2000, 3, 25.0).unwrap(), &observer);
        assert_eq!(events.circumpolar, None);
        assert!(events.rise.is_none());
        assert!(events.set.is_some());

        let events = rise_transit_set(CalendarDate::new(2000, 4, 9.0).unwrap(), &observer);
        assert_eq!(events.circumpolar, None);
        assert!(events.set.is_none());
        assert!(events.rise.is_some());
    }

    #[test]
    fn tromso_polar_night_and_day() {
        let observer = Observer::new(Degrees::new(18.95), Degrees::new(69.65), 0.0).unwrap();

        let up = rise_transit_set(CalendarDate::new(2022, 1, 16.0).unwrap(), &observer);
        assert_eq!(up.circumpolar, Some(Circumpolar::AlwaysUp));
        assert!(up.rise.is_none() && up.set.is_none());

        let down = rise_transit_set(CalendarDate::new(2022, 1, 2.0).unwrap(), &observer);
        assert_eq!(down.circumpolar, Some(Circumpolar::AlwaysDown));
        assert!(down.rise.is_none() && down.set.is_none());
    }

    #[test]
    fn events_stay_within_the_day() {
        let observer = Observer::new(Degrees::new(-70.4), Degrees::new(-24.6), 2600.0).unwrap();
        for d in 1..=28 {
            let events = rise_transit_set(CalendarDate::new(2024, 2, f64::from(d)).unwrap(), &observer);
            for event in [events.rise, events.set].into_iter().flatten() {
                let m = fraction(event, events.day);
                assert!((0.0..1.0).contains(&m), "day {d}: m = {m}");
            }
        }
    }

    #[test]
    fn transit_off_the_day_is_flagged() {
        let observer = Observer::new(Degrees::new(11.6), Degrees::new(48.1), 0.0).unwrap();
        let date = CalendarDate::new(2000, 3, 23.0).unwrap();
        let mut events = rise_transit_set(date, &observer);
        assert!(events.transit_on_day());

        events.transit.at = events.day + Days::new(1.01);
        assert!(!events.transit_on_day());
        events.transit.at = events.day - Days::new(0.002);
        assert!(!events.transit_on_day());
    }

    #[test]
    fn transit_stays_near_the_day() {
        let observer = Observer::new(Degrees::new(-70.4), Degrees::new(-24.6), 2600.0).unwrap();
        for d in 1..=28 {
            let events = rise_transit_set(CalendarDate::new(2024, 2, f64::from(d)).unwrap(), &observer);
            let m = fraction(events.transit, events.day);
            assert!((-0.01..1.01).contains(&m), "day {d}: m = {m}");
            assert_eq!(events.transit_on_day(), (0.0..1.0).contains(&m));
        }
    }

    #[test]
    fn local_clock_shift() {
        let observer = Observer::new(Degrees::new(11.6), Degrees::new(48.1), 0.0).unwrap();
        let events = rise_transit_set(CalendarDate::new(2000, 3, 23.0).unwrap(), &observer);
        let local = events.to_local(2.0);
        assert!(local.transit.is_valid);
        assert_eq!((local.transit.year, local.transit.month, local.transit.day), (2000, 3, 23));
        assert_eq!(local.transit.hour, 3);

        // 21:12 UTC rise and 07:00 UTC set
        assert!(local.rise.is_valid && local.set.is_valid);
        assert_eq!((local.rise.day, local.rise.hour), (23, 23));
        assert_eq!((local.set.day, local.set.hour), (23, 9));

        let shifted = events.to_local(3.0);
        assert_eq!((shifted.rise.day, shifted.rise.hour), (24, 0));
    }

    #[test]
    fn hour_angle_is_signed() {
        assert_eq!(wrap_signed(190.0), -170.0);
        assert_eq!(wrap_signed(-190.0), 170.0);
        assert_eq!(wrap_signed(45.0), 45.0);
    }
}
