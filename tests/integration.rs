use chrono::DateTime;
use lunaris::{
    compute, compute_with_events, julian_day, local_sidereal_time, rise_transit_set, to_dms,
    to_hms, utc_to_ut1, CalendarDate, Circumpolar, DeltaTConfidence, JulianDate, Observer,
    PhaseName, Time, UniversalTime, UTC,
};
use qtty::{Day, Days, Degrees, Second, Seconds};

fn palomar() -> Observer {
    Observer::new(
        Degrees::new(116.864_995_912_233_1),
        Degrees::new(33.356_321_755_733_14),
        1706.0,
    )
    .unwrap()
}

#[test]
fn civil_date_to_julian_day() {
    let date = CalendarDate::from_ymd_hms(2022, 1, 16, 14, 26, 18.0).unwrap();
    assert!((date.julian_day().value() - 2_459_596.101_598).abs() < 1e-6);
    assert!(julian_day(2022, 2, 29.0).is_err());
}

#[test]
fn reference_moon() {
    let moon = compute(JulianDate::new(2_459_596.101598), &palomar()).unwrap();
    assert!((moon.geocentric.ecliptic.longitude.value() - 101.045_397_1).abs() < 1e-6);
    assert!((moon.geocentric.ecliptic.latitude.value() - 3.322_697_7).abs() < 1e-6);
    assert!((moon.geocentric.distance_km - 403_836.919_6).abs() < 1e-3);
    assert!((moon.phase.phase_angle.value() - 164.617_555_9).abs() < 1e-4);
    assert!((moon.phase.illuminated_fraction - 0.981).abs() < 1e-3);
    assert_eq!(moon.phase.name, PhaseName::FullMoon);
}

#[test]
fn reference_local_sidereal_time() {
    let longitude = Degrees::new(116.864_995_912_233_1);

    // Julian Day read directly as UT1
    let ut = UniversalTime::new(2_459_596.101598);
    assert!((local_sidereal_time(ut, longitude).value() - 89.444_594_08).abs() < 1e-6);

    // Civil instant. The reference value assumes UT1 - UTC = -0.067 s; the
    // bundled ΔT table gives -0.107 s here, 1.5e-4° of sidereal rotation.
    let ut = utc_to_ut1(Time::<UTC>::new(2_459_596.101598));
    assert!((local_sidereal_time(ut, longitude).value() - 89.444_313_20).abs() < 2e-4);
}

#[test]
fn utc_roundtrip_through_chrono() {
    let datetime = DateTime::from_timestamp(1_642_343_178, 0).unwrap();
    let utc = Time::<UTC>::from_utc(datetime);
    assert!((utc.value() - 2_459_596.101_597_2).abs() < 1e-6);
    let back = utc.to_utc().expect("to_utc");
    let delta_ns = back.timestamp_nanos_opt().unwrap() - datetime.timestamp_nanos_opt().unwrap();
    // f64 Julian Days near 2.46e6 resolve about 40 µs.
    assert!(delta_ns.abs() < 100_000, "roundtrip error: {delta_ns} ns");
}

#[test]
fn delta_t_is_continuous_across_the_prediction_boundary() {
    let table = lunaris::delta_t::table();
    let end = table.measured_end();
    let eps = Days::new(1e-4);
    let before = lunaris::delta_t::delta_t(JulianDate::from_days(end - eps));
    let after = lunaris::delta_t::delta_t(JulianDate::from_days(end + eps));
    assert_eq!(before.confidence, DeltaTConfidence::Measured);
    assert_eq!(after.confidence, DeltaTConfidence::Predicted);
    assert!((after.seconds - before.seconds).abs() < Seconds::new(1e-3));
}

#[test]
fn delta_t_extrapolates_without_failing() {
    let far = lunaris::delta_t::delta_t(JulianDate::new(2_500_000.5));
    assert_eq!(far.confidence, DeltaTConfidence::Extrapolated);
    assert!(far.seconds.value().is_finite());
}

#[test]
fn ut1_stays_close_to_utc() {
    let utc = Time::<UTC>::new(2_459_596.101598);
    let ut1 = utc_to_ut1(utc);
    let dut1 = (ut1.quantity() - utc.quantity()).to::<Second>();
    assert!(dut1.abs() < Seconds::new(0.9));
    let tt_minus_ut1 = (utc.to::<lunaris::TT>().quantity() - ut1.quantity()).to::<Day>();
    assert!((tt_minus_ut1.to::<Second>() - Seconds::new(69.29)).abs() < Seconds::new(0.5));
}

#[test]
fn events_come_with_the_computation() {
    let moon = compute_with_events(JulianDate::new(2_459_596.101598), &palomar()).unwrap();
    let events = moon.events.expect("events requested");
    let local = events.to_local(-8.0);
    assert!(local.transit.is_valid);
    if events.circumpolar.is_some() {
        assert!(!local.rise.is_valid && !local.set.is_valid);
    }
}

#[test]
fn circumpolar_flags_are_consistent() {
    let svalbard = Observer::new(Degrees::new(15.6), Degrees::new(78.2), 0.0).unwrap();
    let mut seen_up = false;
    let mut seen_down = false;
    for d in 1..=31 {
        let date = CalendarDate::new(2022, 1, f64::from(d)).unwrap();
        let events = rise_transit_set(date, &svalbard);
        match events.circumpolar {
            Some(kind) => {
                assert!(events.rise.is_none() && events.set.is_none(), "day {d}");
                seen_up |= kind == Circumpolar::AlwaysUp;
                seen_down |= kind == Circumpolar::AlwaysDown;
            }
            None => assert!(events.transit.at >= events.day, "day {d}"),
        }
    }
    assert!(seen_up && seen_down);
}

#[test]
fn formatted_position() {
    let moon = compute(JulianDate::new(2_448_724.5), &palomar()).unwrap();
    // Meeus example 47.a: α = 8h 58m 45.2s, δ = +13° 46' 6"
    assert_eq!(to_hms(moon.geocentric.equatorial.right_ascension, 1), "8h 58m 45.2s");
    assert_eq!(to_dms(moon.geocentric.equatorial.declination, 0), "13° 46' 6\"");
}

#[test]
fn invalid_observer_is_rejected() {
    let err = Observer::new(Degrees::new(0.0), Degrees::new(95.0), 0.0).unwrap_err();
    assert!(matches!(err, lunaris::Error::InvalidObserver(_)));
}

#[cfg(feature = "serde")]
#[test]
fn serde_calendar_date() {
    let date = CalendarDate::new(2022, 1, 16.5).unwrap();
    let json = serde_json::to_string(&date).unwrap();
    let back: CalendarDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, date);
}
