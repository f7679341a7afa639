// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Truncated ELP-2000/82 series for the geocentric Moon (Meeus ch. 47).
//!
//! Tables 47.A and 47.B hold the 60 largest periodic terms in longitude,
//! distance and latitude.  Terms that involve the Sun's mean anomaly `M`
//! are scaled by the eccentricity factor `E` once per unit of `|M|`.  The
//! three additive terms (A1 Venus, A2 Jupiter, A3 flattening) are applied
//! on top.  Accuracy is about 10″ in longitude and 4″ in latitude.

use crate::JulianDate;
use qtty::Degrees;

/// Mean distance term of the distance series, km.
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Multipliers of D, M, M′, F with the longitude (sine, 1e-6°) and distance
/// (cosine, 1e-3 km) coefficients.
#[derive(Debug, Clone, Copy)]
struct LongitudeDistanceTerm {
    args: [i8; 4],
    longitude: i32,
    distance: i32,
}

/// Multipliers of D, M, M′, F with the latitude coefficient (sine, 1e-6°).
#[derive(Debug, Clone, Copy)]
struct LatitudeTerm {
    args: [i8; 4],
    latitude: i32,
}

const fn lr(d: i8, m: i8, mp: i8, f: i8, longitude: i32, distance: i32) -> LongitudeDistanceTerm {
    LongitudeDistanceTerm {
        args: [d, m, mp, f],
        longitude,
        distance,
    }
}

const fn b(d: i8, m: i8, mp: i8, f: i8, latitude: i32) -> LatitudeTerm {
    LatitudeTerm {
        args: [d, m, mp, f],
        latitude,
    }
}

#[rustfmt::skip]
const LONGITUDE_DISTANCE: [LongitudeDistanceTerm; 60] = [
    lr( 0,  0,  1,  0,   6288774,  -20905355),
    lr( 2,  0, -1,  0,   1274027,   -3699111),
    lr( 2,  0,  0,  0,    658314,   -2955968),
    lr( 0,  0,  2,  0,    213618,    -569925),
    lr( 0,  1,  0,  0,   -185116,      48888),
    lr( 0,  0,  0,  2,   -114332,      -3149),
    lr( 2,  0, -2,  0,     58793,     246158),
    lr( 2, -1, -1,  0,     57066,    -152138),
    lr( 2,  0,  1,  0,     53322,    -170733),
    lr( 2, -1,  0,  0,     45758,    -204586),
    lr( 0,  1, -1,  0,    -40923,    -129620),
    lr( 1,  0,  0,  0,    -34720,     108743),
    lr( 0,  1,  1,  0,    -30383,     104755),
    lr( 2,  0,  0, -2,     15327,      10321),
    lr( 0,  0,  1,  2,    -12528,          0),
    lr( 0,  0,  1, -2,     10980,      79661),
    lr( 4,  0, -1,  0,     10675,     -34782),
    lr( 0,  0,  3,  0,     10034,     -23210),
    lr( 4,  0, -2,  0,      8548,     -21636),
    lr( 2,  1, -1,  0,     -7888,      24208),
    lr( 2,  1,  0,  0,     -6766,      30824),
    lr( 1,  0, -1,  0,     -5163,      -8379),
    lr( 1,  1,  0,  0,      4987,     -16675),
    lr( 2, -1,  1,  0,      4036,     -12831),
    lr( 2,  0,  2,  0,      3994,     -10445),
    lr( 4,  0,  0,  0,      3861,     -11650),
    lr( 2,  0, -3,  0,      3665,      14403),
    lr( 0,  1, -2,  0,     -2689,      -7003),
    lr( 2,  0, -1,  2,     -2602,          0),
    lr( 2, -1, -2,  0,      2390,      10056),
    lr( 1,  0,  1,  0,     -2348,       6322),
    lr( 2, -2,  0,  0,      2236,      -9884),
    lr( 0,  1,  2,  0,     -2120,       5751),
    lr( 0,  2,  0,  0,     -2069,          0),
    lr( 2, -2, -1,  0,      2048,      -4950),
    lr( 2,  0,  1, -2,     -1773,       4130),
    lr( 2,  0,  0,  2,     -1595,          0),
    lr( 4, -1, -1,  0,      1215,      -3958),
    lr( 0,  0,  2,  2,     -1110,          0),
    lr( 3,  0, -1,  0,      -892,       3258),
    lr( 2,  1,  1,  0,      -810,       2616),
    lr( 4, -1, -2,  0,       759,      -1897),
    lr( 0,  2, -1,  0,      -713,      -2117),
    lr( 2,  2, -1,  0,      -700,       2354),
    lr( 2,  1, -2,  0,       691,          0),
    lr( 2, -1,  0, -2,       596,          0),
    lr( 4,  0,  1,  0,       549,      -1423),
    lr( 0,  0,  4,  0,       537,      -1117),
    lr( 4, -1,  0,  0,       520,      -1571),
    lr( 1,  0, -2,  0,      -487,      -1739),
    lr( 2,  1,  0, -2,      -399,          0),
    lr( 0,  0,  2, -2,      -381,      -4421),
    lr( 1,  1,  1,  0,       351,          0),
    lr( 3,  0, -2,  0,      -340,          0),
    lr( 4,  0, -3,  0,       330,          0),
    lr( 2, -1,  2,  0,       327,          0),
    lr( 0,  2,  1,  0,      -323,       1165),
    lr( 1,  1, -1,  0,       299,          0),
    lr( 2,  0,  3,  0,       294,          0),
    lr( 2,  0, -1, -2,         0,       8752),
];

#[rustfmt::skip]
const LATITUDE: [LatitudeTerm; 60] = [
    b( 0,  0,  0,  1,   5128122),
    b( 0,  0,  1,  1,    280602),
    b( 0,  0,  1, -1,    277693),
    b( 2,  0,  0, -1,    173237),
    b( 2,  0, -1,  1,     55413),
    b( 2,  0, -1, -1,     46271),
    b( 2,  0,  0,  1,     32573),
    b( 0,  0,  2,  1,     17198),
    b( 2,  0,  1, -1,      9266),
    b( 0,  0,  2, -1,      8822),
    b( 2, -1,  0, -1,      8216),
    b( 2,  0, -2, -1,      4324),
    b( 2,  0,  1,  1,      4200),
    b( 2,  1,  0, -1,     -3359),
    b( 2, -1, -1,  1,      2463),
    b( 2, -1,  0,  1,      2211),
    b( 2, -1, -1, -1,      2065),
    b( 0,  1, -1, -1,     -1870),
    b( 4,  0, -1, -1,      1828),
    b( 0,  1,  0,  1,     -1794),
    b( 0,  0,  0,  3,     -1749),
    b( 0,  1, -1,  1,     -1565),
    b( 1,  0,  0,  1,     -1491),
    b( 0,  1,  1,  1,     -1475),
    b( 0,  1,  1, -1,     -1410),
    b( 0,  1,  0, -1,     -1344),
    b( 1,  0,  0, -1,     -1335),
    b( 0,  0,  3,  1,      1107),
    b( 4,  0,  0, -1,      1021),
    b( 4,  0, -1,  1,       833),
    b( 0,  0,  1, -3,       777),
    b( 4,  0, -2,  1,       671),
    b( 2,  0,  0, -3,       607),
    b( 2,  0,  2, -1,       596),
    b( 2, -1,  1, -1,       491),
    b( 2,  0, -2,  1,      -451),
    b( 0,  0,  3, -1,       439),
    b( 2,  0,  2,  1,       422),
    b( 2,  0, -3, -1,       421),
    b( 2,  1, -1,  1,      -366),
    b( 2,  1,  0,  1,      -351),
    b( 4,  0,  0,  1,       331),
    b( 2, -1,  1,  1,       315),
    b( 2, -2,  0, -1,       302),
    b( 0,  0,  1,  3,      -283),
    b( 2,  1,  1, -1,      -229),
    b( 1,  1,  0, -1,       223),
    b( 1,  1,  0,  1,       223),
    b( 0,  1, -2, -1,      -220),
    b( 2,  1, -1, -1,      -220),
    b( 1,  0,  1,  1,      -185),
    b( 2, -1, -2, -1,       181),
    b( 0,  1,  2,  1,      -177),
    b( 4,  0, -2, -1,       176),
    b( 4, -1, -1, -1,       166),
    b( 1,  0,  1, -1,      -164),
    b( 4,  0,  1, -1,       132),
    b( 1,  0, -1, -1,      -119),
    b( 4, -1,  0, -1,       115),
    b( 2, -2,  0,  1,       107),
];

/// Fundamental lunar arguments at an epoch, in degrees (not normalised).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arguments {
    /// L′, mean longitude of the Moon.
    pub mean_longitude: f64,
    /// D, mean elongation of the Moon.
    pub elongation: f64,
    /// M, mean anomaly of the Sun.
    pub sun_anomaly: f64,
    /// M′, mean anomaly of the Moon.
    pub moon_anomaly: f64,
    /// F, argument of latitude.
    pub latitude_argument: f64,
    /// E, eccentricity factor of the Earth's orbit.
    pub eccentricity: f64,
}

impl Arguments {
    /// Arguments for `t` Julian centuries since J2000 (Meeus 47.1 – 47.6).
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
                + t3 / 538_841.0
                - t4 / 65_194_000.0,
            elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2
                + t3 / 545_868.0
                - t4 / 113_065_000.0,
            sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
                + t3 / 24_490_000.0,
            moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2
                + t3 / 69_699.0
                - t4 / 14_712_000.0,
            latitude_argument: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
                - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
            eccentricity: 1.0 - 0.002_516 * t - 0.000_007_4 * t2,
        }
    }

    /// Argument of a periodic term and its eccentricity scaling.
    #[inline]
    fn term(&self, args: [i8; 4]) -> (Degrees, f64) {
        let [d, m, mp, f] = args.map(f64::from);
        let angle = d * self.elongation
            + m * self.sun_anomaly
            + mp * self.moon_anomaly
            + f * self.latitude_argument;
        let scale = self.eccentricity.powi(i32::from(args[1].unsigned_abs()));
        (Degrees::new(angle), scale)
    }
}

/// Geometric geocentric Moon referred to the mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricMoon {
    /// Ecliptic longitude without nutation, `[0°, 360°)`.
    pub longitude: Degrees,
    pub latitude: Degrees,
    /// Centre-to-centre Earth–Moon distance, km.
    pub distance_km: f64,
}

/// Evaluate the series at a Julian Day (TT).
pub fn geocentric(jd: JulianDate) -> GeocentricMoon {
    let t = jd.julian_centuries().value();
    let arg = Arguments::at(t);

    let (mut sum_l, mut sum_r, mut sum_b) = (0.0, 0.0, 0.0);
    for term in LONGITUDE_DISTANCE.iter() {
        let (angle, e) = arg.term(term.args);
        let (sin, cos) = angle.sin_cos();
        sum_l += f64::from(term.longitude) * e * sin;
        sum_r += f64::from(term.distance) * e * cos;
    }
    for term in LATITUDE.iter() {
        let (angle, e) = arg.term(term.args);
        sum_b += f64::from(term.latitude) * e * angle.sin();
    }

    let a1 = Degrees::new(119.75 + 131.849 * t);
    let a2 = Degrees::new(53.09 + 479_264.290 * t);
    let a3 = Degrees::new(313.45 + 481_266.484 * t);
    let lp = Degrees::new(arg.mean_longitude);
    let f = Degrees::new(arg.latitude_argument);
    let mp = Degrees::new(arg.moon_anomaly);

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    GeocentricMoon {
        longitude: Degrees::new(arg.mean_longitude + sum_l / 1e6).wrap_pos(),
        latitude: Degrees::new(sum_b / 1e6),
        distance_km: MEAN_DISTANCE_KM + sum_r / 1000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992-04-12 0h TD
        let moon = geocentric(JulianDate::new(2_448_724.5));
        assert!((moon.longitude.value() - 133.162_655).abs() < 1e-6);
        assert!((moon.latitude.value() - (-3.229_126)).abs() < 1e-6);
        assert!((moon.distance_km - 368_409.7).abs() < 0.1);
    }

    #[test]
    fn fundamental_arguments_47a() {
        let arg = Arguments::at(-0.077_221_081_451);
        let wrap = |x: f64| x.rem_euclid(360.0);
        assert!((wrap(arg.mean_longitude) - 134.290_182).abs() < 1e-5);
        assert!((wrap(arg.elongation) - 113.842_304).abs() < 1e-5);
        assert!((wrap(arg.sun_anomaly) - 97.643_514).abs() < 1e-5);
        assert!((wrap(arg.moon_anomaly) - 5.150_833).abs() < 1e-5);
        assert!((wrap(arg.latitude_argument) - 219.889_721).abs() < 1e-5);
        assert!((arg.eccentricity - 1.000_194).abs() < 1e-6);
    }

    #[test]
    fn distance_stays_within_orbit_bounds() {
        for k in 0..60 {
            let moon = geocentric(JulianDate::new(2_451_545.0 + 0.93 * f64::from(k)));
            assert!((356_000.0..407_000.0).contains(&moon.distance_km));
            assert!(moon.latitude.value().abs() < 5.4);
        }
    }
}
