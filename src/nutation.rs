// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Nutation and the obliquity of the ecliptic.
//!
//! Nutation in longitude (Δψ) and in obliquity (Δε) come from the 63-term
//! IAU 1980 series as tabulated by Meeus (table 22.A), which is good to
//! about 0.5″ in Δψ and 0.1″ in Δε.  The mean obliquity uses Laskar's
//! polynomial (Meeus eq. 22.3), valid over ±10 000 years from J2000.

use crate::JulianDate;
use qtty::{Arcseconds, Degree, Degrees};

/// Nutation angles at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Δψ, nutation in longitude.
    pub longitude: Arcseconds,
    /// Δε, nutation in obliquity.
    pub obliquity: Arcseconds,
}

/// One row of table 22.A: argument multipliers of D, M, M′, F, Ω, and the
/// sine (Δψ) and cosine (Δε) coefficients in units of 0.0001″, each as
/// `constant + T · rate`.
#[derive(Debug, Clone, Copy)]
struct Term {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    om: i8,
    psi: (f64, f64),
    eps: (f64, f64),
}

#[allow(clippy::too_many_arguments)]
const fn row(d: i8, m: i8, mp: i8, f: i8, om: i8, psi0: f64, psi1: f64, eps0: f64, eps1: f64) -> Term {
    Term {
        d,
        m,
        mp,
        f,
        om,
        psi: (psi0, psi1),
        eps: (eps0, eps1),
    }
}

#[rustfmt::skip]
const TERMS: [Term; 63] = [
    row( 0,  0,  0,  0, 1,  -171996.0, -174.2,  92025.0,  8.9),
    row(-2,  0,  0,  2, 2,   -13187.0,   -1.6,   5736.0, -3.1),
    row( 0,  0,  0,  2, 2,    -2274.0,   -0.2,    977.0, -0.5),
    row( 0,  0,  0,  0, 2,     2062.0,    0.2,   -895.0,  0.5),
    row( 0,  1,  0,  0, 0,     1426.0,   -3.4,     54.0, -0.1),
    row( 0,  0,  1,  0, 0,      712.0,    0.1,     -7.0,  0.0),
    row(-2,  1,  0,  2, 2,     -517.0,    1.2,    224.0, -0.6),
    row( 0,  0,  0,  2, 1,     -386.0,   -0.4,    200.0,  0.0),
    row( 0,  0,  1,  2, 2,     -301.0,    0.0,    129.0, -0.1),
    row(-2, -1,  0,  2, 2,      217.0,   -0.5,    -95.0,  0.3),
    row(-2,  0,  1,  0, 0,     -158.0,    0.0,      0.0,  0.0),
    row(-2,  0,  0,  2, 1,      129.0,    0.1,    -70.0,  0.0),
    row( 0,  0, -1,  2, 2,      123.0,    0.0,    -53.0,  0.0),
    row( 2,  0,  0,  0, 0,       63.0,    0.0,      0.0,  0.0),
    row( 0,  0,  1,  0, 1,       63.0,    0.1,    -33.0,  0.0),
    row( 2,  0, -1,  2, 2,      -59.0,    0.0,     26.0,  0.0),
    row( 0,  0, -1,  0, 1,      -58.0,   -0.1,     32.0,  0.0),
    row( 0,  0,  1,  2, 1,      -51.0,    0.0,     27.0,  0.0),
    row(-2,  0,  2,  0, 0,       48.0,    0.0,      0.0,  0.0),
    row( 0,  0, -2,  2, 1,       46.0,    0.0,    -24.0,  0.0),
    row( 2,  0,  0,  2, 2,      -38.0,    0.0,     16.0,  0.0),
    row( 0,  0,  2,  2, 2,      -31.0,    0.0,     13.0,  0.0),
    row( 0,  0,  2,  0, 0,       29.0,    0.0,      0.0,  0.0),
    row(-2,  0,  1,  2, 2,       29.0,    0.0,    -12.0,  0.0),
    row( 0,  0,  0,  2, 0,       26.0,    0.0,      0.0,  0.0),
    row(-2,  0,  0,  2, 0,      -22.0,    0.0,      0.0,  0.0),
    row( 0,  0, -1,  2, 1,       21.0,    0.0,    -10.0,  0.0),
    row( 0,  2,  0,  0, 0,       17.0,   -0.1,      0.0,  0.0),
    row( 2,  0, -1,  0, 1,       16.0,    0.0,     -8.0,  0.0),
    row(-2,  2,  0,  2, 2,      -16.0,    0.1,      7.0,  0.0),
    row( 0,  1,  0,  0, 1,      -15.0,    0.0,      9.0,  0.0),
    row(-2,  0,  1,  0, 1,      -13.0,    0.0,      7.0,  0.0),
    row( 0, -1,  0,  0, 1,      -12.0,    0.0,      6.0,  0.0),
    row( 0,  0,  2, -2, 0,       11.0,    0.0,      0.0,  0.0),
    row( 2,  0, -1,  2, 1,      -10.0,    0.0,      5.0,  0.0),
    row( 2,  0,  1,  2, 2,       -8.0,    0.0,      3.0,  0.0),
    row( 0,  1,  0,  2, 2,        7.0,    0.0,     -3.0,  0.0),
    row(-2,  1,  1,  0, 0,       -7.0,    0.0,      0.0,  0.0),
    row( 0, -1,  0,  2, 2,       -7.0,    0.0,      3.0,  0.0),
    row( 2,  0,  0,  2, 1,       -7.0,    0.0,      3.0,  0.0),
    row( 2,  0,  1,  0, 0,        6.0,    0.0,      0.0,  0.0),
    row(-2,  0,  2,  2, 2,        6.0,    0.0,     -3.0,  0.0),
    row(-2,  0,  1,  2, 1,        6.0,    0.0,     -3.0,  0.0),
    row( 2,  0, -2,  0, 1,       -6.0,    0.0,      3.0,  0.0),
    row( 2,  0,  0,  0, 1,       -6.0,    0.0,      3.0,  0.0),
    row( 0, -1,  1,  0, 0,        5.0,    0.0,      0.0,  0.0),
    row(-2, -1,  0,  2, 1,       -5.0,    0.0,      3.0,  0.0),
    row(-2,  0,  0,  0, 1,       -5.0,    0.0,      3.0,  0.0),
    row( 0,  0,  2,  2, 1,       -5.0,    0.0,      3.0,  0.0),
    row( 2,  0,  2,  0, 1,        4.0,    0.0,      0.0,  0.0),
    row( 2,  1,  0,  2, 1,        4.0,    0.0,      0.0,  0.0),
    row( 0,  0,  1, -2, 0,        4.0,    0.0,      0.0,  0.0),
    row(-1,  0,  1,  0, 0,       -4.0,    0.0,      0.0,  0.0),
    row(-2,  1,  0,  0, 0,       -4.0,    0.0,      0.0,  0.0),
    row( 1,  0,  0,  0, 0,       -4.0,    0.0,      0.0,  0.0),
    row( 0,  0,  1,  2, 0,        3.0,    0.0,      0.0,  0.0),
    row( 0,  0, -2,  2, 2,       -3.0,    0.0,      0.0,  0.0),
    row(-1, -1,  1,  0, 0,       -3.0,    0.0,      0.0,  0.0),
    row( 0,  1,  1,  0, 0,       -3.0,    0.0,      0.0,  0.0),
    row( 0, -1,  1,  2, 2,       -3.0,    0.0,      0.0,  0.0),
    row( 2, -1, -1,  2, 2,       -3.0,    0.0,      0.0,  0.0),
    row( 0,  0,  3,  2, 2,       -3.0,    0.0,      0.0,  0.0),
    row( 2, -1,  0,  2, 2,       -3.0,    0.0,      0.0,  0.0),
];

/// Δψ and Δε for a Julian Day (TT).
pub fn nutation(jd: JulianDate) -> Nutation {
    let t = jd.julian_centuries().value();
    let t2 = t * t;
    let t3 = t2 * t;

    // Fundamental arguments in degrees.
    let d = 297.850_36 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0;
    let m = 357.527_72 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0;
    let mp = 134.962_98 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0;
    let f = 93.271_91 + 483_202.017_538 * t - 0.003_682_5 * t2 + t3 / 327_270.0;
    let om = 125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0;

    let (mut dpsi, mut deps) = (0.0, 0.0);
    for term in TERMS.iter() {
        let arg = (f64::from(term.d) * d
            + f64::from(term.m) * m
            + f64::from(term.mp) * mp
            + f64::from(term.f) * f
            + f64::from(term.om) * om)
            .to_radians();
        dpsi += (term.psi.0 + term.psi.1 * t) * arg.sin();
        deps += (term.eps.0 + term.eps.1 * t) * arg.cos();
    }

    Nutation {
        longitude: Arcseconds::new(dpsi * 1e-4),
        obliquity: Arcseconds::new(deps * 1e-4),
    }
}

/// Mean obliquity of the ecliptic (Laskar).
pub fn mean_obliquity(jd: JulianDate) -> Degrees {
    let u = jd.julian_centuries().value() / 100.0;
    const COEFFS: [f64; 10] = [
        -4_680.93, -1.55, 1_999.25, -51.38, -249.67, -39.05, 7.12, 27.87, 5.79, 2.45,
    ];
    let series = COEFFS.iter().rev().fold(0.0, |acc, c| acc * u + c) * u;
    Degrees::new(23.0 + 26.0 / 60.0 + (21.448 + series) / 3600.0)
}

/// True obliquity ε = ε₀ + Δε.
pub fn true_obliquity(jd: JulianDate) -> Degrees {
    mean_obliquity(jd) + nutation(jd).obliquity.to::<Degree>()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Meeus example 22.a: 1987-04-10 0h TD
    const JD_22A: JulianDate = JulianDate::new(2_446_895.5);

    #[test]
    fn nutation_example_22a() {
        let n = nutation(JD_22A);
        assert!((n.longitude.value() - (-3.788)).abs() < 0.001);
        assert!((n.obliquity.value() - 9.443).abs() < 0.001);
    }

    #[test]
    fn obliquity_example_22a() {
        assert!((mean_obliquity(JD_22A).value() - 23.440_946_29).abs() < 1e-8);
        assert!((true_obliquity(JD_22A).value() - 23.443_569_21).abs() < 1e-8);
    }

    #[test]
    fn obliquity_at_j2000() {
        // 23°26′21.448″
        let eps0 = mean_obliquity(JulianDate::J2000).value();
        assert!((eps0 - 23.439_291_111).abs() < 1e-9);
    }

    #[test]
    fn nutation_amplitude_is_bounded() {
        for k in 0..40 {
            let n = nutation(JulianDate::new(2_451_545.0 + 250.0 * f64::from(k)));
            assert!(n.longitude.value().abs() < 20.0);
            assert!(n.obliquity.value().abs() < 11.0);
        }
    }
}
