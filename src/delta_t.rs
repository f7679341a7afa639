// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T): TT − UT1
//!
//! ΔT is read from a single sorted sample table assembled once per process
//! from two static series:
//!
//! * **measured**: the biennial 1620–1992 values compiled by Meeus, followed
//!   by yearly IERS values from 1993 to 2023;
//! * **predicted**: half-yearly IERS predictions.  Any predicted sample at or
//!   before the last measured one is dropped while the table is built.
//!
//! Queries follow a three-zone policy:
//!
//! 1. inside the measured range: linear interpolation between the
//!    bracketing samples;
//! 2. inside the predicted range: the same interpolation;
//! 3. outside both: linear extrapolation with the slope of the two outermost
//!    samples on that side.  The value is tagged
//!    [`DeltaTConfidence::Extrapolated`] and a debug record is logged, but no
//!    error is raised.
//!
//! The [`UT`] time scale applies ΔT automatically when converting to or
//! from TT.

use std::sync::OnceLock;

use super::calendar::CalendarDate;
use super::instant::Time;
use super::scales::UT;
use super::JulianDate;
use qtty::{Days, Seconds};

/// First year of the biennial series.
const BIENNIAL_START_YEAR: i32 = 1620;

/// Biennial ΔT from 1620 to 1992 (seconds), compiled by J. Meeus.
#[rustfmt::skip]
const BIENNIAL: [Seconds; 187] = qtty::qtty_vec!(
    Seconds;
    124.0,115.0,106.0, 98.0, 91.0, 85.0, 79.0, 74.0, 70.0, 65.0,
     62.0, 58.0, 55.0, 53.0, 50.0, 48.0, 46.0, 44.0, 42.0, 40.0,
     37.0, 35.0, 33.0, 31.0, 28.0, 26.0, 24.0, 22.0, 20.0, 18.0,
     16.0, 14.0, 13.0, 12.0, 11.0, 10.0,  9.0,  9.0,  9.0,  9.0,
      9.0,  9.0,  9.0,  9.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0,
     11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 12.0, 12.0, 12.0, 12.0,
     12.0, 12.0, 13.0, 13.0, 13.0, 13.0, 14.0, 14.0, 14.0, 15.0,
     15.0, 15.0, 15.0, 16.0, 16.0, 16.0, 16.0, 16.0, 17.0, 17.0,
     17.0, 17.0, 17.0, 17.0, 17.0, 17.0, 16.0, 16.0, 15.0, 14.0,
     13.7, 13.1, 12.7, 12.5, 12.5, 12.5, 12.5, 12.5, 12.5, 12.3,
     12.0, 11.4, 10.6,  9.6,  8.6,  7.5,  6.6,  6.0,  5.7,  5.6,
      5.7,  5.9,  6.2,  6.5,  6.8,  7.1,  7.3,  7.5,  7.7,  7.8,
      7.9,  7.5,  6.4,  5.4,  2.9,  1.6, -1.0, -2.7, -3.6, -4.7,
     -5.4, -5.2, -5.5, -5.6, -5.8, -5.9, -6.2, -6.4, -6.1, -4.7,
     -2.7,  0.0,  2.6,  5.4,  7.7, 10.5, 13.4, 16.0, 18.2, 20.2,
     21.2, 22.4, 23.5, 23.9, 24.3, 24.0, 23.9, 23.9, 23.7, 24.0,
     24.3, 25.3, 26.2, 27.3, 28.2, 29.1, 30.0, 30.7, 31.4, 32.2,
     33.1, 34.0, 35.0, 36.5, 38.3, 40.2, 42.2, 44.5, 46.5, 48.5,
     50.5, 52.2, 53.8, 54.9, 55.8, 56.9, 58.3,
);

/// Yearly measured values at January 1st, 1993–2023 (seconds).
#[rustfmt::skip]
const ANNUAL: [(i32, f64); 31] = [
    (1993, 59.12), (1994, 59.98), (1995, 60.78), (1996, 61.63), (1997, 62.29),
    (1998, 62.97), (1999, 63.47), (2000, 63.83), (2001, 64.09), (2002, 64.30),
    (2003, 64.47), (2004, 64.57), (2005, 64.69), (2006, 64.85), (2007, 65.15),
    (2008, 65.46), (2009, 65.78), (2010, 66.07), (2011, 66.32), (2012, 66.60),
    (2013, 66.91), (2014, 67.28), (2015, 67.64), (2016, 68.10), (2017, 68.59),
    (2018, 68.97), (2019, 69.22), (2020, 69.36), (2021, 69.36), (2022, 69.29),
    (2023, 69.20),
];

/// Half-yearly predictions, keyed by (year, month).  The first entries
/// overlap the measured series and are discarded at build time.
#[rustfmt::skip]
const PREDICTED: [(i32, u32, f64); 22] = [
    (2022, 1, 69.29), (2022, 7, 69.25), (2023, 1, 69.20), (2023, 7, 69.17),
    (2024, 1, 69.15), (2024, 7, 69.14), (2025, 1, 69.14), (2025, 7, 69.16),
    (2026, 1, 69.20), (2026, 7, 69.26), (2027, 1, 69.33), (2027, 7, 69.41),
    (2028, 1, 69.50), (2028, 7, 69.60), (2029, 1, 69.70), (2029, 7, 69.80),
    (2030, 1, 69.90), (2030, 7, 70.00), (2031, 1, 70.10), (2032, 1, 70.30),
    (2032, 7, 70.40), (2033, 1, 70.50),
];

// ═══════════════════════════════════════════════════════════════════════════
// Table
// ═══════════════════════════════════════════════════════════════════════════

/// How a ΔT value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaTConfidence {
    /// Interpolated between measured samples.
    Measured,
    /// Interpolated between predicted samples.
    Predicted,
    /// Extrapolated beyond either end of the table.
    Extrapolated,
}

/// A ΔT value with its provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaT {
    pub seconds: Seconds,
    pub confidence: DeltaTConfidence,
}

/// One `(JD, ΔT)` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaTSample {
    pub jd: Days,
    pub seconds: Seconds,
}

/// Sorted, de-duplicated ΔT samples.
///
/// Samples `0..=last_measured` come from the measured series, the rest from
/// the predictions.
#[derive(Debug, Clone)]
pub struct DeltaTTable {
    samples: Vec<DeltaTSample>,
    last_measured: usize,
}

impl DeltaTTable {
    /// Merge a measured and a predicted series.
    ///
    /// Both inputs must be sorted by date.  Predicted samples that do not lie
    /// strictly after the last measured sample are dropped.
    ///
    /// # Panics
    /// If `measured` has fewer than two samples.
    pub fn from_series(measured: &[DeltaTSample], predicted: &[DeltaTSample]) -> Self {
        assert!(measured.len() >= 2, "ΔT table needs two measured samples");
        let mut samples = measured.to_vec();
        let last_measured = samples.len() - 1;
        let cutoff = samples[last_measured].jd;
        samples.extend(predicted.iter().copied().filter(|s| s.jd > cutoff));
        debug_assert!(samples.windows(2).all(|w| w[0].jd < w[1].jd));
        Self {
            samples,
            last_measured,
        }
    }

    /// All samples in date order.
    pub fn samples(&self) -> &[DeltaTSample] {
        &self.samples
    }

    /// Date of the last measured sample.
    pub fn measured_end(&self) -> Days {
        self.samples[self.last_measured].jd
    }

    /// ΔT at `jd` following the three-zone policy.
    pub fn evaluate(&self, jd: Days) -> DeltaT {
        let s = &self.samples;
        let n = s.len();
        let idx = s.partition_point(|sample| sample.jd <= jd);

        let (lo, hi, confidence) = match idx {
            0 => (0, 1, DeltaTConfidence::Extrapolated),
            i if i >= n => {
                if jd > s[n - 1].jd {
                    (n - 2, n - 1, DeltaTConfidence::Extrapolated)
                } else {
                    (n - 2, n - 1, DeltaTConfidence::Predicted)
                }
            }
            i if i - 1 < self.last_measured => (i - 1, i, DeltaTConfidence::Measured),
            i => (i - 1, i, DeltaTConfidence::Predicted),
        };

        if confidence == DeltaTConfidence::Extrapolated {
            log::debug!(
                "ΔT requested at JD {} outside the tabulated range; extrapolating",
                jd.value()
            );
        }

        let (a, b) = (s[lo], s[hi]);
        let t = (jd - a.jd).value() / (b.jd - a.jd).value();
        DeltaT {
            seconds: Seconds::new(a.seconds.value() + (b.seconds - a.seconds).value() * t),
            confidence,
        }
    }
}

#[inline]
fn sample(year: i32, month: u32, seconds: f64) -> DeltaTSample {
    let jd = CalendarDate {
        year,
        month,
        day: 1.0,
    }
    .julian_day();
    DeltaTSample {
        jd,
        seconds: Seconds::new(seconds),
    }
}

fn measured_series() -> Vec<DeltaTSample> {
    BIENNIAL
        .iter()
        .enumerate()
        .map(|(i, dt)| sample(BIENNIAL_START_YEAR + 2 * i as i32, 1, dt.value()))
        .chain(ANNUAL.iter().map(|&(year, dt)| sample(year, 1, dt)))
        .collect()
}

fn predicted_series() -> Vec<DeltaTSample> {
    PREDICTED
        .iter()
        .map(|&(year, month, dt)| sample(year, month, dt))
        .collect()
}

/// The process-wide ΔT table, built on first use.
pub fn table() -> &'static DeltaTTable {
    static TABLE: OnceLock<DeltaTTable> = OnceLock::new();
    TABLE.get_or_init(|| DeltaTTable::from_series(&measured_series(), &predicted_series()))
}

/// ΔT for a Julian Day on the UT axis.
#[inline]
pub fn delta_t(jd_ut: JulianDate) -> DeltaT {
    table().evaluate(jd_ut.quantity())
}

// ── Time<UT> convenience method ───────────────────────────────────────────

impl Time<UT> {
    /// **ΔT = TT − UT1** in seconds for this epoch.
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t(JulianDate::from_days(self.quantity())).seconds
    }
}
