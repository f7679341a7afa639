//! Recompute the Moon on a fixed cadence from a worker thread.
//!
//! The engine keeps no clock of its own: a caller owns the schedule and
//! pushes instants in.  Here a ticker thread sends timestamps through a
//! channel and the main thread prints one line per tick.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use lunaris::{compute_at_utc, to_dms, Observer};
use qtty::Degrees;

const TICKS: usize = 5;
const PERIOD: Duration = Duration::from_secs(1);

fn main() -> lunaris::Result<()> {
    env_logger::init();

    let site = Observer::new(Degrees::new(11.6), Degrees::new(48.1), 520.0)?;
    let (tx, rx) = mpsc::channel::<DateTime<Utc>>();

    let ticker = thread::spawn(move || {
        for _ in 0..TICKS {
            if tx.send(Utc::now()).is_err() {
                break;
            }
            thread::sleep(PERIOD);
        }
    });

    for instant in rx {
        let moon = compute_at_utc(instant, &site, false)?;
        println!(
            "{}  az {}  alt {}  {:.4} lit",
            instant.format("%H:%M:%S"),
            to_dms(moon.horizontal.azimuth, 1),
            to_dms(moon.horizontal.altitude, 1),
            moon.phase.illuminated_fraction
        );
    }

    if ticker.join().is_err() {
        log::warn!("ticker thread panicked");
    }
    Ok(())
}
