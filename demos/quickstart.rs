use chrono::Utc;
use lunaris::{compute_at_utc, to_dms, to_hms, Observer};
use qtty::Degrees;

fn main() -> lunaris::Result<()> {
    env_logger::init();

    // Palomar Observatory
    let site = Observer::new(Degrees::new(-116.865), Degrees::new(33.356), 1706.0)?
        .with_utc_offset(-8.0)?;
    let moon = compute_at_utc(Utc::now(), &site, true)?;

    println!("{}", moon.jd);
    println!(
        "Phase: {} ({:.1}% lit, {:.2} d old)",
        moon.phase.name,
        moon.phase.illuminated_fraction * 100.0,
        moon.phase.age_days
    );
    println!("RA:  {}", to_hms(moon.topocentric.right_ascension, 2));
    println!("Dec: {}", to_dms(moon.topocentric.declination, 1));
    println!("Az:  {}", to_dms(moon.horizontal.azimuth, 0));
    println!("Alt: {}", to_dms(moon.horizontal.altitude, 0));
    println!("Distance: {:.0} km", moon.geocentric.distance_km);

    if let Some(events) = moon.events {
        let local = events.to_local(site.utc_offset_hours());
        for (label, event) in [("Rise", local.rise), ("Transit", local.transit), ("Set", local.set)] {
            if event.is_valid {
                println!("{label}: {:02}:{:02}", event.hour, event.minute);
            } else {
                println!("{label}: none today");
            }
        }
        if let Some(kind) = events.circumpolar {
            println!("Circumpolar: {kind:?}");
        }
    }
    Ok(())
}
