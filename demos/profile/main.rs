//! Hypogear profile demo: computes a reference drive and prints its geometry.
//!
//! Usage:
//! ```text
//! cargo run --example profile
//! RUST_LOG=hypogear=debug cargo run --example profile
//! ```
//!
//! The output lists the limit radii, the sampled profile points, and the
//! pin circles: the same data a host CAD document would turn into fitted
//! splines and sketch circles.

use hypogear::geometry::GearParameters;
use hypogear::operations::GenerateDrive;
use hypogear::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for hypogear.
    // Override with RUST_LOG env var (e.g. RUST_LOG=hypogear=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hypogear=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let params = GearParameters::new(
        0.08,               // tooth pitch
        0.15,               // roller diameter
        0.05,               // eccentricity
        10,                 // tooth count
        50_f64.to_radians(), // pressure-angle limit
        0.000_175,          // clamp offset
        100,                // segments
    )?;

    let drive = GenerateDrive::new(params, "XY").execute()?;

    println!(
        "limit radii: min = {:.6}, max = {:.6}",
        drive.limits.min_radius, drive.limits.max_radius
    );
    println!("profile ({} points):", drive.profile.points.len());
    for point in &drive.profile.points {
        println!("  {:+.6} {:+.6}", point.x, point.y);
    }
    println!("bore circle: center ({:+.3}, 0), r = {:.4}", drive.bore_circle.center.x, drive.bore_circle.radius);
    println!("pins ({}):", drive.pins.len());
    for pin in drive.pins.circles() {
        println!(
            "  center ({:+.6}, {:+.6}), r = {:.4}",
            pin.center.x, pin.center.y, pin.radius
        );
    }
    println!("plane token: {}", drive.plane);

    Ok(())
}
