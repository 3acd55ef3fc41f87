//! Example: fit a plane to a point-cloud file
//!
//! Usage: `cargo run --example fit_plane -- <input> [output]`
//!
//! The input holds the tolerance, the point count and the `x y z` triples.
//! The refined plane is written as `a b c d` to `output` if given, otherwise
//! to stdout. Set `RUST_LOG=debug` to see the search statistics.

use std::fs::File;
use std::io::{BufReader, Write};

use planefit::io::{format_plane, read_point_cloud};
use planefit::{fit_plane, FitSettings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .ok_or("usage: fit_plane <input> [output]")?;
    let output = args.next();

    let cloud = read_point_cloud(BufReader::new(File::open(&input)?))?;
    let result = fit_plane(
        &cloud.points,
        cloud.tolerance,
        Some(FitSettings::default().with_parallel_scoring(true)),
    )?;

    eprintln!(
        "{} points, coarse fitment {:.3} ({} of {} triplets degenerate)",
        cloud.points.len(),
        result.coarse.fitment.fraction,
        result.coarse.rejected,
        result.coarse.hypotheses
    );

    let line = format_plane(&result.refined);
    match output {
        Some(path) => writeln!(File::create(path)?, "{line}")?,
        None => println!("{line}"),
    }
    Ok(())
}
