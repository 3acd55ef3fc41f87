//! Example: plane fitting on a synthetic noisy cloud
//!
//! Generates points on `z = 0.5x - 1.5y + 4` with uniform noise, mixes in
//! gross outliers, and compares the coarse and refined planes with the truth.

use planefit::{fit_plane, FitSettings, Point3D};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Synthetic Plane Fitting Example ===\n");

    let n_inliers = 400;
    let n_outliers = 80;
    let noise = 0.02;
    let (true_a, true_b, true_c) = (0.5, -1.5, 4.0);

    println!("True plane: z = {true_a:.2}x + {true_b:.2}y + {true_c:.2}");
    println!("Generating {n_inliers} inliers and {n_outliers} outliers\n");

    let mut rng = StdRng::seed_from_u64(7);
    let mut points: Vec<Point3D> = (0..n_inliers)
        .map(|_| {
            let x = rng.gen_range(-10.0..10.0);
            let y = rng.gen_range(-10.0..10.0);
            let z = true_a * x + true_b * y + true_c + rng.gen_range(-noise..noise);
            Point3D::new(x, y, z)
        })
        .collect();
    points.extend((0..n_outliers).map(|_| {
        Point3D::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-40.0..40.0),
        )
    }));
    points.shuffle(&mut rng);

    let result = fit_plane(&points, 0.05, Some(FitSettings::default()))?;

    let coarse = result.coarse.plane;
    println!("Coarse candidate:");
    println!(
        "  {:.4}x + {:.4}y + {:.4}z + {:.4} = 0",
        coarse.a, coarse.b, coarse.c, coarse.d
    );
    println!(
        "  fitment {:.3} ({} inliers, {} triplets, {} degenerate)",
        result.coarse.fitment.fraction,
        result.coarse.inliers.len(),
        result.coarse.hypotheses,
        result.coarse.rejected
    );

    let refined = result.refined;
    println!("\nRefined over the nearest {} points:", result.support.len());
    println!(
        "  z = {:.4}x + {:.4}y + {:.4}",
        -refined.a, -refined.b, -refined.d
    );
    println!(
        "  error: a {:.2e}, b {:.2e}, c {:.2e}",
        (-refined.a - true_a).abs(),
        (-refined.b - true_b).abs(),
        (-refined.d - true_c).abs()
    );

    Ok(())
}
