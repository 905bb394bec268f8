//! Monte Carlo estimate of a unit ball's volume from points drawn in a window.
//!
//! Usage: `cargo run --example monte_carlo [experiment.toml]`

use spatial_windows::prelude::*;
use spatial_windows::ExperimentConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_EXPERIMENT: &str = r#"
count = 100000
seed = 2024

[window]
shape = "box"
bounds = [[-1.0, 1.0], [-1.0, 1.0], [-1.0, 1.0]]
"#;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => ExperimentConfig::from_file(path)?,
        None => {
            let mut config = ExperimentConfig::from_toml_str(DEFAULT_EXPERIMENT)?;
            config.apply_env_overrides()?;
            config
        }
    };
    let window = config.window.build()?;
    info!(window = %window, count = config.count, seed = ?config.seed, "starting experiment");

    let target = UnitBallWindow::new(window.bounding_box().center())?;
    let points = window.sample_from(config.count, config.random_source());
    let mut inside = 0usize;
    for point in &points {
        if target.contains(point)? {
            inside += 1;
        }
    }

    let fraction = inside as f64 / points.len() as f64;
    let estimate = fraction * window.volume();
    info!(inside, fraction, "counted points inside {}", target);
    println!(
        "estimated volume {:.5} (exact {:.5}, valid when the window covers the ball)",
        estimate,
        target.volume()
    );
    Ok(())
}
