// ─────────────────────────────────────────────────────────────────────
// Goldstone Dynamics — Replay Simulator CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use anyhow::{bail, Context, Result};
use clap::Parser;
use goldstone_core::trajectory::{uniform_controls, verify_replay};
use goldstone_types::config::DynamicsConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "goldstone-sim",
    about = "Drive the goldstone rotation dynamics with seeded controls and verify replay"
)]
struct Cli {
    /// JSON dynamics config; built-in defaults when omitted
    #[arg(long)]
    config: Option<String>,

    /// Seed for the warm-up controls; the recorded controls use seed + 1
    #[arg(long, default_value = "12345")]
    seed: u64,

    /// Controls applied before the state is memorized
    #[arg(long, default_value = "1000")]
    warmup: usize,

    /// Controls recorded and replayed
    #[arg(long, default_value = "1000")]
    steps: usize,

    /// Controls are drawn uniformly from [-bound, bound]
    #[arg(long, default_value = "1.0")]
    bound: f64,

    /// Largest reward difference still counted as a match
    #[arg(long, default_value = "1e-4")]
    tolerance: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if !cli.bound.is_finite() || cli.bound < 0.0 {
        bail!("--bound must be a finite non-negative number, got {}", cli.bound);
    }
    if cli.tolerance.is_nan() || cli.tolerance < 0.0 {
        bail!("--tolerance must be non-negative, got {}", cli.tolerance);
    }

    let config = match &cli.config {
        Some(path) => DynamicsConfig::from_file(path)
            .with_context(|| format!("loading dynamics config from {path}"))?,
        None => DynamicsConfig::default(),
    };
    tracing::info!(
        number_steps = config.number_steps,
        max_required_step = config.max_required_step,
        safe_zone = config.safe_zone,
        seed = cli.seed,
        warmup = cli.warmup,
        steps = cli.steps,
        "Starting goldstone replay check"
    );

    let warmup = uniform_controls(cli.seed, cli.warmup, cli.bound);
    let controls = uniform_controls(cli.seed.wrapping_add(1), cli.steps, cli.bound);
    let report = verify_replay(&config, &warmup, &controls, cli.tolerance)?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(step) = report.divergence {
        bail!("replay diverged at step {step}");
    }
    tracing::info!(
        total_reward = report.recorded.total_reward(),
        "Replay reproduced the recorded trajectory"
    );
    Ok(())
}
