//! Regenerates the reference absorbed-power chart.
//!
//! Evaluates the baseline emitter configurations over the default sweep and
//! writes `absorbed_vs_distance.png` to the working directory. Set `RUST_LOG`
//! to see per-scenario logs.

use ir_emitter_models::{
    models::radiant::emitter::{EmitterConfig, ModelParameters},
    report::{ChartConfig, ReportError, SweepConfig, render_chart, run_scenarios},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ReportError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let series = run_scenarios(
        &EmitterConfig::baselines(),
        &ModelParameters::default(),
        &SweepConfig::default(),
    );
    let path = render_chart(&series, &ChartConfig::default())?;

    println!("Wrote {}", path.display());
    Ok(())
}
