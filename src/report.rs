//! Scenario sweeps and reference charts.
//!
//! [`run_scenarios`] evaluates each emitter configuration over a shared
//! distance sweep. With the `plot` feature, [`render_chart`] draws the
//! resulting series to a PNG.
//!
//! ```
//! use ir_emitter_models::models::radiant::emitter::{EmitterConfig, ModelParameters};
//! use ir_emitter_models::report::{SweepConfig, run_scenarios};
//!
//! let series = run_scenarios(
//!     &EmitterConfig::baselines(),
//!     &ModelParameters::default(),
//!     &SweepConfig::default(),
//! );
//!
//! let names: Vec<_> = series.iter().map(|s| s.name.as_str()).collect();
//! assert_eq!(names, ["Smooth", "Ramp", "Stator+Ramp"]);
//! ```

#[cfg(feature = "plot")]
mod chart;
#[cfg(feature = "plot")]
mod error;
mod scenario;

#[cfg(feature = "plot")]
pub use chart::{ChartConfig, render_chart};
#[cfg(feature = "plot")]
pub use error::ReportError;
pub use scenario::{ScenarioSeries, SweepConfig, run_scenarios};
