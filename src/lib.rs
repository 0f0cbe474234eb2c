//! # IR Emitter Models
//!
//! Absorbed infrared power models for combustion-based radiant emitters.
//!
//! A burner's fuel input is carried through a chain of dimensionless loss
//! factors to the net infrared power leaving the emitter, which is then spread
//! hemispherically over distance and intercepted by a standing person.
//!
//! ## Crate layout
//!
//! - [`models`]: The radiative transfer model and its [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models.
//! - [`report`]: Scenario sweeps and chart rendering over the baseline emitter configurations.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific utility code starts in a model's internal `core` module and
//! only moves to [`support`] once it is useful across models.

pub mod models;
pub mod report;
pub mod support;
