//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., power, length,
//! conductance). This module provides extensions that are useful for modeling
//! but aren't included in [`uom`].
//!
//! ## Burner ratings
//!
//! Burner heat input is quoted in BTU/hr. [`uom`] already has a BTU/hr unit,
//! but it is derived from the International Table BTU and does not match the
//! fixed factor used for burner ratings here. Use [`burner_power`] instead:
//!
//! ```
//! use ir_emitter_models::support::units::burner_power;
//! use uom::si::power::watt;
//!
//! let p = burner_power(50_000.0);
//! assert!((p.get::<watt>() - 14_653.5535).abs() < 1e-6);
//! ```

mod burner;

pub use burner::{BTU_PER_HR_TO_W, burner_power};
