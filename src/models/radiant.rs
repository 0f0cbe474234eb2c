//! Radiant heating models.
//!
//! This module contains models for combustion-driven infrared emitters and the
//! irradiance they deliver to people nearby.

pub mod emitter;
