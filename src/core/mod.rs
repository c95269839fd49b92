//! Core report logic for propreport
//!
//! This module contains pure logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ReportModel`, `RenderFailure`, `PropertyValue`)
//! - `services/` - Model building, emission, and the memoized report task
//! - `ports/` - Trait definitions for property sources and sinks

pub mod models;
pub mod ports;
pub mod services;
