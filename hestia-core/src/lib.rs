//! Hestia Core
//!
//! Core types and abstractions for the Hestia thermostat simulator.
//!
//! This crate contains:
//! - Domain types: Core business entities (AdjustmentRecord, WeatherReading, etc.)
//! - DTOs: Data transfer objects for the thermostat API
//! - Insights: aggregate statistics computed over the adjustment history

pub mod domain;
pub mod dto;
pub mod insights;
