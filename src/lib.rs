//! Bar Ops estimation engine
//!
//! This crate estimates how long a mobile bar takes to assemble, finds the
//! smallest crew that meets a target duration, and weighs the required
//! hours against the monthly capacity of the fixed staff pool.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
