//! Weekly Overtime Engine
//!
//! This crate turns daily clock-in/clock-out records into weekly hours and
//! pay. Hours beyond a daily threshold are split into double and triple
//! overtime under one weekly double-overtime cap that is consumed in date
//! order, Monday first.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod store;
pub mod timesheet;
