//! Faculty Payroll Engine
//!
//! This crate validates daily teaching workload entries (lectures, tutorials, labs),
//! prices them against a configured rate table, and aggregates them into monthly
//! summaries and receipt data for faculty members.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
