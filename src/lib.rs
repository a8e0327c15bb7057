//! Agri Coach - farming career survey and recommendation core
//!
//! This crate implements a 12-question survey wizard, submission of the
//! finalized answers to a remote scoring service, and a tolerant parser that
//! turns the service's result text into typed recommendation records.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
