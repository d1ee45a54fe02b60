//! Career Compass - Deterministic profiling and recommendation engine.
//!
//! This crate implements the rule-based classifiers, rankers, composite
//! indices and report synthesizers behind a career self-assessment platform.

pub mod application;
pub mod domain;
pub mod ports;
