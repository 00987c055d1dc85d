//! Persona Quiz - Personality quiz matching engine
//!
//! This crate turns a user's multiple-choice quiz answers into a normalized
//! trait vector and matches it against a roster of personas using weighted
//! cosine similarity with a repetition penalty.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
