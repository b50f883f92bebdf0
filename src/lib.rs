//! BPM-LEIA - Interview Trainer for Business Process Modeling
//!
//! This crate implements the backend for interview-style BPM training:
//! learners question an AI-simulated domain expert about a business process
//! and model what they learn.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
