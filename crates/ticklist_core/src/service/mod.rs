//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate list mutation and store mirroring into use-case APIs.
//! - Keep front ends decoupled from storage details.

pub mod session;
