//! Core use-case services.
//!
//! # Responsibility
//! - Validate user input before it reaches the repository layer.
//! - Orchestrate repository calls into board-level use cases.
//! - Derive dashboard statistics and report snapshots.

pub mod board_service;
pub mod dashboard;
pub mod project_name;
