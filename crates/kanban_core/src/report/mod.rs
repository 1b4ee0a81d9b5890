//! Status report collaborator.
//!
//! # Responsibility
//! - Build report requests from a snapshot of board state.
//! - Call the external text-generation service asynchronously.
//! - Turn every failure into a displayable message at the boundary.
//!
//! # Invariants
//! - Report generation never reads or writes live repository state.
//! - An abandoned report is discarded; nothing is applied on completion.

pub mod file;
pub mod generator;
pub mod job;
pub mod request;
