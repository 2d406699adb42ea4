//! # lp-core
//!
//! Core type aliases and error definitions for leaveplan-rs.
//!
//! This crate provides the foundation shared across all other crates in
//! the workspace: the error taxonomy, the `ensure!` macro, and the
//! primitive aliases used for leave accounting.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Leave balance expressed in days (fractional balances are allowed,
/// e.g. half-day credits).
pub type Balance = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
