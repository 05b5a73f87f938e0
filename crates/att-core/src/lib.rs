//! # att-core
//!
//! Core types and error definitions for attendance-rs.
//!
//! This crate provides the building blocks shared by every other crate in the
//! workspace: the primitive type aliases for period counts and percentages,
//! and the error hierarchy with its `ensure!` macro.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Number of periods scheduled on a single calendar day.
pub type DailyPeriods = u32;

/// Cumulative number of periods (attended or held) over any span of days.
pub type PeriodCount = u64;

/// Signed period difference, e.g. a buffer that may be negative.
pub type PeriodBalance = i64;

/// A percentage expressed on the 0–100 scale (e.g. 75.0 = 75 %).
pub type Percentage = f64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
