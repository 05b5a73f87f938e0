//! Error types for attendance-rs.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below. Degenerate but
//! well-defined inputs (an empty date range, a zero denominator) are not
//! errors; they have defined results in the accounting engine.

use thiserror::Error;

/// The top-level error type used throughout attendance-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Malformed or out-of-range calendar date.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument (bad template, percentage, holiday index, …).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Precondition violated (raised by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// No periods were held, so no percentage can be computed.
    #[error("total periods are zero; check the weekday template")]
    NoPeriods,

    /// Retroactive leave larger than the periods attended so far.
    #[error("cannot take {leave} period(s) of leave with only {attended} attended")]
    LeaveExceedsAttendance {
        /// Periods of leave requested.
        leave: u64,
        /// Periods attended before the leave.
        attended: u64,
    },

    /// Configuration could not be read, parsed or validated.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand `Result` type used throughout attendance-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use att_core::{ensure, errors::Error};
/// fn positive(x: u32) -> att_core::errors::Result<u32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
