//! Errors raised by polynomial construction and arithmetic.
//!
//! Every variant is a caller-triggered precondition violation; nothing
//! here is transient or retryable.

use thiserror::Error;

/// A polynomial operation was given arguments it cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A polynomial was constructed with an empty variable name.
    #[error("polynomial variable name must be non-empty")]
    EmptyVariable,

    /// An operation combined polynomials in different variables.
    ///
    /// Variable identity is deliberate: a polynomial in `x` and a
    /// polynomial in `y` are never combinable, even when they would be
    /// equal under renaming.
    #[error("incompatible polynomials: variable `{left}` does not match `{right}`")]
    Incompatible {
        /// Variable name of the left operand.
        left: String,
        /// Variable name of the right operand.
        right: String,
    },

    /// A negative exponent was requested.
    #[error("unsupported exponent {0}: polynomial exponents must be non-negative")]
    UnsupportedExponent(i64),
}
