//! Algebraic structure traits.
//!
//! This module defines the capability contract a value type must satisfy
//! to be used as a polynomial coefficient or as a sample for the axiom
//! verifier in `ringlab-axioms`.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use thiserror::Error;

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
///
/// The `Display` bound is part of the contract: a ring element's string
/// form is what polynomial rendering embeds for each coefficient.
pub trait Ring:
    Clone
    + Eq
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n for non-negative n.
    ///
    /// The default uses binary exponentiation, which is value-equal to
    /// repeated self-multiplication because multiplication is
    /// associative. `pow(v, 0)` is `one()` for every `v`, including
    /// `zero()`.
    #[must_use]
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A commutative ring where multiplication is commutative.
///
/// All rings in this workspace are commutative; the marker exists so
/// polynomial coefficients can require it explicitly.
pub trait CommutativeRing: Ring {}

/// A ring capability failed its one-time sanity check.
///
/// Raised by [`validate_ring`] before any arithmetic is attempted, so an
/// incomplete or inconsistent ring implementation fails fast instead of
/// producing wrong results later.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed ring capability: `{check}` does not hold")]
pub struct MalformedRing {
    /// The sanity check that failed.
    pub check: &'static str,
}

/// Validates the constant-time-checkable corner cases of a ring.
///
/// The type system already guarantees the shape of the capability (the
/// operations exist and are closed over `R`), so what remains is the
/// small set of value-level checks that a hand-written implementation
/// most often gets wrong: the interaction of `pow` with the
/// distinguished constants.
///
/// # Errors
///
/// Returns [`MalformedRing`] naming the first check that failed.
pub fn validate_ring<R: Ring>() -> Result<(), MalformedRing> {
    let zero = R::zero();
    let one = R::one();

    if zero.pow(0) != one {
        return Err(MalformedRing {
            check: "power(zero, 0) == one",
        });
    }
    if one.pow(0) != one {
        return Err(MalformedRing {
            check: "power(one, 0) == one",
        });
    }
    if one.pow(1) != one {
        return Err(MalformedRing {
            check: "power(one, 1) == one",
        });
    }
    if one.pow(2) != one {
        return Err(MalformedRing {
            check: "power(one, 2) == one",
        });
    }

    Ok(())
}
