//! # ringlab-axioms
//!
//! A reusable test oracle for commutative-ring laws.
//!
//! [`check_commutative_ring`] takes a sample set plus the ring's
//! distinguished zero and one, and asserts every commutative-ring law
//! over them: the identity table, per-sample identities and inverses,
//! pairwise commutativity, and triple-wise associativity and
//! distributivity. It speaks only through the `Ring` contract, so the
//! same checker runs against machine integers, finite fields, digit
//! lists, polynomials, and polynomials of polynomials.
//!
//! Cost is cubic in the number of samples; keep sample sets small
//! (three to six values is plenty).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use ringlab_rings::traits::{validate_ring, MalformedRing, Ring};
use thiserror::Error;

/// A ring failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AxiomError {
    /// The capability failed its one-time sanity check before any law
    /// was exercised.
    #[error(transparent)]
    MalformedRing(#[from] MalformedRing),

    /// A ring law does not hold for the reported operands.
    #[error("ring axiom `{law}` violated for operands {operands}")]
    Violation {
        /// The law that failed, e.g. `a * b == b * a`.
        law: &'static str,
        /// The offending sample(s), rendered in debug form.
        operands: String,
    },
}

fn ensure<R: Ring>(holds: bool, law: &'static str, operands: &[&R]) -> Result<(), AxiomError> {
    if holds {
        Ok(())
    } else {
        let rendered: Vec<String> = operands.iter().map(|v| format!("{v:?}")).collect();
        Err(AxiomError::Violation {
            law,
            operands: rendered.join(", "),
        })
    }
}

/// Verifies every commutative-ring law over the given samples.
///
/// `zero` and `one` are passed explicitly rather than taken from the
/// trait so callers can verify values whose identities carry extra
/// state, such as polynomial rings where zero and one were built in a
/// particular variable.
///
/// Fails on the first violation, reporting which law broke and for
/// which sample(s).
///
/// # Errors
///
/// Returns [`AxiomError::MalformedRing`] if the capability fails its
/// sanity check, or [`AxiomError::Violation`] naming the first law that
/// does not hold.
pub fn check_commutative_ring<R: Ring>(
    samples: &[R],
    zero: &R,
    one: &R,
) -> Result<(), AxiomError> {
    validate_ring::<R>()?;

    // Identity table
    ensure::<R>(
        zero.clone() * zero.clone() == *zero,
        "zero * zero == zero",
        &[],
    )?;
    ensure::<R>(
        zero.clone() * one.clone() == *zero,
        "zero * one == zero",
        &[],
    )?;
    ensure::<R>(
        one.clone() * zero.clone() == *zero,
        "one * zero == zero",
        &[],
    )?;
    ensure::<R>(one.clone() * one.clone() == *one, "one * one == one", &[])?;
    ensure::<R>(
        zero.clone() + zero.clone() == *zero,
        "zero + zero == zero",
        &[],
    )?;
    ensure::<R>(one.clone() + zero.clone() == *one, "one + zero == one", &[])?;
    ensure::<R>(zero.clone() + one.clone() == *one, "zero + one == one", &[])?;

    for a in samples {
        ensure(zero.clone() + a.clone() == *a, "zero + a == a", &[a])?;
        ensure(a.clone() + zero.clone() == *a, "a + zero == a", &[a])?;
        ensure(one.clone() * a.clone() == *a, "one * a == a", &[a])?;
        ensure(a.clone() * one.clone() == *a, "a * one == a", &[a])?;
        ensure(a.clone() + (-a.clone()) == *zero, "a + (-a) == zero", &[a])?;
        ensure((-a.clone()) + a.clone() == *zero, "(-a) + a == zero", &[a])?;

        for b in samples {
            ensure(
                a.clone() * b.clone() == b.clone() * a.clone(),
                "a * b == b * a",
                &[a, b],
            )?;
            ensure(
                a.clone() + b.clone() == b.clone() + a.clone(),
                "a + b == b + a",
                &[a, b],
            )?;

            for c in samples {
                ensure(
                    a.clone() * (b.clone() + c.clone())
                        == a.clone() * b.clone() + a.clone() * c.clone(),
                    "a * (b + c) == a * b + a * c",
                    &[a, b, c],
                )?;
                ensure(
                    (a.clone() + b.clone()) + c.clone() == a.clone() + (b.clone() + c.clone()),
                    "(a + b) + c == a + (b + c)",
                    &[a, b, c],
                )?;
                ensure(
                    (a.clone() * b.clone()) * c.clone() == a.clone() * (b.clone() * c.clone()),
                    "(a * b) * c == a * (b * c)",
                    &[a, b, c],
                )?;
            }
        }
    }

    Ok(())
}

/// Verifies a ring whose zero and one come straight from the trait.
///
/// # Errors
///
/// Same as [`check_commutative_ring`].
pub fn check_commutative_ring_default<R: Ring>(samples: &[R]) -> Result<(), AxiomError> {
    check_commutative_ring(samples, &R::zero(), &R::one())
}
