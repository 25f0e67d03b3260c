//! # ringlab-rings
//!
//! Algebraic structures for Ringlab.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `CommutativeRing`
//! - A one-time sanity check for ring capabilities (`validate_ring`)
//! - Concrete implementations: Z, Q, `Fp`, `DigitList`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//! ```
//!
//! Every ring here is commutative with a multiplicative identity, which
//! is exactly what the polynomial entity in `ringlab-poly` requires of
//! its coefficients.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digits;
pub mod finite_field;
pub mod integers;
pub mod rationals;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use digits::DigitList;
pub use finite_field::{Fp, F5};
pub use integers::Z;
pub use rationals::Q;
pub use traits::{validate_ring, CommutativeRing, MalformedRing, Ring};
