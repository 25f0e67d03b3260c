//! # ringlab-poly
//!
//! Generic single-variable polynomials for Ringlab.
//!
//! The one type here, [`Polynomial`], works over any coefficient type
//! implementing `ringlab_rings::Ring`: machine-word fields, arbitrary
//! precision integers and rationals, or other polynomials. Because
//! `Polynomial<R>` itself implements `Ring` when `R` is commutative,
//! the instantiation recurses: a polynomial in `y` whose coefficients
//! are polynomials in `x` is just `Polynomial<Polynomial<R>>`, and the
//! same addition, convolution and evaluation code runs at every level.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use error::PolyError;
pub use polynomial::Polynomial;
