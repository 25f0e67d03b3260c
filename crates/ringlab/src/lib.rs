//! # Ringlab
//!
//! A small generic algebra engine: a commutative-ring capability
//! contract, a single-variable polynomial generic over any ring
//! satisfying it, and a property-based verifier that checks the ring
//! axioms against arbitrary sample sets.
//!
//! The polynomial is itself ring-capable, so the instantiation
//! recurses: the same convolution, evaluation and rendering logic runs
//! whether the coefficients are machine-word field elements, arbitrary
//! precision integers, or other polynomials.
//!
//! ## Quick Start
//!
//! ```rust
//! use ringlab::prelude::*;
//!
//! let x = Polynomial::<Z>::var("x")?;
//! let one = Polynomial::one();
//! let p = x.checked_add(&one)?.checked_pow(2)?;
//! assert_eq!(p.to_string(), "x**2+(2)*x+1");
//! assert_eq!(p.eval(&Z::new(9)), Z::new(100));
//! # Ok::<(), ringlab::poly::PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ringlab_axioms as axioms;
pub use ringlab_poly as poly;
pub use ringlab_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ringlab_axioms::{check_commutative_ring, check_commutative_ring_default, AxiomError};
    pub use ringlab_poly::{PolyError, Polynomial};
    pub use ringlab_rings::{
        validate_ring, CommutativeRing, DigitList, Fp, MalformedRing, Q, Ring, F5, Z,
    };
}
