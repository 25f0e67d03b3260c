//! Dense single-variable polynomials with variable identity.
//!
//! A polynomial is a coefficient vector in ascending degree order plus
//! the name of its free variable. The variable name is part of the
//! value's identity: polynomials in different variables are never
//! combinable and never equal.

use std::fmt;

use ringlab_rings::traits::{CommutativeRing, Ring};

use crate::error::PolyError;

/// A polynomial over a ring R in a named variable.
///
/// # Normal form
///
/// Every `Polynomial` observes two invariants, restored after each
/// operation, which make derived structural equality the semantic one:
///
/// - the coefficient vector has no trailing zero; the empty vector is
///   the zero polynomial
/// - `var` is `None` exactly when the polynomial is constant (degree
///   less than one), since a constant does not mention the variable
///
/// Constants built through [`Polynomial::zero`], [`Polynomial::one`]
/// and [`Polynomial::constant`] are therefore variable-agnostic and
/// combine with polynomials in any variable, which is what lets
/// `Polynomial<R>` implement [`Ring`] (whose `zero()`/`one()` take no
/// variable name) and so serve as the coefficient type of an outer
/// polynomial.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial<R: Ring> {
    /// Coefficients in ascending degree order: [a_0, a_1, a_2, ...]
    coeffs: Vec<R>,
    var: Option<String>,
}

impl<R: Ring> Polynomial<R> {
    /// Restores the normal form invariants.
    fn normalized(mut coeffs: Vec<R>, var: Option<String>) -> Self {
        // Single pass from the end: locate the last non-zero
        // coefficient and truncate after it.
        let len = coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .map_or(0, |i| i + 1);
        coeffs.truncate(len);

        let var = if coeffs.len() > 1 { var } else { None };
        Self { coeffs, var }
    }

    /// Creates a polynomial in the named variable from coefficients in
    /// ascending degree order. Trailing zero coefficients are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::EmptyVariable`] if `var` is empty.
    pub fn new(coeffs: Vec<R>, var: &str) -> Result<Self, PolyError> {
        if var.is_empty() {
            return Err(PolyError::EmptyVariable);
        }
        Ok(Self::normalized(coeffs, Some(var.to_owned())))
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: Vec::new(),
            var: None,
        }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self::normalized(vec![c], None)
    }

    /// Creates the polynomial consisting of the variable itself.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::EmptyVariable`] if `var` is empty.
    pub fn var(var: &str) -> Result<Self, PolyError> {
        Self::new(vec![R::zero(), R::one()], var)
    }

    /// Creates the monomial c * x^n in the named variable.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::EmptyVariable`] if `var` is empty.
    pub fn monomial(c: R, n: usize, var: &str) -> Result<Self, PolyError> {
        let mut coeffs = vec![R::zero(); n + 1];
        coeffs[n] = c;
        Self::new(coeffs, var)
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        if self.coeffs.is_empty() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true if this is the constant polynomial 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_one()
    }

    /// Returns the coefficient of x^i (zero beyond the stored length).
    #[must_use]
    pub fn coeff(&self, i: usize) -> R {
        self.coeffs.get(i).cloned().unwrap_or_else(R::zero)
    }

    /// Returns the stored coefficients in ascending degree order.
    #[must_use]
    pub fn coeffs(&self) -> &[R] {
        &self.coeffs
    }

    /// Returns the variable name, or `None` for constants.
    #[must_use]
    pub fn variable(&self) -> Option<&str> {
        self.var.as_deref()
    }

    /// Picks the variable identity for a result whose operands are
    /// already known to be compatible.
    fn join_var(&self, other: &Self) -> Option<String> {
        self.var.clone().or_else(|| other.var.clone())
    }

    /// Checks that two polynomials may be combined.
    fn unify_var(&self, other: &Self) -> Result<Option<String>, PolyError> {
        match (&self.var, &other.var) {
            (Some(a), Some(b)) if a != b => Err(PolyError::Incompatible {
                left: a.clone(),
                right: b.clone(),
            }),
            _ => Ok(self.join_var(other)),
        }
    }

    fn add_impl(&self, other: &Self, var: Option<String>) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            let a = self.coeffs.get(i).cloned().unwrap_or_else(R::zero);
            let b = other.coeffs.get(i).cloned().unwrap_or_else(R::zero);
            result.push(a + b);
        }

        Self::normalized(result, var)
    }

    /// Discrete convolution: the coefficient of x^k in the result sums
    /// every product of coefficients whose degrees add to k.
    fn mul_impl(&self, other: &Self, var: Option<String>) -> Self {
        if self.coeffs.is_empty() || other.coeffs.is_empty() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![R::zero(); n + m - 1];

        for i in 0..n {
            for j in 0..m {
                result[i + j] =
                    result[i + j].clone() + self.coeffs[i].clone() * other.coeffs[j].clone();
            }
        }

        Self::normalized(result, var)
    }

    /// Adds two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Incompatible`] if the variable names differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, PolyError> {
        let var = self.unify_var(other)?;
        Ok(self.add_impl(other, var))
    }

    /// Subtracts two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Incompatible`] if the variable names differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, PolyError> {
        self.checked_add(&other.neg())
    }

    /// Multiplies two polynomials by discrete convolution.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Incompatible`] if the variable names differ.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, PolyError> {
        let var = self.unify_var(other)?;
        Ok(self.mul_impl(other, var))
    }

    /// Raises the polynomial to a non-negative exponent by repeated
    /// multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::UnsupportedExponent`] for negative
    /// exponents.
    pub fn checked_pow(&self, exponent: i64) -> Result<Self, PolyError> {
        if exponent < 0 {
            return Err(PolyError::UnsupportedExponent(exponent));
        }
        if exponent == 0 {
            return Ok(Self::one());
        }

        let mut result = self.clone();
        for _ in 1..exponent {
            result = result.checked_mul(self)?;
        }
        Ok(result)
    }

    /// Negates a polynomial elementwise.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self::normalized(
            self.coeffs.iter().map(|c| -c.clone()).collect(),
            self.var.clone(),
        )
    }

    /// Multiplies every coefficient by a constant.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        Self::normalized(
            self.coeffs.iter().map(|x| c.clone() * x.clone()).collect(),
            self.var.clone(),
        )
    }

    /// Substitutes `x` for the free variable.
    ///
    /// The sum `Σ coeff_i * x^i` is accumulated left to right starting
    /// from zero, with the running power built by repeated
    /// multiplication. When `R` is itself a polynomial type this is
    /// composition of a nested polynomial with a value one level down.
    #[must_use]
    pub fn eval(&self, x: &R) -> R {
        let mut acc = R::zero();
        let mut power = R::one();
        for c in &self.coeffs {
            acc = acc + c.clone() * power.clone();
            power = power * x.clone();
        }
        acc
    }

    /// Substitutes another polynomial for the free variable
    /// (composition at the same nesting level).
    ///
    /// Each coefficient is lifted to a constant polynomial, so every
    /// intermediate value carries either `x`'s variable or none;
    /// incompatibility cannot arise.
    #[must_use]
    pub fn compose(&self, x: &Self) -> Self {
        let mut acc = Self::zero();
        let mut power = Self::one();
        for c in &self.coeffs {
            let term = power.scale(c);
            let var = acc.join_var(&term);
            acc = acc.add_impl(&term, var);
            let var = power.join_var(x);
            power = power.mul_impl(x, var);
        }
        acc
    }

    /// Compares two polynomials, rejecting incomparable operands.
    ///
    /// The `PartialEq` impl answers `false` for polynomials in
    /// different variables; this form reports the mismatch instead, for
    /// callers that treat cross-variable comparison as a usage error.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Incompatible`] if the variable names differ.
    pub fn checked_eq(&self, other: &Self) -> Result<bool, PolyError> {
        self.unify_var(other)?;
        Ok(self.coeffs == other.coeffs)
    }
}

impl<R: Ring> fmt::Display for Polynomial<R> {
    /// Canonical rendering: non-zero terms, highest degree first,
    /// joined by `+`. Degree 0 prints the coefficient alone; higher
    /// degrees print `({coeff})*{var}**{deg}`, with the coefficient
    /// part dropped when the coefficient is one and the exponent part
    /// shortened for degree 1. The zero polynomial prints as the
    /// ring's zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "{}", R::zero());
        }

        let mut terms = Vec::new();
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let term = if i == 0 {
                format!("{c}")
            } else {
                let var = self
                    .var
                    .as_deref()
                    .expect("non-constant polynomial carries a variable name");
                match (i, c.is_one()) {
                    (1, true) => var.to_owned(),
                    (1, false) => format!("({c})*{var}"),
                    (_, true) => format!("{var}**{i}"),
                    (_, false) => format!("({c})*{var}**{i}"),
                }
            };
            terms.push(term);
        }

        terms.reverse();
        write!(f, "{}", terms.join("+"))
    }
}

// The operator impls delegate to the checked forms. They exist so that
// `Polynomial<R>` satisfies `Ring` and can recurse as a coefficient
// type; within a single ring of polynomials every operand shares one
// variable, so the panic path is unreachable there.

impl<R: CommutativeRing> std::ops::Add for Polynomial<R> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the operands are in different variables; use
    /// [`Polynomial::checked_add`] to handle that case.
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<R: CommutativeRing> std::ops::Sub for Polynomial<R> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the operands are in different variables; use
    /// [`Polynomial::checked_sub`] to handle that case.
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<R: CommutativeRing> std::ops::Mul for Polynomial<R> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the operands are in different variables; use
    /// [`Polynomial::checked_mul`] to handle that case.
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<R: CommutativeRing> std::ops::Neg for Polynomial<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl<R: CommutativeRing> Ring for Polynomial<R> {
    fn zero() -> Self {
        Self::zero()
    }

    fn one() -> Self {
        Self::one()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }

    fn is_one(&self) -> bool {
        self.is_one()
    }
}

impl<R: CommutativeRing> CommutativeRing for Polynomial<R> {}
