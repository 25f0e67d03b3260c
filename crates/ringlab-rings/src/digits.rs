//! Grade-school numbers as digit positions.
//!
//! A [`DigitList`] holds the base-10 place values of a number in
//! ascending order, with no carrying: `87 * 61` produces `[7, 50, 48]`,
//! which still evaluates to `5307`. Addition is positionwise and
//! multiplication is the same discrete convolution the polynomial
//! entity uses, which is the point of the demonstration: positional
//! arithmetic is polynomial arithmetic evaluated at the base.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::{CommutativeRing, Ring};

/// An integer as uncarried base-10 place values, ascending.
///
/// Normal form: no trailing zero place, and the empty list is zero.
/// Positions may hold any integer (negatives appear under negation),
/// so equality is positional, not numeric: `[10]` and `[0, 1]` are
/// different elements even though both evaluate to ten.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct DigitList(Vec<i64>);

impl DigitList {
    /// Creates a digit list from ascending place values, trimming
    /// trailing zeros.
    #[must_use]
    pub fn new(mut places: Vec<i64>) -> Self {
        let len = places.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1);
        places.truncate(len);
        Self(places)
    }

    /// Returns the place values in ascending order.
    #[must_use]
    pub fn places(&self) -> &[i64] {
        &self.0
    }

    /// Evaluates the places at base 10.
    ///
    /// Widened to `i128`: uncarried places grow under repeated
    /// multiplication, so an `i64` accumulator could overflow long
    /// before the carried result does.
    #[must_use]
    pub fn value(&self) -> i128 {
        self.0
            .iter()
            .rev()
            .fold(0i128, |acc, &d| acc * 10 + i128::from(d))
    }
}

impl Ring for DigitList {
    fn zero() -> Self {
        Self(Vec::new())
    }

    fn one() -> Self {
        Self(vec![1])
    }

    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    fn is_one(&self) -> bool {
        self.0 == [1]
    }
}

impl CommutativeRing for DigitList {}

impl fmt::Debug for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitList({:?})", self.0)
    }
}

impl fmt::Display for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl Add for DigitList {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let len = self.0.len().max(rhs.0.len());
        let mut places = Vec::with_capacity(len);

        for i in 0..len {
            let a = self.0.get(i).copied().unwrap_or(0);
            let b = rhs.0.get(i).copied().unwrap_or(0);
            places.push(a + b);
        }

        Self::new(places)
    }
}

impl Sub for DigitList {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for DigitList {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.0.is_empty() || rhs.0.is_empty() {
            return Self(Vec::new());
        }

        let mut places = vec![0; self.0.len() + rhs.0.len() - 1];
        for (i, a) in self.0.iter().enumerate() {
            for (j, b) in rhs.0.iter().enumerate() {
                places[i + j] += a * b;
            }
        }

        Self::new(places)
    }
}

impl Neg for DigitList {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.into_iter().map(|d| -d).collect())
    }
}
