//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::polynomial::Polynomial;
    use ringlab_rings::{Q, Ring};

    // Strategy for generating small rational coefficients
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-100i64..100i64).prop_map(Q::from_integer)
    }

    // Strategy for generating small polynomials (degree 0-4) in x
    fn small_poly() -> impl Strategy<Value = Polynomial<Q>> {
        proptest::collection::vec(small_coeff(), 1..=5)
            .prop_map(|coeffs| Polynomial::new(coeffs, "x").unwrap())
    }

    // Strategy for generating non-zero polynomials
    fn nonzero_poly() -> impl Strategy<Value = Polynomial<Q>> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.checked_add(&b).unwrap(), b.checked_add(&a).unwrap());
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(
                a.checked_add(&b).unwrap().checked_add(&c).unwrap(),
                a.checked_add(&b.checked_add(&c).unwrap()).unwrap()
            );
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.checked_mul(&b).unwrap(), b.checked_mul(&a).unwrap());
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(
                a.checked_mul(&b).unwrap().checked_mul(&c).unwrap(),
                a.checked_mul(&b.checked_mul(&c).unwrap()).unwrap()
            );
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.checked_mul(&b.checked_add(&c).unwrap()).unwrap();
            let right = a
                .checked_mul(&b)
                .unwrap()
                .checked_add(&a.checked_mul(&c).unwrap())
                .unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert_eq!(a.checked_add(&zero).unwrap(), a.clone());
            prop_assert_eq!(zero.checked_add(&a).unwrap(), a);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = Polynomial::one();
            prop_assert_eq!(a.checked_mul(&one).unwrap(), a.clone());
            prop_assert_eq!(one.checked_mul(&a).unwrap(), a);
        }

        #[test]
        fn poly_mul_zero(a in small_poly()) {
            let zero = Polynomial::zero();
            prop_assert!(a.checked_mul(&zero).unwrap().is_zero());
            prop_assert!(zero.checked_mul(&a).unwrap().is_zero());
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.checked_add(&a.neg()).unwrap().is_zero());
        }

        // Normalization

        #[test]
        fn poly_trailing_zeros_are_canonical(
            coeffs in proptest::collection::vec(small_coeff(), 0..=5),
            padding in 0usize..4
        ) {
            let mut padded = coeffs.clone();
            padded.extend(std::iter::repeat(<Q as Ring>::zero()).take(padding));
            prop_assert_eq!(
                Polynomial::new(padded, "x").unwrap(),
                Polynomial::new(coeffs, "x").unwrap()
            );
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            // deg(a * b) = deg(a) + deg(b) over an integral domain
            let product = a.checked_mul(&b).unwrap();
            prop_assert_eq!(
                product.degree(),
                Some(a.degree().unwrap() + b.degree().unwrap())
            );
        }

        #[test]
        fn poly_add_degree_bound(a in nonzero_poly(), b in nonzero_poly()) {
            // deg(a + b) <= max(deg(a), deg(b))
            let sum = a.checked_add(&b).unwrap();
            if let Some(deg) = sum.degree() {
                prop_assert!(deg <= a.degree().unwrap().max(b.degree().unwrap()));
            }
        }

        // Evaluation properties

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a + b)(x) = a(x) + b(x)
            let sum = a.checked_add(&b).unwrap();
            prop_assert_eq!(sum.eval(&x), a.eval(&x) + b.eval(&x));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a * b)(x) = a(x) * b(x)
            let product = a.checked_mul(&b).unwrap();
            prop_assert_eq!(product.eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn poly_compose_agrees_with_eval(
            a in small_poly(),
            b in small_poly(),
            x in small_coeff()
        ) {
            // (a ∘ b)(x) = a(b(x))
            let composed = a.compose(&b);
            prop_assert_eq!(composed.eval(&x), a.eval(&b.eval(&x)));
        }

        // Exponentiation

        #[test]
        fn poly_pow_matches_repeated_mul(a in small_poly(), n in 0i64..5) {
            let mut expected = Polynomial::one();
            for _ in 0..n {
                expected = expected.checked_mul(&a).unwrap();
            }
            prop_assert_eq!(a.checked_pow(n).unwrap(), expected);
        }
    }
}
