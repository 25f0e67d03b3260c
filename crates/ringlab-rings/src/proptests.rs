//! Property-based tests for the concrete rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{DigitList, Fp, Q, Ring, Z};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Z::new(a);
            let b = Z::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_mul_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = Z::new(a);
            let b = Z::new(b);
            let c = Z::new(c);
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Z::new(a);
            let b = Z::new(b);
            let c = Z::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_additive_inverse(a in small_int()) {
            let a = Z::new(a);
            prop_assert_eq!(a.clone() + (-a), <Z as Ring>::zero());
        }

        #[test]
        fn integer_pow_is_repeated_mul(a in -20i64..20i64, n in 0u32..8u32) {
            let a = Z::new(a);
            let mut expected = <Z as Ring>::one();
            for _ in 0..n {
                expected = expected * a.clone();
            }
            prop_assert_eq!(a.pow(n), expected);
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Q::new(num_a, den_a);
            let b = Q::new(num_b, den_b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Q::new(num_a, den_a);
            let b = Q::new(num_b, den_b);
            let c = Q::new(num_c, den_c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        // Prime field properties

        #[test]
        fn fp_mul_commutative(a in 0u64..1000u64, b in 0u64..1000u64) {
            const P: u64 = 998_244_353;
            let a = Fp::<P>::new(a);
            let b = Fp::<P>::new(b);
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn fp_fermat_little_theorem(a in 1u64..1000u64) {
            const P: u64 = 998_244_353;
            let a = Fp::<P>::new(a);
            // a^(p-1) = 1 (mod p) for a != 0; exponent fits u32
            prop_assert_eq!(a.pow(u32::try_from(P - 1).unwrap()), <Fp<P> as Ring>::one());
        }

        // Digit list properties

        #[test]
        fn digit_list_mul_matches_carried(
            a in 0i64..10_000i64,
            b in 0i64..10_000i64
        ) {
            let da = DigitList::new(to_places(a));
            let db = DigitList::new(to_places(b));
            prop_assert_eq!((da * db).value(), i128::from(a) * i128::from(b));
        }

        #[test]
        fn digit_list_add_commutative(
            a in proptest::collection::vec(-50i64..50i64, 0..6),
            b in proptest::collection::vec(-50i64..50i64, 0..6)
        ) {
            let a = DigitList::new(a);
            let b = DigitList::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }
    }

    fn to_places(mut n: i64) -> Vec<i64> {
        let mut places = Vec::new();
        while n > 0 {
            places.push(n % 10);
            n /= 10;
        }
        places
    }
}
