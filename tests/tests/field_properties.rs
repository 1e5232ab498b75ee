//! Property-based tests for GF(2^m) arithmetic

use std::sync::OnceLock;

use mecs_algorithms::{Error, Gf2m, GfElement};
use proptest::prelude::*;

fn fields() -> &'static [Gf2m] {
    static FIELDS: OnceLock<Vec<Gf2m>> = OnceLock::new();
    FIELDS.get_or_init(|| {
        (2..=16)
            .map(|m| Gf2m::new(m).expect("supported field"))
            .collect()
    })
}

/// A field together with three of its elements
fn field_and_elements() -> impl Strategy<Value = (&'static Gf2m, GfElement, GfElement, GfElement)> {
    (0..fields().len(), any::<u16>(), any::<u16>(), any::<u16>()).prop_map(|(i, a, b, c)| {
        let field = &fields()[i];
        let mask = (field.order() - 1) as GfElement;
        (field, a & mask, b & mask, c & mask)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn addition_laws((field, a, b, _) in field_and_elements()) {
        prop_assert_eq!(field.add(a, b), field.add(b, a));
        prop_assert_eq!(field.add(a, 0), a);
        prop_assert_eq!(field.add(a, a), 0);
    }

    #[test]
    fn multiplication_laws((field, a, b, c) in field_and_elements()) {
        prop_assert_eq!(field.mul(a, b), field.mul(b, a));
        prop_assert_eq!(field.mul(field.mul(a, b), c), field.mul(a, field.mul(b, c)));
        prop_assert_eq!(
            field.mul(a, field.add(b, c)),
            field.add(field.mul(a, b), field.mul(a, c))
        );
        prop_assert_eq!(field.mul(a, 1), a);
        prop_assert_eq!(field.mul(a, 0), 0);
        prop_assert!(field.contains(field.mul(a, b)));
    }

    #[test]
    fn inverse_and_division((field, a, b, _) in field_and_elements()) {
        prop_assume!(a != 0);
        let inv = field.inv(a).unwrap();
        prop_assert_eq!(field.mul(a, inv), 1);
        prop_assert_eq!(field.mul(field.div(b, a).unwrap(), a), b);
    }

    #[test]
    fn square_root_inverts_squaring((field, a, _, _) in field_and_elements()) {
        prop_assert_eq!(field.sqrt(field.square(a)), a);
        prop_assert_eq!(field.square(field.sqrt(a)), a);
    }

    #[test]
    fn fermat((field, a, _, _) in field_and_elements()) {
        prop_assert_eq!(field.pow(a, field.order() as u64), a);
    }
}

#[test]
fn inverse_of_zero_is_a_domain_error() {
    for field in fields() {
        assert!(matches!(field.inv(0), Err(Error::Domain { .. })));
        assert!(matches!(field.div(1, 0), Err(Error::Domain { .. })));
    }
}

#[test]
fn unsupported_exponents() {
    for m in [0, 1, 17, 32] {
        assert!(matches!(Gf2m::new(m), Err(Error::Parameter { .. })));
    }
}
