use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_every_supported_exponent_builds() {
    for m in MIN_FIELD_EXPONENT..=MAX_FIELD_EXPONENT {
        let field = Gf2m::new(m).unwrap();
        assert_eq!(field.m(), m);
        assert_eq!(field.order(), 1 << m);
        assert_eq!(field.pow(field.generator(), (field.order() - 1) as u64), 1);
    }
}

#[test]
fn test_unsupported_exponents() {
    for m in [0, 1, 17, 32] {
        assert!(matches!(Gf2m::new(m), Err(Error::Parameter { name: "m", .. })));
    }
}

#[test]
fn test_tables_match_schoolbook_multiplication() {
    let field = Gf2m::new(4).unwrap();
    for a in field.elements() {
        for b in field.elements() {
            let expected = mul_reduce(a as u32, b as u32, 4, field.polynomial()) as GfElement;
            assert_eq!(field.mul(a, b), expected, "{} * {}", a, b);
        }
    }

    let field = Gf2m::new(11).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    for _ in 0..2000 {
        let a = field.random_element(&mut rng);
        let b = field.random_element(&mut rng);
        let expected = mul_reduce(a as u32, b as u32, 11, field.polynomial()) as GfElement;
        assert_eq!(field.mul(a, b), expected);
    }
}

#[test]
fn test_field_laws() {
    let field = Gf2m::new(6).unwrap();
    for a in field.elements() {
        assert_eq!(field.add(a, 0), a);
        assert_eq!(field.add(a, a), 0);
        assert_eq!(field.mul(a, 1), a);
        assert_eq!(field.mul(a, 0), 0);
        for b in field.elements() {
            assert_eq!(field.add(a, b), field.add(b, a));
            assert_eq!(field.mul(a, b), field.mul(b, a));
        }
        if a != 0 {
            let inv = field.inv(a).unwrap();
            assert_eq!(field.mul(a, inv), 1);
            assert_eq!(field.inv_or_zero(a), inv);
        }
    }
    assert_eq!(field.inv_or_zero(0), 0);
}

#[test]
fn test_distributivity() {
    let field = Gf2m::new(5).unwrap();
    for a in field.elements() {
        for b in field.elements() {
            for c in [0, 1, 7, 19, 31] {
                assert_eq!(
                    field.mul(a, field.add(b, c)),
                    field.add(field.mul(a, b), field.mul(a, c))
                );
            }
        }
    }
}

#[test]
fn test_inverse_of_zero_is_domain_error() {
    let field = Gf2m::new(4).unwrap();
    assert!(matches!(field.inv(0), Err(Error::Domain { .. })));
    assert!(matches!(field.div(3, 0), Err(Error::Domain { .. })));
}

#[test]
fn test_division() {
    let field = Gf2m::new(8).unwrap();
    assert_eq!(field.div(0, 5).unwrap(), 0);
    for a in [1, 2, 77, 200, 255] {
        for b in [1, 3, 99, 254] {
            let q = field.div(a, b).unwrap();
            assert_eq!(field.mul(q, b), a);
        }
    }
}

#[test]
fn test_square_roots() {
    for m in [2, 4, 11] {
        let field = Gf2m::new(m).unwrap();
        for a in field.elements() {
            let r = field.sqrt(a);
            assert_eq!(field.square(r), a);
            assert_eq!(field.sqrt(field.square(a)), a);
        }
    }
}

#[test]
fn test_pow() {
    let field = Gf2m::new(10).unwrap();
    assert_eq!(field.pow(0, 0), 1);
    assert_eq!(field.pow(0, 5), 0);
    let a = 0x155;
    let mut acc = 1;
    for e in 0..20u64 {
        assert_eq!(field.pow(a, e), acc);
        acc = field.mul(acc, a);
    }
}

#[test]
#[should_panic]
fn test_mul_panics_on_unreduced_operand() {
    let field = Gf2m::new(4).unwrap();
    field.mul(3, 16);
}
