// tessera-value - Property-based tests for values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Property-based tests for value extraction, equality and ordering.

use proptest::prelude::*;
use tessera_value::{Array, Error, Tag, Value, from_value, set_print_length, to_value};

// =============================================================================
// Strategies for generating values
// =============================================================================

/// Generate scalar values of every orderable tag, plus unit and bool
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::unit()),
        any::<bool>().prop_map(Value::bool),
        any::<i64>().prop_map(Value::int),
        any::<f64>().prop_map(Value::float),
        "[a-z]{0,8}".prop_map(Value::string),
    ]
}

/// Generate shallow arrays of scalars
fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(2, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::array)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Equality is reflexive, NaN included
    #[test]
    fn equality_reflexive(v in arb_value()) {
        prop_assert_eq!(&v, &v.clone());
    }

    /// An int extracts as i64 and as nothing else numeric
    #[test]
    fn int_extraction_is_tag_exact(n in any::<i64>()) {
        let v = to_value(n);
        prop_assert_eq!(from_value::<i64>(&v), Ok(n));
        prop_assert_eq!(
            from_value::<f64>(&v),
            Err(Error::type_error(Tag::Float, Tag::Int))
        );
        prop_assert_eq!(
            from_value::<Array>(&v),
            Err(Error::type_error(Tag::Array, Tag::Int))
        );
    }

    /// compare is antisymmetric for ints and strings
    #[test]
    fn compare_antisymmetric(a in any::<i64>(), b in any::<i64>(), s in "[a-z]{0,5}", t in "[a-z]{0,5}") {
        let (x, y) = (Value::int(a), Value::int(b));
        prop_assert_eq!(x.compare(&y).unwrap(), y.compare(&x).unwrap().reverse());
        let (x, y) = (Value::string(s), Value::string(t));
        prop_assert_eq!(x.compare(&y).unwrap(), y.compare(&x).unwrap().reverse());
    }

    /// Values of different tags are never equal and never ordered
    #[test]
    fn cross_tag_values_differ(n in any::<i64>(), s in "[a-z]{0,5}") {
        let (x, y) = (Value::int(n), Value::string(s));
        prop_assert_ne!(&x, &y);
        prop_assert_eq!(
            x.compare(&y),
            Err(Error::type_error_in("compare", Tag::Int, Tag::String))
        );
    }

    /// Print length bounds the rendered elements
    #[test]
    fn print_length_truncates(ns in prop::collection::vec(0i64..10, 0..10), limit in 0usize..5) {
        let v = Value::array(ns.iter().copied().map(Value::int));
        let previous = set_print_length(Some(limit));
        let shown = v.to_string();
        set_print_length(previous);

        let digits = shown.chars().filter(char::is_ascii_digit).count();
        prop_assert_eq!(digits, ns.len().min(limit));
        prop_assert_eq!(shown.contains("..."), ns.len() > limit);
    }
}
