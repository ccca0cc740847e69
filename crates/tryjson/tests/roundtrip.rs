use proptest::prelude::*;
use tryjson::{is_valid_json_object, parse, render, Value};

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::null()),
        any::<bool>().prop_map(Value::boolean),
        (-(1_i64 << 53)..=(1_i64 << 53)).prop_map(Value::integer),
        (prop::num::f64::NORMAL | prop::num::f64::ZERO).prop_map(Value::number),
        any::<String>().prop_map(Value::string),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::array),
            prop::collection::vec(("[a-z]{0,6}", inner), 0..8).prop_map(Value::object),
        ]
    })
}

proptest! {
    #[test]
    fn render_then_parse_is_identity(v in arb_value()) {
        let bytes = render(&v).expect("finite values always render");
        let back = parse(&bytes).expect("rendered output parses");
        prop_assert_eq!(back, v);
    }

    #[test]
    fn containers_of_finite_values_are_valid(items in prop::collection::vec(arb_value(), 0..4)) {
        prop_assert!(is_valid_json_object(&Value::array(items)));
    }
}

#[test]
fn roundtrip_fixed_document() {
    let v = Value::object([
        ("title", Value::string("天気 \"予報\"\n")),
        ("numbers", Value::array([
            Value::integer(0),
            Value::integer(-42),
            Value::number(0.1),
            Value::number(1e300),
            Value::number(-2.5e-8),
        ])),
        ("flags", Value::array([Value::boolean(true), Value::boolean(false)])),
        ("nothing", Value::null()),
        ("nested", Value::object([("empty", Value::object::<&str, _>([]))])),
    ]);
    let bytes = render(&v).unwrap();
    assert_eq!(parse(&bytes).unwrap(), v);
}
