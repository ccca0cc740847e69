use std::collections::{BTreeMap, HashMap};

use tryjson::{JsonError, Value};

fn assert_invalid_type<T: std::fmt::Debug>(result: Result<T, JsonError>) {
    assert!(
        matches!(result, Err(JsonError::InvalidType(_))),
        "expected InvalidType, got {result:?}"
    );
}

#[test]
fn scalar_take_matrix() {
    let a = Value::string("hoge");
    assert_eq!(a.take::<String>().unwrap(), "hoge");
    assert_eq!(a.take_or_nil::<String>(), Some("hoge".to_string()));
    assert_invalid_type(a.take::<i64>());

    let b = Value::number(1.5);
    let bv: f64 = b.take().unwrap();
    assert!((bv - 1.5).abs() < f64::EPSILON);
    assert_invalid_type(b.take::<bool>());

    let c = Value::integer(1);
    assert_eq!(c.take::<i64>().unwrap(), 1);
    assert_eq!(c.take::<i32>().unwrap(), 1);
    assert_eq!(c.take::<isize>().unwrap(), 1);
    assert_eq!(c.take_or_nil::<i64>(), Some(1));
    assert_invalid_type(c.take::<String>());

    let d = Value::boolean(true);
    assert!(d.take::<bool>().unwrap());
    assert_eq!(d.take_or_nil::<bool>(), Some(true));
    assert_invalid_type(d.take::<String>());
    assert_invalid_type(d.take::<f64>());

    let e = Value::null();
    assert!(e.is_null());
    assert_invalid_type(e.take::<Vec<f64>>());
    assert_eq!(e.take_or_nil::<Vec<f64>>(), None);
}

#[test]
fn value_take_is_identity() {
    let v = Value::object([("a", Value::array([Value::null()]))]);
    assert_eq!(v.take::<Value>().unwrap(), v);
}

#[test]
fn array_take_preserves_order() {
    let f = Value::array([2, 3, 5, 7, 11].map(Value::integer));
    let fv: Vec<i64> = f.take().unwrap();
    assert_eq!(fv, vec![2, 3, 5, 7, 11]);
    assert_eq!(f.take_or_nil::<Vec<i64>>(), Some(vec![2, 3, 5, 7, 11]));
    assert_invalid_type(f.take::<HashMap<String, f64>>());
}

#[test]
fn map_take_keeps_all_keys() {
    let g = Value::object([("a", Value::integer(1)), ("b", Value::integer(2))]);
    let gv: HashMap<String, i64> = g.take().unwrap();
    let expected: HashMap<String, i64> =
        [("a".to_string(), 1), ("b".to_string(), 2)].into_iter().collect();
    assert_eq!(gv, expected);
    assert_eq!(g.take_or_nil::<HashMap<String, i64>>(), Some(expected));

    let sorted: BTreeMap<String, i64> = g.take().unwrap();
    assert_eq!(sorted.keys().collect::<Vec<_>>(), vec!["a", "b"]);

    assert_invalid_type(g.take::<Vec<String>>());
}

#[test]
fn map_take_fails_when_any_entry_fails() {
    let g = Value::object([("a", Value::integer(1)), ("b", Value::string("two"))]);
    assert_invalid_type(g.take::<HashMap<String, i64>>());
    assert_eq!(g.take_or_nil::<HashMap<String, i64>>(), None);
}

#[test]
fn key_navigation_matrix() {
    let obj = Value::object([("present", Value::integer(1))]);

    assert_eq!(obj.key("present").unwrap(), &Value::integer(1));
    assert!(matches!(obj.key("missing"), Err(JsonError::InvalidKey(_))));
    assert_eq!(obj.key_or_nil("missing"), None);

    for non_object in [
        Value::array([]),
        Value::integer(1),
        Value::string("s"),
        Value::boolean(true),
        Value::null(),
    ] {
        assert!(matches!(non_object.key("present"), Err(JsonError::InvalidType(_))));
        assert_eq!(non_object.key_or_nil("present"), None);
    }
}

#[test]
fn keyed_take_combines_key_and_take() {
    let v = Value::object([
        ("width", Value::integer(50)),
        ("provider", Value::array([Value::string("x")])),
        ("sizes", Value::object([("s", Value::integer(1))])),
    ]);
    assert_eq!(v.keyed_take::<i64>("width").unwrap(), 50);
    assert_eq!(v.keyed_take::<Vec<String>>("provider").unwrap(), vec!["x"]);
    assert_eq!(
        v.keyed_take::<HashMap<String, i64>>("sizes").unwrap()["s"],
        1
    );
    assert!(matches!(v.keyed_take::<i64>("height"), Err(JsonError::InvalidKey(_))));
    assert_invalid_type(v.keyed_take::<String>("width"));
}
