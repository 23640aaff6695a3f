use serde_keycase::{snake_to_camel, value, Number, Value, ValueMap};

#[test]
fn test_macro_null() {
    assert_eq!(value!(null), Value::Null);
}

#[test]
fn test_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_macro_numbers() {
    assert_eq!(value!(0), Value::Number(Number::Integer(0)));
    assert_eq!(value!(-17), Value::Number(Number::Integer(-17)));
    assert_eq!(value!(2.25), Value::Number(Number::Float(2.25)));
}

#[test]
fn test_macro_strings() {
    assert_eq!(value!("hello"), Value::String("hello".to_string()));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_macro_empty_collections() {
    assert_eq!(value!([]), Value::Array(vec![]));
    assert_eq!(value!({}), Value::Object(ValueMap::new()));
}

#[test]
fn test_macro_mixed_array() {
    let arr = value!([1, "two", true, null, [3]]);
    match arr {
        Value::Array(vec) => {
            assert_eq!(vec.len(), 5);
            assert_eq!(vec[0], Value::Number(Number::Integer(1)));
            assert_eq!(vec[1], Value::String("two".to_string()));
            assert_eq!(vec[2], Value::Bool(true));
            assert_eq!(vec[3], Value::Null);
            assert_eq!(
                vec[4],
                Value::Array(vec![Value::Number(Number::Integer(3))])
            );
        }
        _ => panic!("Expected array"),
    }
}

#[test]
fn test_macro_nested_object() {
    let obj = value!({
        "user_id": 7,
        "profile": {
            "first_name": "Ada",
            "tags": ["coach"]
        }
    });

    let map = obj.as_object().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("user_id").and_then(Value::as_i64), Some(7));

    let profile = map.get("profile").and_then(Value::as_object).unwrap();
    assert_eq!(
        profile.get("first_name").and_then(Value::as_str),
        Some("Ada")
    );
}

#[test]
fn test_macro_trailing_commas() {
    let obj = value!({
        "a_key": 1,
        "b_key": 2,
    });
    assert_eq!(obj.as_object().unwrap().len(), 2);

    let arr = value!([1, 2, 3,]);
    assert_eq!(arr.as_array().unwrap().len(), 3);
}

#[test]
fn test_macro_output_feeds_converter() {
    let row = value!({ "user_id": 7 });
    assert_eq!(snake_to_camel(&row), value!({ "userId": 7 }));
}
