use chrono::{NaiveDate, NaiveDateTime};
use xmlrpc_model::{Bytes, NoMatch, Scalar, Value};

#[test]
fn int_matches_i32_and_widens_to_i64() {
    let value = Value::from(42);
    assert_eq!(value.matches::<i32>(), Ok(42));
    assert_eq!(value.matches::<i64>(), Ok(42i64));
}

#[test]
fn string_matches_i64_only_when_numeric() {
    assert_eq!(
        Value::from("123456789012").matches::<i64>(),
        Ok(123_456_789_012)
    );
    // A non-numeric string is a soft miss, never a parse error.
    assert_eq!(Value::from("abc").matches::<i64>(), Err(NoMatch));
}

#[test]
fn string_always_matches_string() {
    assert_eq!(
        Value::from("abc").matches::<String>(),
        Ok("abc".to_string())
    );
    assert_eq!(
        Value::from("123456789012").matches::<String>(),
        Ok("123456789012".to_string())
    );
}

#[test]
fn bool_matches_bool_only() {
    let value = Value::from(true);
    assert_eq!(value.matches::<bool>(), Ok(true));
    assert_eq!(value.matches::<i32>(), Err(NoMatch));
    assert_eq!(value.matches::<String>(), Err(NoMatch));
}

#[test]
fn double_matches_float_target_only() {
    let value = Value::from(882.9);
    assert_eq!(value.matches::<f64>(), Ok(882.9));
    assert_eq!(value.matches::<i32>(), Err(NoMatch));
}

#[test]
fn int_does_not_match_string_or_double() {
    let value = Value::from(42);
    assert_eq!(value.matches::<String>(), Err(NoMatch));
    assert_eq!(value.matches::<f64>(), Err(NoMatch));
}

#[test]
fn datetime_matches_datetime_target() {
    let date = NaiveDate::from_ymd_opt(2005, 6, 20)
        .expect("date")
        .and_hms_opt(14, 8, 55)
        .expect("time");
    let value = Value::from(date);
    assert_eq!(value.matches::<NaiveDateTime>(), Ok(date));
    assert_eq!(value.matches::<String>(), Err(NoMatch));
}

#[test]
fn base64_matches_byte_target_only() {
    let value = Value::from(vec![0u8, 2, 6, 4]);
    assert_eq!(value.matches::<Bytes>(), Ok(Bytes(vec![0, 2, 6, 4])));
    assert_eq!(value.matches::<String>(), Err(NoMatch));
}

#[test]
fn any_scalar_matches_scalar_identity() {
    assert_eq!(
        Value::from(true).matches::<Scalar>(),
        Ok(Scalar::Bool(true))
    );
    assert_eq!(
        Value::Array(xmlrpc_model::Array::new()).matches::<Scalar>(),
        Err(NoMatch)
    );
}

#[test]
fn composites_do_not_match_scalar_targets() {
    let value = Value::Struct(xmlrpc_model::Struct::new());
    assert_eq!(value.matches::<i32>(), Err(NoMatch));
    assert_eq!(value.matches::<bool>(), Err(NoMatch));
    assert_eq!(value.matches::<String>(), Err(NoMatch));
}
