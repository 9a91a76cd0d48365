use xmlrpc_model::{Array, Fault, Request, Response, Struct, Value};

#[test]
fn nested_value_survives_serde() {
    let mut inner = Array::new();
    inner.push(Value::from(1));
    inner.push(Value::from("two"));

    let mut st = Struct::new();
    st.insert("items", Value::Array(inner));
    st.insert("count", 2);
    let value = Value::Struct(st);

    let json = serde_json::to_string(&value).expect("serialize");
    let decoded: Value = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, value);
}

#[test]
fn envelopes_survive_serde() {
    let request = Request::new("Calculator", "add", vec![Value::from(4), Value::from(2)]);
    let json = serde_json::to_string(&request).expect("serialize");
    let decoded: Request = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, request);

    let response = Response::from(Fault::new(4, "Bad request"));
    let json = serde_json::to_string(&response).expect("serialize");
    let decoded: Response = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, response);
}
