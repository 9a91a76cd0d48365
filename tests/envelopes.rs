use xmlrpc_model::{Fault, ParseError, Request, Response, Value};

#[test]
fn qualified_name_splits_at_first_dot() {
    let request = Request::from_qualified_name("Calculator.add", vec![Value::from(4)])
        .expect("request");
    assert_eq!(request.service_name(), "Calculator");
    assert_eq!(request.method_name(), "add");
    assert_eq!(request.parameters(), &[Value::from(4)]);
    assert_eq!(request.qualified_name(), "Calculator.add");
}

#[test]
fn only_the_first_dot_splits() {
    let request = Request::from_qualified_name("Calculator.add.checked", vec![])
        .expect("request");
    assert_eq!(request.service_name(), "Calculator");
    assert_eq!(request.method_name(), "add.checked");
}

#[test]
fn unqualified_name_fails_fast() {
    assert_eq!(
        Request::from_qualified_name("NoDot", vec![]),
        Err(ParseError::UnqualifiedMethodName("NoDot".to_string()))
    );
}

#[test]
fn response_payloads_are_mutually_exclusive() {
    let success = Response::Success(vec![Value::from("ok")]);
    assert!(!success.is_fault());
    assert_eq!(success.parameters(), Some(&[Value::from("ok")][..]));
    assert_eq!(success.fault(), None);

    let failure = Response::from(Fault::new(4, "Bad request"));
    assert!(failure.is_fault());
    assert_eq!(failure.parameters(), None);
    assert_eq!(failure.fault(), Some(&Fault::new(4, "Bad request")));
}

#[test]
fn fault_equality_is_structural() {
    assert_eq!(Fault::new(4, "Bad request"), Fault::new(4, "Bad request"));
    assert_ne!(Fault::new(4, "Bad request"), Fault::new(4, "Other"));
    assert_ne!(Fault::new(4, "Bad request"), Fault::new(5, "Bad request"));
}

#[test]
fn fault_struct_form_round_trips() {
    let fault = Fault::new(4, "Bad request");
    let recovered = Fault::from_struct(&fault.to_struct()).expect("from_struct");
    assert_eq!(recovered, fault);
    assert_eq!(recovered.code(), 4);
    assert_eq!(recovered.message(), "Bad request");
}
