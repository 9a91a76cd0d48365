//! Wire vocabulary and the scalar factory
//!
//! The element names below are the fixed XML-RPC tag set; any serializer
//! or deserializer built on this model must use them verbatim for
//! interoperability. The scalar factory is the single place where a wire
//! tag is dispatched to a scalar kind — keep it exhaustive if kinds are
//! added.

use thiserror::Error;

use crate::value::Scalar;

pub const ARRAY: &str = "array";
pub const BASE_64: &str = "base64";
pub const BOOLEAN: &str = "boolean";
pub const DATA: &str = "data";
pub const DATE_TIME: &str = "dateTime.iso8601";
pub const DOUBLE: &str = "double";
pub const FAULT: &str = "fault";
pub const FAULT_CODE: &str = "faultCode";
pub const FAULT_STRING: &str = "faultString";
pub const I4: &str = "i4";
pub const INT: &str = "int";
pub const MEMBER: &str = "member";
pub const METHOD_NAME: &str = "methodName";
pub const METHOD_RESPONSE: &str = "methodResponse";
pub const NAME: &str = "name";
pub const PARAM: &str = "param";
pub const PARAMS: &str = "params";
pub const STRING: &str = "string";
pub const STRUCT: &str = "struct";
pub const VALUE: &str = "value";

/// Fatal construction errors, carrying the offending text or tag.
///
/// This channel is distinct from a coercion miss: malformed wire text
/// aborts the value being built, while a shape mismatch during coercion
/// is a soft `NoMatch` the caller may retry (see [`crate::coerce`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid boolean literal (expected \"0\" or \"1\"): {0:?}")]
    InvalidBoolean(String),

    #[error("Invalid integer literal: {0:?}")]
    InvalidInteger(String),

    #[error("Invalid double literal: {0:?}")]
    InvalidDouble(String),

    #[error("Invalid date/time literal: {0:?}")]
    InvalidDateTime(String),

    #[error("Invalid base64 literal: {0:?}")]
    InvalidBase64(String),

    #[error("Unexpected element: {0:?}")]
    UnexpectedElement(String),

    #[error("Method name is not qualified as \"service.method\": {0:?}")]
    UnqualifiedMethodName(String),

    #[error("Not a fault struct: {0}")]
    InvalidFault(String),
}

/// Create the scalar kind identified by `element_name` from its wire text.
///
/// `i4` and `int` are synonyms. An unrecognized element name is an
/// unexpected-element error, distinct from a malformed literal.
pub fn scalar(element_name: &str, text: &str) -> Result<Scalar, ParseError> {
    match element_name {
        BASE_64 => Scalar::parse_base64(text),
        BOOLEAN => Scalar::parse_bool(text),
        DATE_TIME => Scalar::parse_date_time(text),
        DOUBLE => Scalar::parse_double(text),
        I4 | INT => Scalar::parse_int(text),
        STRING => Ok(Scalar::from(text)),
        other => Err(ParseError::UnexpectedElement(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_dispatch_per_element_name() {
        assert_eq!(
            scalar(BOOLEAN, "1").expect("boolean"),
            Scalar::Bool(true)
        );
        assert_eq!(scalar(DOUBLE, "882.9").expect("double"), Scalar::Double(882.9));
        assert_eq!(scalar(I4, "34").expect("i4"), Scalar::Int(34));
        assert_eq!(scalar(INT, "34").expect("int"), Scalar::Int(34));
        assert_eq!(
            scalar(STRING, "Yoda").expect("string"),
            Scalar::String("Yoda".to_string())
        );
    }

    #[test]
    fn test_scalar_rejects_unknown_element_name() {
        assert_eq!(
            scalar("InvalidName", ""),
            Err(ParseError::UnexpectedElement("InvalidName".to_string()))
        );
        // Composite tags are not scalar kinds either.
        assert!(matches!(
            scalar(STRUCT, ""),
            Err(ParseError::UnexpectedElement(_))
        ));
    }

    #[test]
    fn test_malformed_literal_is_not_an_unexpected_element() {
        assert!(matches!(
            scalar(INT, "not-a-number"),
            Err(ParseError::InvalidInteger(_))
        ));
        assert!(matches!(
            scalar(DATE_TIME, "2005-06-20"),
            Err(ParseError::InvalidDateTime(_))
        ));
        assert!(matches!(
            scalar(BASE_64, "!!!"),
            Err(ParseError::InvalidBase64(_))
        ));
    }
}
