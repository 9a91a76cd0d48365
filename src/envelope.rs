//! Request and response envelopes
//!
//! Top-level messages wrapping the value model: a request names a service
//! method and carries ordered parameters; a response carries either
//! ordered parameters or a fault, never both. The coercion engine never
//! manufactures a fault — translating a parse error or an unmatched
//! signature into one is the dispatcher's job.

use serde::{Deserialize, Serialize};

use crate::value::{Scalar, Struct, Value};
use crate::wire::{self, ParseError};

/// A remote method call: service name, method name, ordered parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    service_name: String,
    method_name: String,
    parameters: Vec<Value>,
}

impl Request {
    pub fn new(
        service_name: impl Into<String>,
        method_name: impl Into<String>,
        parameters: Vec<Value>,
    ) -> Self {
        Self {
            service_name: service_name.into(),
            method_name: method_name.into(),
            parameters,
        }
    }

    /// Build a request from a `"service.method"` name, split at the
    /// first `.`. A name without any `.` fails fast with a parse error.
    ///
    /// The split is not recursive; a method name with a leading dot is
    /// not representable through this constructor.
    pub fn from_qualified_name(
        qualified_name: &str,
        parameters: Vec<Value>,
    ) -> Result<Self, ParseError> {
        match qualified_name.split_once('.') {
            Some((service_name, method_name)) => {
                Ok(Self::new(service_name, method_name, parameters))
            }
            None => Err(ParseError::UnqualifiedMethodName(
                qualified_name.to_string(),
            )),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn parameters(&self) -> &[Value] {
        &self.parameters
    }

    /// The `"service.method"` form used by the `methodName` wire element.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.service_name, self.method_name)
    }
}

/// The result of a remote call: either ordered parameters or a fault.
/// The two payload forms are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Response {
    Success(Vec<Value>),
    Fault(Fault),
}

impl Response {
    pub fn is_fault(&self) -> bool {
        matches!(self, Response::Fault(_))
    }

    /// The parameters of a successful response, if this is one.
    pub fn parameters(&self) -> Option<&[Value]> {
        match self {
            Response::Success(parameters) => Some(parameters),
            Response::Fault(_) => None,
        }
    }

    pub fn fault(&self) -> Option<&Fault> {
        match self {
            Response::Success(_) => None,
            Response::Fault(fault) => Some(fault),
        }
    }
}

impl From<Fault> for Response {
    fn from(fault: Fault) -> Self {
        Response::Fault(fault)
    }
}

/// A failed remote call: numeric code plus message.
///
/// On the wire a fault is the fixed two-member struct
/// `{faultCode, faultString}`; equality and hashing over the code and
/// message are the structural equality of that struct form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fault {
    code: i32,
    message: String,
}

impl Fault {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The canonical wire struct form of this fault.
    pub fn to_struct(&self) -> Struct {
        let mut st = Struct::new();
        st.insert(wire::FAULT_CODE, Scalar::Int(self.code));
        st.insert(wire::FAULT_STRING, Scalar::String(self.message.clone()));
        st
    }

    /// Recover a fault from its wire struct form.
    pub fn from_struct(st: &Struct) -> Result<Self, ParseError> {
        let code = match st.get(wire::FAULT_CODE) {
            Some(Value::Scalar(Scalar::Int(code))) => *code,
            _ => {
                return Err(ParseError::InvalidFault(format!(
                    "missing or non-integer {} member",
                    wire::FAULT_CODE
                )))
            }
        };
        let message = match st.get(wire::FAULT_STRING) {
            Some(Value::Scalar(Scalar::String(message))) => message.clone(),
            _ => {
                return Err(ParseError::InvalidFault(format!(
                    "missing or non-string {} member",
                    wire::FAULT_STRING
                )))
            }
        };
        Ok(Self { code, message })
    }
}
