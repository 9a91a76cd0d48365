//! Wire values
//!
//! The value model mirrors the XML-RPC wire vocabulary: six scalar kinds,
//! ordered arrays, and ordered structs of named members. Values are built
//! bottom-up by a parser (scalars first, composites nest them) and are
//! read-only once handed to a consumer; mutation is only possible through
//! `&mut` builder operations, so a shared reference is a frozen tree.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::wire::{self, ParseError};

/// Wire date-time pattern: `yyyyMMdd'T'HH:mm:ss`, second precision,
/// no timezone. Sub-second precision is lost on a round trip.
pub const DATE_TIME_PATTERN: &str = "%Y%m%dT%H:%M:%S";

/// An atomic wire value.
///
/// `String` doubles as the wire representation for 64-bit integers:
/// XML-RPC has no native tag for them, so they travel as text and are
/// recovered by the coercion engine when the target asks for an `i64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Bool(bool),
    Double(f64),
    Int(i32),
    String(String),
    DateTime(NaiveDateTime),
    Base64(Vec<u8>),
}

impl Scalar {
    /// Parse a `<boolean>` literal. The wire encoding is exactly `"0"` or
    /// `"1"`; anything else is malformed.
    pub fn parse_bool(text: &str) -> Result<Self, ParseError> {
        match text {
            "1" => Ok(Scalar::Bool(true)),
            "0" => Ok(Scalar::Bool(false)),
            other => Err(ParseError::InvalidBoolean(other.to_string())),
        }
    }

    /// Parse a `<double>` literal.
    pub fn parse_double(text: &str) -> Result<Self, ParseError> {
        text.parse::<f64>()
            .map(Scalar::Double)
            .map_err(|_| ParseError::InvalidDouble(text.to_string()))
    }

    /// Parse an `<i4>`/`<int>` literal (32-bit range).
    pub fn parse_int(text: &str) -> Result<Self, ParseError> {
        text.parse::<i32>()
            .map(Scalar::Int)
            .map_err(|_| ParseError::InvalidInteger(text.to_string()))
    }

    /// Parse a `<dateTime.iso8601>` literal.
    pub fn parse_date_time(text: &str) -> Result<Self, ParseError> {
        NaiveDateTime::parse_from_str(text, DATE_TIME_PATTERN)
            .map(Scalar::DateTime)
            .map_err(|_| ParseError::InvalidDateTime(text.to_string()))
    }

    /// Parse a `<base64>` literal.
    pub fn parse_base64(text: &str) -> Result<Self, ParseError> {
        STANDARD
            .decode(text)
            .map(Scalar::Base64)
            .map_err(|_| ParseError::InvalidBase64(text.to_string()))
    }

    /// The wire element name identifying this kind.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => wire::BOOLEAN,
            Scalar::Double(_) => wire::DOUBLE,
            Scalar::Int(_) => wire::INT,
            Scalar::String(_) => wire::STRING,
            Scalar::DateTime(_) => wire::DATE_TIME,
            Scalar::Base64(_) => wire::BASE_64,
        }
    }

    /// Render this scalar as wire text. Re-parsing the text through the
    /// factory with `wire_name()` yields an equal scalar.
    pub fn wire_text(&self) -> String {
        match self {
            Scalar::Bool(true) => "1".to_string(),
            Scalar::Bool(false) => "0".to_string(),
            Scalar::Double(v) => v.to_string(),
            Scalar::Int(v) => v.to_string(),
            Scalar::String(v) => v.clone(),
            Scalar::DateTime(v) => v.format(DATE_TIME_PATTERN).to_string(),
            Scalar::Base64(v) => STANDARD.encode(v),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Scalar::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Scalar::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            Scalar::DateTime(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Scalar::Base64(v) => Some(v),
            _ => None,
        }
    }
}

/// A wire value: a scalar, or a composite that owns its children outright.
/// There are no back-references or shared sub-trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Scalar(Scalar),
    Array(Array),
    Struct(Struct),
}

impl Value {
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Struct> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }
}

/// An ordered sequence of values. Heterogeneous: no element-type
/// constraint at construction time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Array {
    elements: Vec<Value>,
}

impl Array {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Append an element (builder phase).
    pub fn push(&mut self, element: impl Into<Value>) {
        self.elements.push(element.into());
    }

    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// A member of a struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub value: Value,
}

impl Member {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An ordered sequence of named members.
///
/// Member names are not required to be unique and order is preserved; it
/// is observable through map and record coercion, where a later duplicate
/// overwrites an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Struct {
    members: Vec<Member>,
}

impl Struct {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Append a member by name (builder phase).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.members.push(Member::new(name, value));
    }

    /// Append an already-built member (builder phase).
    pub fn push(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// First member with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members
            .iter()
            .find(|member| member.name == name)
            .map(|member| &member.value)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

// From implementations for wrapping
impl From<Scalar> for Value {
    fn from(v: Scalar) -> Self {
        Value::Scalar(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Value::Array(v)
    }
}

impl From<Struct> for Value {
    fn from(v: Struct) -> Self {
        Value::Struct(v)
    }
}

// From implementations for native payloads. These mirror the element
// factory on the serializing side: a native value picks the wire kind
// that carries it.
impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Double(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Double(f64::from(v))
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v)
    }
}

impl From<i16> for Scalar {
    fn from(v: i16) -> Self {
        Scalar::Int(i32::from(v))
    }
}

// XML-RPC has no 64-bit integer tag; wide integers travel as strings.
impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::String(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::String(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_string())
    }
}

impl From<char> for Scalar {
    fn from(v: char) -> Self {
        Scalar::String(v.to_string())
    }
}

impl From<NaiveDateTime> for Scalar {
    fn from(v: NaiveDateTime) -> Self {
        Scalar::DateTime(v)
    }
}

impl From<Vec<u8>> for Scalar {
    fn from(v: Vec<u8>) -> Self {
        Scalar::Base64(v)
    }
}

impl From<&[u8]> for Scalar {
    fn from(v: &[u8]) -> Self {
        Scalar::Base64(v.to_vec())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Scalar(Scalar::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Scalar(Scalar::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Scalar(Scalar::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Scalar(Scalar::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Scalar(Scalar::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Scalar(Scalar::from(v))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Scalar(Scalar::from(v))
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Scalar(Scalar::from(v))
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        let mut array = Array::new();
        for element in elements {
            array.push(element);
        }
        Value::Array(array)
    }
}
