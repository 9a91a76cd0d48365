//! Coercion of wire values to native target types
//!
//! Coercion flows top-down: the caller asks a value to match a target
//! type; composites recurse into their members or elements and
//! short-circuit on the first miss. A miss is reported through the
//! [`NoMatch`] soft-failure result, never through an error — callers use
//! it to try the next candidate target type (typically the next method
//! overload) without exception-style control flow. Malformed wire text is
//! a different channel entirely; see [`crate::wire::ParseError`].

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::value::{Array, Scalar, Struct, Value};

/// Soft-failure marker: the value's shape does not correspond to the
/// requested target type. Not an error, and never equal to a coerced
/// value — `Err(NoMatch)` is disjoint from every `Ok(T)` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoMatch;

/// Result of a coercion attempt.
pub type Match<T> = Result<T, NoMatch>;

/// Conversion from a wire value into a native target type.
///
/// Implementations must return `Err(NoMatch)` for any shape mismatch and
/// must never panic on well-formed values.
pub trait FromXmlRpc: Sized {
    fn from_value(value: &Value) -> Match<Self>;
}

impl Value {
    /// Attempt to coerce this value to the target type `T`.
    pub fn matches<T: FromXmlRpc>(&self) -> Match<T> {
        T::from_value(self)
    }
}

// ============================================================================
// Scalar targets
// ============================================================================

impl FromXmlRpc for bool {
    fn from_value(value: &Value) -> Match<Self> {
        match value {
            Value::Scalar(Scalar::Bool(v)) => Ok(*v),
            _ => Err(NoMatch),
        }
    }
}

impl FromXmlRpc for f64 {
    fn from_value(value: &Value) -> Match<Self> {
        match value {
            Value::Scalar(Scalar::Double(v)) => Ok(*v),
            _ => Err(NoMatch),
        }
    }
}

impl FromXmlRpc for i32 {
    fn from_value(value: &Value) -> Match<Self> {
        match value {
            Value::Scalar(Scalar::Int(v)) => Ok(*v),
            _ => Err(NoMatch),
        }
    }
}

/// A 64-bit integer target accepts a widened 32-bit wire integer, or a
/// wire string whose text parses as an integer (the wire form for 64-bit
/// integers). A non-numeric string is a miss, not a parsing error.
impl FromXmlRpc for i64 {
    fn from_value(value: &Value) -> Match<Self> {
        match value {
            Value::Scalar(Scalar::Int(v)) => Ok(i64::from(*v)),
            Value::Scalar(Scalar::String(text)) => text.parse().map_err(|_| NoMatch),
            _ => Err(NoMatch),
        }
    }
}

impl FromXmlRpc for String {
    fn from_value(value: &Value) -> Match<Self> {
        match value {
            Value::Scalar(Scalar::String(v)) => Ok(v.clone()),
            _ => Err(NoMatch),
        }
    }
}

impl FromXmlRpc for NaiveDateTime {
    fn from_value(value: &Value) -> Match<Self> {
        match value {
            Value::Scalar(Scalar::DateTime(v)) => Ok(*v),
            _ => Err(NoMatch),
        }
    }
}

/// Byte-array target for base64 scalars.
///
/// This newtype exists to keep the blanket `Vec<T>` implementation
/// coherent: a `Vec<u8>` impl would overlap with it, so byte payloads get
/// their own carrier (the same shape serde takes with `ByteBuf`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromXmlRpc for Bytes {
    fn from_value(value: &Value) -> Match<Self> {
        match value {
            Value::Scalar(Scalar::Base64(v)) => Ok(Bytes(v.clone())),
            _ => Err(NoMatch),
        }
    }
}

/// Identity coercion: any scalar matches, carrying its raw payload. This
/// is the element type for heterogeneous collection and map targets.
impl FromXmlRpc for Scalar {
    fn from_value(value: &Value) -> Match<Self> {
        match value {
            Value::Scalar(s) => Ok(s.clone()),
            _ => Err(NoMatch),
        }
    }
}

// ============================================================================
// Composite targets
// ============================================================================

/// Array-to-array coercion, recursive so arrays of arrays work. Any
/// element miss fails the whole match; order and length are preserved.
///
/// With `T = Scalar` this is exactly the ordered-collection rule: every
/// element must be a scalar, and the result holds their raw payloads.
impl<T: FromXmlRpc> FromXmlRpc for Vec<T> {
    fn from_value(value: &Value) -> Match<Self> {
        match value {
            Value::Array(array) => array
                .elements()
                .iter()
                .map(T::from_value)
                .collect(),
            _ => Err(NoMatch),
        }
    }
}

/// Struct-to-map coercion. Every member value must be a scalar; a single
/// composite member fails the whole match. A duplicate member name keeps
/// the later value.
impl FromXmlRpc for HashMap<String, Scalar> {
    fn from_value(value: &Value) -> Match<Self> {
        match value {
            Value::Struct(st) => st.to_map(),
            _ => Err(NoMatch),
        }
    }
}

/// Field-introspection capability for record targets.
///
/// A record type describes its own writable fields and performs the
/// per-field sub-coercion itself, normally by delegating to
/// [`FromXmlRpc`] for the field's declared type:
///
/// ```
/// use xmlrpc_model::{FromXmlRpc, Match, NoMatch, RecordBinding, Value};
///
/// #[derive(Default)]
/// struct Person {
///     name: String,
///     age: i32,
/// }
///
/// impl RecordBinding for Person {
///     fn has_field(name: &str) -> bool {
///         matches!(name, "name" | "age")
///     }
///
///     fn bind_field(&mut self, name: &str, value: &Value) -> Match<()> {
///         match name {
///             "name" => self.name = String::from_value(value)?,
///             "age" => self.age = i32::from_value(value)?,
///             _ => return Err(NoMatch),
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait RecordBinding: Default {
    /// Whether a writable field with this exact name exists.
    fn has_field(name: &str) -> bool;

    /// Coerce `value` to the field's declared type and assign it.
    /// Returns `Err(NoMatch)` if the field is unknown or the value does
    /// not coerce.
    fn bind_field(&mut self, name: &str, value: &Value) -> Match<()>;
}

impl Struct {
    /// Coerce this struct to a map from member name to raw scalar
    /// payload. See the [`HashMap`] impl of [`FromXmlRpc`].
    pub fn to_map(&self) -> Match<HashMap<String, Scalar>> {
        let mut map = HashMap::with_capacity(self.len());
        for member in self.members() {
            match &member.value {
                Value::Scalar(scalar) => {
                    map.insert(member.name.clone(), scalar.clone());
                }
                _ => return Err(NoMatch),
            }
        }
        Ok(map)
    }

    /// Coerce this struct to a record of type `R`.
    ///
    /// Members are bound in order. The whole match fails on the first
    /// member whose name has no writable field on `R`, or whose value
    /// does not coerce to the field's declared type — there is no
    /// ignore-unknown-members fallback. On failure the scratch instance
    /// is dropped, so a partially-populated record is never observable.
    /// An empty struct yields `R::default()`.
    pub fn to_record<R: RecordBinding>(&self) -> Match<R> {
        let mut record = R::default();
        for member in self.members() {
            if !R::has_field(&member.name) {
                return Err(NoMatch);
            }
            record.bind_field(&member.name, &member.value)?;
        }
        Ok(record)
    }
}

impl Array {
    /// Coerce this array to an ordered collection of raw scalar payloads.
    /// Fails if any element is a nested array or struct.
    pub fn to_collection(&self) -> Match<Vec<Scalar>> {
        self.elements().iter().map(Scalar::from_value).collect()
    }
}
