//! xmlrpc-model: the XML-RPC value model and type-coercion engine
//!
//! This crate represents wire-level XML-RPC values and converts between
//! that untyped representation and statically-typed native values. The
//! XML text codec and the transport live elsewhere; they drive this model
//! through the scalar factory and the composite builders while parsing,
//! and through the wire-text renderers while serializing.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │              xmlrpc-model                  │
//! │                                            │
//! │  value    - scalars, arrays, structs       │
//! │  wire     - tag vocabulary, scalar factory │
//! │  coerce   - wire value -> native target    │
//! │  envelope - request / response / fault     │
//! │                                            │
//! ├────────────────────────────────────────────┤
//! │   XML codec + transport (out of scope)     │
//! └────────────────────────────────────────────┘
//! ```
//!
//! ## Failure channels
//!
//! Malformed wire text (a boolean that is not `"0"`/`"1"`, a non-numeric
//! integer literal, an unknown tag) is fatal and surfaces as a
//! [`ParseError`]. A structurally well-formed value that merely does not
//! fit a requested target type is a soft [`NoMatch`], so a dispatcher can
//! try the next candidate signature:
//!
//! ```
//! use xmlrpc_model::{NoMatch, Value};
//!
//! let wide = Value::from(123_456_789_012i64); // travels as a string
//! assert_eq!(wide.matches::<i64>(), Ok(123_456_789_012));
//! assert_eq!(Value::from("abc").matches::<i64>(), Err(NoMatch));
//! ```

pub mod coerce;
pub mod envelope;
pub mod value;
pub mod wire;

pub use coerce::{Bytes, FromXmlRpc, Match, NoMatch, RecordBinding};
pub use envelope::{Fault, Request, Response};
pub use value::{Array, Member, Scalar, Struct, Value, DATE_TIME_PATTERN};
pub use wire::ParseError;
