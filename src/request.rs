use std::collections::BTreeMap;
use std::fmt;

/// Request parameters keyed by name.
pub type ParamMap = BTreeMap<String, ParamValue>;

/// A request or protocol parameter value.
///
/// The platform accepts strings, numbers and booleans as request parameters;
/// every variant is rendered to its string form before percent-encoding, so
/// the same rendering feeds both the signature and the header.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// A string, used as-is.
    Str(String),
    /// An integer, rendered in decimal.
    Int(i64),
    /// A float, rendered in decimal with the `.0` kept on integral values
    /// (`37.0` renders as `37.0`).
    Float(f64),
    /// A boolean, rendered as `true` or `false`.
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(v) => f.write_str(v),
            ParamValue::Int(v) => write!(f, "{v}"),
            // Debug keeps the trailing .0 on integral floats, matching the
            // decimal form servers recompute the signature against.
            ParamValue::Float(v) => write!(f, "{v:?}"),
            ParamValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

/// Description of the request to sign.
///
/// The base URL must not carry a query string; every parameter goes through
/// `params` so that it takes part in the signature. Sending the actual
/// request is the caller's business.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// HTTP method, case-insensitive.
    pub method: String,
    /// API base URL, without query component.
    pub base_url: String,
    /// Request parameters, merged into the signature material.
    pub params: ParamMap,
}

impl Request {
    /// Create a request descriptor without parameters.
    pub fn new(method: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            base_url: base_url.into(),
            params: ParamMap::new(),
        }
    }

    /// Add a request parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}
