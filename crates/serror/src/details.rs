use serde::Serialize;
use serde_json::Value;

use crate::lookup::what_kind;
use crate::{Kind, SError};

/// Internal, non client facing summary of an error chain. Suitable for
/// logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InternalDetails {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ops: Vec<String>,
    #[serde(skip_serializing_if = "Kind::is_unknown")]
    pub kind: Kind,
    pub error: String,
    /// A single payload as is, several as an array from outermost to
    /// innermost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl SError {
    /// Collect ops, the resolved kind, the rendered message and every
    /// payload along the structured chain.
    pub fn details(&self) -> InternalDetails {
        let mut data: Vec<Value> = self.layers().filter_map(|e| e.data.clone()).collect();
        let data = match data.len() {
            0 => None,
            1 => data.pop(),
            _ => Some(Value::Array(data)),
        };

        InternalDetails {
            ops: self.ops().into_iter().map(String::from).collect(),
            kind: what_kind(self),
            error: self.to_string(),
            data,
        }
    }
}
