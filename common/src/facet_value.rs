//! Facet option values and the comparison type each facet declares.

use std::fmt::Display;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize, Deserialize, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum FacetValue {
    String(String),
    Int(u64),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FacetValueKind {
    String,
    Int,
}

impl FacetValue {
    pub fn kind(&self) -> FacetValueKind {
        match self {
            FacetValue::String(_) => FacetValueKind::String,
            FacetValue::Int(_) => FacetValueKind::Int,
        }
    }

    pub fn as_int(&self) -> Option<u64> {
        match self {
            FacetValue::Int(i) => Some(*i),
            FacetValue::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FacetValue::String(s) => Some(s.as_str()),
            FacetValue::Int(_) => None,
        }
    }

    pub fn display_string(&self) -> String {
        self.to_string()
    }
}

impl Display for FacetValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FacetValue::String(s) => write!(f, "{}", s),
            FacetValue::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for FacetValue {
    fn from(value: &str) -> Self {
        FacetValue::String(value.to_string())
    }
}

impl From<String> for FacetValue {
    fn from(value: String) -> Self {
        FacetValue::String(value)
    }
}

impl From<u64> for FacetValue {
    fn from(value: u64) -> Self {
        FacetValue::Int(value)
    }
}

impl FacetValueKind {
    /// Converts `value` into this kind. Returns `None` when the value has no
    /// representation in it, e.g. `"spring"` for an integer facet.
    pub fn normalize(self, value: FacetValue) -> Option<FacetValue> {
        match (self, value) {
            (FacetValueKind::String, value @ FacetValue::String(_)) => Some(value),
            (FacetValueKind::String, FacetValue::Int(i)) => Some(FacetValue::String(i.to_string())),
            (FacetValueKind::Int, value @ FacetValue::Int(_)) => Some(value),
            (FacetValueKind::Int, FacetValue::String(s)) => s.trim().parse::<u64>().ok().map(FacetValue::Int),
        }
    }
}
