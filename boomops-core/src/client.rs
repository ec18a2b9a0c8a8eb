//! Client record model
//!
//! Records are persisted and merged at the JSON level (`serde_json::Map`) so
//! the permissive shallow-merge semantics survive: caller-supplied fields win
//! over defaults, unknown fields are kept as-is, and no validation schema is
//! applied. `ClientRecord` pins down the default shape of a fresh record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A client record as stored in the persisted document.
pub type ClientObject = Map<String, Value>;

/// The fixed set of product feature flags, all off by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureSet {
    pub ai_cs: bool,
    pub ai_sales: bool,
    pub crm: bool,
    pub tasks: bool,
    pub auto_msgs: bool,
    pub auto_tasks: bool,
    pub website: bool,
    pub direct_book: bool,
    pub store: bool,
    pub guest_exp: bool,
    pub reviews: bool,
    pub iot: bool,
    pub damage_waiver: bool,
}

/// The primary persisted business entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default = "default_mood")]
    pub mood: i64,
    #[serde(default)]
    pub risk_factor: f64,
    #[serde(default)]
    pub listings: i64,
    #[serde(default)]
    pub features: FeatureSet,
    #[serde(default)]
    pub notes: String,
}

fn default_status() -> String {
    "onboarding".to_string()
}

fn default_mood() -> i64 {
    3
}

impl ClientRecord {
    /// A fresh record with the given id and every other field defaulted.
    pub fn with_defaults(id: u64) -> Self {
        Self {
            id,
            name: String::new(),
            status: default_status(),
            product_type: None,
            mood: default_mood(),
            risk_factor: 0.0,
            listings: 0,
            features: FeatureSet::default(),
            notes: String::new(),
        }
    }

    /// The record as a JSON object, ready for merging.
    pub fn to_object(&self) -> ClientObject {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
