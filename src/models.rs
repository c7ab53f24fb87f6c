//! Frontend Models
//!
//! Task record as served by the remote todo endpoint.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use uuid::Uuid;

/// Task data structure (matches the remote JSON shape)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    /// Opaque identifier; numeric remote ids are kept as their decimal string
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub title: String,
    pub completed: bool,
    #[serde(rename = "userId", deserialize_with = "opaque_id")]
    pub user_id: String,
}

impl Task {
    /// Build a locally created task. The generated id doubles as `user_id`.
    pub fn new_local(title: impl Into<String>, completed: bool) -> Self {
        let id = Uuid::new_v4().to_string();
        Self {
            user_id: id.clone(),
            id,
            title: title.into(),
            completed,
        }
    }
}

/// Accept either a JSON number or a string for id-like fields
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct OpaqueIdVisitor;

    impl<'de> Visitor<'de> for OpaqueIdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or integer identifier")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        // JS numbers arrive as f64 through serde-wasm-bindgen
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            if v.fract() == 0.0 && v.is_finite() {
                Ok(format!("{}", v as i64))
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(OpaqueIdVisitor)
}
