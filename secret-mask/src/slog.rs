//! Adapters for logging entities in masked form through `slog`.
//!
//! The logged representation is always built from a masked clone; the value
//! passed in is never serialized as-is. Serialization failures become a
//! placeholder string rather than a logging error.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::walker::Maskable;

/// A `slog::Value` that emits a masked payload as structured JSON.
pub struct MaskedJson {
    value: JsonValue,
}

impl MaskedJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Logs a masked clone of a configuration tree as JSON.
///
/// ```ignore
/// use secret_mask::slog::IntoMaskedJson;
///
/// info!(logger, "connection updated"; "config" => connection.to_masked_json());
/// ```
pub trait IntoMaskedJson: Maskable + Clone + Serialize {
    /// Masks a clone of `self` and wraps its JSON form.
    ///
    /// If the masked value cannot be converted to JSON, the returned value holds
    /// the string `"Failed to serialize masked value"`.
    fn to_masked_json(&self) -> MaskedJson {
        let mut masked = self.clone();
        masked.mask();
        let json_value = serde_json::to_value(masked).unwrap_or_else(|_| {
            JsonValue::String("Failed to serialize masked value".to_string())
        });
        MaskedJson::new(json_value)
    }
}

impl<T> IntoMaskedJson for T where T: Maskable + Clone + Serialize {}
