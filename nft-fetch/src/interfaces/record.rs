use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::borrow::Borrow;
use std::ops::Deref;

/// A decoded API record kept together with the JSON it was decoded from.
///
/// Serializes as the original JSON, so exports carry every key the API sent.
#[derive(Debug, Clone)]
pub struct RawRecord<T> {
    pub record: T,
    pub json: Value,
}

impl<T: DeserializeOwned> RawRecord<T> {
    pub fn decode(json: Value) -> Result<Self, serde_json::Error> {
        let record = T::deserialize(&json)?;
        Ok(Self { record, json })
    }
}

impl<T> Deref for RawRecord<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.record
    }
}

impl<T> Borrow<T> for RawRecord<T> {
    fn borrow(&self) -> &T {
        &self.record
    }
}

impl<T> Serialize for RawRecord<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.json.serialize(serializer)
    }
}
