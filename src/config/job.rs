//! Job descriptors
//!
//! A job says where (database/collection) and how much (count) synthetic data
//! to generate, plus the content template used for each document.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A validated data-generation job
#[derive(Debug, Clone, PartialEq)]
pub struct JobDescriptor {
    /// Target database. Empty only when the caller supplies it out-of-band.
    pub database: String,

    /// Target collection, never empty
    pub collection: String,

    /// Number of documents to generate, always > 0
    pub count: u64,

    /// Content template, passed through untouched
    pub content: Value,

    /// Index definitions to create after insertion
    pub indexes: Vec<Value>,

    /// Sharding settings for the collection
    pub shard_config: Option<Value>,

    /// Block compressor for the collection
    pub compression_level: Option<String>,
}

/// One entry of the configuration array, as written by the user
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawJob {
    #[serde(default, deserialize_with = "null_as_default")]
    pub database: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub collection: String,

    /// Missing or null count is treated as 0 and rejected by validation
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: i64,

    #[serde(default = "empty_object")]
    pub content: Value,

    #[serde(default)]
    pub indexes: Vec<Value>,

    #[serde(default, rename = "shardConfig")]
    pub shard_config: Option<Value>,

    #[serde(default, rename = "compressionLevel")]
    pub compression_level: Option<String>,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Read an explicit `null` the same way as an absent key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawJob {
    /// Convert an entry that already passed validation
    pub(crate) fn into_descriptor(self) -> JobDescriptor {
        JobDescriptor {
            database: self.database,
            collection: self.collection,
            count: u64::try_from(self.count).unwrap_or_default(),
            content: self.content,
            indexes: self.indexes,
            shard_config: self.shard_config,
            compression_level: self.compression_level,
        }
    }
}

impl JobDescriptor {
    /// Fully qualified `database.collection` name
    pub fn namespace(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }
}
