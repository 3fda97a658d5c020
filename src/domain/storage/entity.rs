//! Storage entity traits

use std::fmt::Debug;
use std::hash::Hash;

use serde::{de::DeserializeOwned, Serialize};

/// Key of a stored record
pub trait StorageKey: Clone + Debug + Send + Sync + Eq + Hash {
    /// String form used as the index in key-value backends
    fn as_str(&self) -> &str;
}

/// A record that can be persisted through [`super::Storage`]
pub trait StorageEntity: Clone + Debug + Send + Sync + Serialize + DeserializeOwned {
    type Key: StorageKey;

    fn key(&self) -> &Self::Key;
}
