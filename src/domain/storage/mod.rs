//! Storage domain - key-value persistence for locally held records
//!
//! Bot configurations and users are stored through the [`Storage`] trait,
//! indexed by their string key (bot id, username).

mod entity;
mod repository;

pub use entity::{StorageEntity, StorageKey};
pub use repository::Storage;

#[cfg(test)]
pub use repository::mock;
