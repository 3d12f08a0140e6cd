//! Filedrop Storage Library
//!
//! This crate provides the storage abstraction used by the upload handler and its
//! local filesystem implementation.
//!
//! # Storage key format
//!
//! Keys are flat: a single filename directly under the storage directory. Client
//! supplied filenames are turned into keys by [`key_for_filename`], which strips
//! leading directory components and rejects traversal attempts.

pub mod factory;
pub mod keys;
pub mod local;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use filedrop_core::StorageBackend;
pub use keys::key_for_filename;
pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};
