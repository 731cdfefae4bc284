//! # storage-adapters
//!
//! Key-value store implementations of the `KvStore` port, plus the
//! submission repository built on top of them.

pub mod kv_file;
pub mod kv_memory;
pub mod repository;

pub use kv_file::FileKvStore;
pub use kv_memory::MemoryKvStore;
pub use repository::{SubmissionRepository, PUBLISHED_KEY, SUBMISSIONS_KEY};
