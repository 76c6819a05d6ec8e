//! # vidup-blob: byte storage for video payloads
//!
//! `vidup-blob` holds the binary side of vidup. A [`ByteStore`] accepts a
//! stream of bytes for a video id and hands a stream back on read. It knows
//! nothing about video metadata; the coordinator in `vidup-core` decides
//! whether a transfer is allowed before a store is ever called.
//!
//! ## Backends
//!
//! - [`MemoryByteStore`]: process-local map, used in tests and with
//!   `storage.backend = memory`
//! - [`FsByteStore`]: one file per video (`video{id}.mpg`) under a root
//!   directory
//!
//! ```rust
//! use vidup_blob::{stream_bytes, ByteStore, MemoryByteStore};
//!
//! # #[tokio::main]
//! # async fn main() -> vidup_blob::BlobResult<()> {
//! let store = MemoryByteStore::new();
//! let written = store.save(2, stream_bytes(&b"frame data"[..])).await?;
//! assert_eq!(written, 10);
//! assert!(store.exists(2).await?);
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod fs;
mod memory;
pub mod store;
mod types;

pub use config::StoreConfig;
pub use error::{BlobError, BlobResult};
pub use fs::FsByteStore;
pub use memory::MemoryByteStore;
pub use store::{ByteStore, DefaultKeyStrategy, KeyStrategy, StoreCapabilities};
pub use types::{stream_bytes, stream_chunks, ByteStream};
