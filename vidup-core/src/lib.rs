//! vidup-core: video metadata registry and transfer coordination.
//!
//! The pieces, leaves first:
//!
//! - [`IdAllocator`]: strictly increasing ids, first id is 2
//! - [`VideoRegistry`]: id → [`Video`] map behind a lock
//! - [`Origin`]: request origin the data URL is built from
//! - [`VideoCoordinator`]: register, list, upload and download, gated on
//!   the id being registered
//!
//! Byte storage lives in `vidup-blob` and is injected into the coordinator.

pub mod config;
pub mod coordinator;
pub mod errors;
pub mod ids;
pub mod models;
pub mod origin;
pub mod registry;

pub use config::{VidConfig, VidConfigSnapshot};
pub use coordinator::VideoCoordinator;
pub use errors::{ErrorKind, VideoError, VideoResult};
pub use ids::IdAllocator;
pub use models::{Video, VideoState, VideoStatus};
pub use origin::Origin;
pub use registry::VideoRegistry;
