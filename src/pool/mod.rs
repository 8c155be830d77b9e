//! Image pool: the photos a session plays with.
//!
//! The loader is the crate's only I/O. It scans a directory once at
//! startup and hands an immutable [`ImagePool`] to the game and the
//! proposal; every failure it meets is logged and degraded.

pub mod error;
pub mod image;
pub mod loader;
pub mod settings;

pub use error::PoolError;
pub use image::{ImageDescriptor, ImageId, ImagePool};
pub use loader::{is_image_file, load_pool, probe_dimensions, public_url_base, scan_directory};
pub use settings::LoaderSettings;
