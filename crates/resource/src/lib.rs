//! Resource loading and image probing.
//!
//! The engine reads image bytes through the [`ResourceProvider`] trait and
//! asks an [`ImageDecoder`] for intrinsic pixel dimensions. Both are traits
//! so tests and embedders can supply in-memory implementations; the
//! filesystem provider is what the CLI wires in.

pub mod decoder;
pub mod filesystem;
pub mod provider;

pub use decoder::{HeaderImageDecoder, ImageDecodeError, ImageDecoder};
pub use filesystem::FilesystemResourceProvider;
pub use provider::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
