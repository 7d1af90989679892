//! Glyph Registry
//!
//! In-memory registry of asset records ("glyphs") with a flat text store.
//!
//! # Core Concepts
//!
//! - [`Glyph`]: A single asset record (name, type, path, size, tag)
//! - [`GlyphType`]: Closed taxonomy of asset categories
//! - [`GlyphStore`]: Ordered, owned collection enforcing unique ids and paths
//! - [`codec`]: One record per line, C-style quoted text fields
//! - [`storage`]: Whole-collection load/save against a file
//! - [`query`] / [`stats`]: Read-only views over a snapshot of the store
//!
//! # Example
//!
//! ```rust
//! use glyph_registry::{GlyphDraft, GlyphStore, GlyphType};
//!
//! let mut store = GlyphStore::new();
//! let draft = GlyphDraft::new("Rock01", GlyphType::Texture, "/a/rock.png", 12.5, "env").unwrap();
//! let id = store.add(draft).unwrap();
//!
//! assert_eq!(store.get(id).unwrap().name, "Rock01");
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod codec;
pub mod config;
pub mod error;
mod glyph;
mod glyph_type;
pub mod query;
pub mod stats;
pub mod storage;
mod store;
pub mod text;

// Re-exports
pub use config::{ConfigError, RegistryConfig};
pub use error::{DecodeError, RegistryError, StorageError};
pub use glyph::{Glyph, GlyphDraft, GlyphId};
pub use glyph_type::GlyphType;
pub use stats::{compute_stats, GlyphStats};
pub use store::GlyphStore;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the registry
    pub use crate::{
        Glyph, GlyphDraft, GlyphId, GlyphStats, GlyphStore, GlyphType, RegistryConfig,
        RegistryError, StorageError,
    };
}

/// Convenience result alias for registry operations
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
