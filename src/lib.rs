//! folio-vdom - Portfolio page renderer on a stable-id Virtual DOM
//!
//! ## Core Concepts
//!
//! **Sinks**: the host page declares one container per section by DOM id.
//! Ids are resolved once into [`template::SinkHandle`]s carrying the
//! container's [`StableId`], and population routines write only through them.
//!
//! **Stable identity**: every element gets a content-hashed id (parent seed,
//! tag, key attributes, occurrence). Containers keep their ids when their
//! contents change, so listeners and handles outlive a re-render.
//!
//! **Host**: alerts, scrolling, opening windows and navigation go through the
//! [`host::Host`] trait.
//!
//! ## Modules
//! - `data`: portfolio document model (serde)
//! - `loader`: file / HTTP loading
//! - `sections`: the eight population routines
//! - `interact`: smooth-scroll and button binders
//! - `page`: the load, render, bind runtime
//! - `node`, `attr`, `id`, `index`, `render`: the Virtual DOM
//!
//! ## Usage
//!
//! ```ignore
//! use folio_vdom::prelude::*;
//!
//! let mut page = Page::new(standard_page("Ada Lovelace"), PageSeed::from_path("/"))?;
//! page.boot(&Loader::new(DataSource::default()), &mut ConsoleHost).await?;
//! let html = page.to_html(&RenderConfig::PROD);
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Virtual DOM
// =============================================================================

/// Attribute storage
pub mod attr;

/// Content hashing for stable ids
pub mod hash;

/// Stable identity
pub mod id;

/// StableId assignment
pub mod index;

/// Node types: Document, Element, Node, Text
pub mod node;

/// HTML rendering
pub mod render;

/// href classification
pub mod link;

// =============================================================================
// Portfolio
// =============================================================================

/// Renderer configuration
pub mod config;

/// Portfolio document model
pub mod data;

/// Error types
pub mod error;

/// Click events and dispatch
pub mod events;

/// Host environment effects
pub mod host;

/// Interaction binders
pub mod interact;

/// Document loading
pub mod loader;

/// Page runtime
pub mod page;

/// Section population routines
pub mod sections;

/// Host page template and sink handles
pub mod template;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Children, Document, Element, Node, Text};

// Identity
pub use id::{PageSeed, StableId};

// Indexing
pub use index::{IndexStats, Indexer};

// Attribute types
pub use attr::{Attrs, AttrsExt};

// Error types
pub use error::{FolioError, FolioResult};

// Runtime
pub use data::PortfolioData;
pub use loader::{DataSource, Loader};
pub use page::Page;
