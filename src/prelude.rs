//! Prelude module for common imports.
//!
//! ```ignore
//! use folio_vdom::prelude::*;
//! ```

// Node types
pub use crate::node::{Children, Document, Element, Node, Text};

// Indexing
pub use crate::index::{IndexStats, Indexer};

// Attributes
pub use crate::attr::{Attrs, AttrsExt};

// Identity
pub use crate::id::{PageSeed, StableId};

// Error
pub use crate::error::{FolioError, FolioResult};

// Render
pub use crate::render::{DEFAULT_ID_ATTR, RenderConfig, render_document};

// Data & loading
pub use crate::data::PortfolioData;
pub use crate::loader::{DataSource, LOAD_FAILURE_MESSAGE, Loader};

// Template
pub use crate::template::{HeroSinks, SectionSinks, SinkHandle, Sinks, standard_page};

// Host & events
pub use crate::events::{Event, EventKind, EventRegistry};
pub use crate::host::{ConsoleHost, Host, RecordingHost, ScrollBehavior, WindowTarget};

// Runtime
pub use crate::config::FolioConfig;
pub use crate::page::Page;
