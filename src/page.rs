//! Page runtime.
//!
//! A [`Page`] owns the document, its resolved sinks and its event listeners.
//! Booting a page loads the portfolio document, renders every section, and
//! installs the interaction binders. A failed load surfaces exactly one alert
//! and leaves every section container as the template declared it.

use tracing::{error, info, warn};

use crate::data::PortfolioData;
use crate::error::FolioResult;
use crate::events::{Event, EventRegistry};
use crate::host::Host;
use crate::id::{PageSeed, StableId};
use crate::index::Indexer;
use crate::interact::{bind_buttons, bind_smooth_scroll};
use crate::loader::{LOAD_FAILURE_MESSAGE, Loader};
use crate::node::Document;
use crate::render::{RenderConfig, render_document};
use crate::sections::render_sections;
use crate::template::Sinks;

/// A rendered, interactive portfolio page
#[derive(Debug)]
pub struct Page {
    doc: Document,
    sinks: Sinks,
    registry: EventRegistry,
    indexer: Indexer,
    bound: bool,
}

impl Page {
    /// Index the template and resolve its sinks.
    ///
    /// Fails with [`MissingContainer`](crate::error::FolioError::MissingContainer)
    /// when the template lacks a required container.
    pub fn new(mut template: Document, seed: PageSeed) -> FolioResult<Self> {
        let indexer = Indexer::new().with_page_seed(seed);
        let stats = indexer.index(&mut template);
        let sinks = Sinks::resolve(&template)?;
        info!(elements = stats.element_count, "page template indexed");

        Ok(Self {
            doc: template,
            sinks,
            registry: EventRegistry::new(),
            indexer,
            bound: false,
        })
    }

    /// Load the portfolio document, render it, and bind interactions.
    ///
    /// Interactions are bound whether or not the load succeeded. On a load
    /// failure the host shows [`LOAD_FAILURE_MESSAGE`] once and the error is
    /// returned.
    pub async fn boot(&mut self, loader: &Loader, host: &mut dyn Host) -> FolioResult<()> {
        info!(source = %loader.source().describe(), "booting page");

        let result = match loader.load().await {
            Ok(data) => self.render(&data),
            Err(err) => {
                error!(error = %err, "error loading portfolio data");
                host.alert(LOAD_FAILURE_MESSAGE);
                Err(err)
            }
        };

        self.bind_interactions();
        result
    }

    /// Render a loaded document into the page and re-index it
    pub fn render(&mut self, data: &PortfolioData) -> FolioResult<()> {
        render_sections(&mut self.doc, &self.sinks, data)?;
        self.indexer.index(&mut self.doc);
        Ok(())
    }

    /// Install the smooth-scroll and button binders.
    ///
    /// Runs once per page; later calls log a warning and do nothing.
    pub fn bind_interactions(&mut self) {
        if self.bound {
            warn!("interactions already bound");
            return;
        }
        let anchors = bind_smooth_scroll(&self.doc, &mut self.registry);
        let buttons = bind_buttons(&self.doc, &mut self.registry);
        info!(anchors, buttons, "interactions bound");
        self.bound = true;
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Dispatch a click on the element with `target` identity
    pub fn click(&self, target: StableId, host: &mut dyn Host) -> Event {
        self.registry.dispatch(&self.doc, Event::click(target), host)
    }

    /// Dispatch a click on the element carrying DOM id `id`.
    ///
    /// Returns `None` without touching the host when no element has that id.
    pub fn click_by_id(&self, id: &str, host: &mut dyn Host) -> Option<Event> {
        let target = self.doc.get_element_by_id(id)?.stable_id;
        Some(self.click(target, host))
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn sinks(&self) -> &Sinks {
        &self.sinks
    }

    pub fn registry(&self) -> &EventRegistry {
        &self.registry
    }

    /// Serialize the page to HTML
    pub fn to_html(&self, config: &RenderConfig) -> String {
        render_document(&self.doc, config)
    }
}
