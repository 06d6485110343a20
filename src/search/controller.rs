//! Incremental search over a catalog driven by live query input.
//!
//! Every input change cancels the pending debounce timer and schedules a new
//! one, so a burst of keystrokes results in a single ranking pass. When the
//! timer expires the controller reads the latest input:
//!
//! - empty: show the first entries of the catalog, unranked
//! - shorter than the minimum query length: keep the current view
//! - otherwise: rank the catalog and show the results, or a distinct
//!   "no results" view when nothing matched

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::catalog::entry::CatalogEntry;
use crate::config::SearchConfig;
use crate::search::ranking::{RankingEngine, ScoredEntry, normalize_query};
use crate::search::scheduler::{Scheduler, TimerId};

/// What the search surface currently displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SearchView {
    /// Unranked leading slice of the catalog.
    Default { entries: Vec<Arc<CatalogEntry>> },
    /// Ranked matches for `query`.
    Results {
        query: String,
        hits: Vec<ScoredEntry>,
    },
    /// `query` was ranked and nothing matched.
    NoResults { query: String },
    /// The catalog could not be loaded; search is disabled.
    CatalogUnavailable { reason: String },
}

#[derive(Debug)]
enum CatalogState {
    Ready(Catalog),
    Unavailable(String),
}

/// Debounced, single-threaded search controller.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use apifinder::catalog::Catalog;
/// use apifinder::catalog::entry::CatalogEntry;
/// use apifinder::config::SearchConfig;
/// use apifinder::search::{RankingEngine, SearchController, SearchView, VirtualScheduler};
///
/// let catalog = Catalog::new(vec![CatalogEntry::new("WeatherStack")]);
/// let mut controller = SearchController::new(
///     catalog,
///     RankingEngine::default(),
///     SearchConfig::default(),
///     VirtualScheduler::new(),
/// );
///
/// controller.on_input("weath");
/// controller.scheduler_mut().advance(Duration::from_millis(150));
/// assert!(controller.poll());
/// assert!(matches!(controller.view(), SearchView::Results { .. }));
/// ```
#[derive(Debug)]
pub struct SearchController<S: Scheduler> {
    catalog: CatalogState,
    engine: RankingEngine,
    config: SearchConfig,
    scheduler: S,
    input: String,
    pending: Option<TimerId>,
    view: SearchView,
    renders: u64,
}

impl<S: Scheduler> SearchController<S> {
    /// Create a controller showing the default view of `catalog`.
    pub fn new(catalog: Catalog, engine: RankingEngine, config: SearchConfig, scheduler: S) -> Self {
        let view = SearchView::Default {
            entries: catalog.head(config.default_view_size).to_vec(),
        };
        SearchController {
            catalog: CatalogState::Ready(catalog),
            engine,
            config,
            scheduler,
            input: String::new(),
            pending: None,
            view,
            renders: 0,
        }
    }

    /// Create a controller for a catalog that failed to load.
    ///
    /// Input is still accepted, but the view stays
    /// [`SearchView::CatalogUnavailable`].
    pub fn unavailable<R: Into<String>>(
        reason: R,
        engine: RankingEngine,
        config: SearchConfig,
        scheduler: S,
    ) -> Self {
        let reason = reason.into();
        SearchController {
            view: SearchView::CatalogUnavailable {
                reason: reason.clone(),
            },
            catalog: CatalogState::Unavailable(reason),
            engine,
            config,
            scheduler,
            input: String::new(),
            pending: None,
            renders: 0,
        }
    }

    /// Record a new input value and restart the debounce timer.
    pub fn on_input<T: Into<String>>(&mut self, value: T) {
        self.input = value.into();

        if let Some(previous) = self.pending.take()
            && self.scheduler.cancel(previous)
        {
            log::debug!("Debounce timer {} superseded", previous.value());
        }

        self.pending = Some(self.scheduler.schedule(self.config.debounce()));
    }

    /// Process expired timers. Returns true if the view was re-rendered.
    pub fn poll(&mut self) -> bool {
        let expired = self.scheduler.take_expired();
        match self.pending {
            Some(pending) if expired.contains(&pending) => {
                self.pending = None;
                self.fire()
            }
            _ => false,
        }
    }

    fn fire(&mut self) -> bool {
        let catalog = match &self.catalog {
            CatalogState::Ready(catalog) => catalog,
            CatalogState::Unavailable(reason) => {
                log::debug!("Ignoring query, catalog unavailable: {}", reason);
                return false;
            }
        };

        let query = normalize_query(&self.input);
        let view = if query.is_empty() {
            SearchView::Default {
                entries: catalog.head(self.config.default_view_size).to_vec(),
            }
        } else if query.chars().count() < self.config.min_query_len {
            log::debug!("Query {:?} below minimum length, keeping view", query);
            return false;
        } else {
            let hits = self.engine.rank(catalog, &query, self.config.result_limit);
            if hits.is_empty() {
                SearchView::NoResults { query }
            } else {
                SearchView::Results { query, hits }
            }
        };

        self.view = view;
        self.renders += 1;
        true
    }

    /// The currently displayed view.
    pub fn view(&self) -> &SearchView {
        &self.view
    }

    /// The latest input value.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether a debounced search is waiting to run.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of renders triggered by input since creation.
    pub fn renders(&self) -> u64 {
        self.renders
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The catalog, or `None` when it is unavailable.
    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.catalog {
            CatalogState::Ready(catalog) => Some(catalog),
            CatalogState::Unavailable(_) => None,
        }
    }
}
