// BizDir - app/state.rs
//
// Directory state management. Holds the enriched entity list (the source of
// truth), the current query parameters, the derived view, and load status.
// Every parameter change recomputes the view in full.

use crate::app::loader;
use crate::core::award::AwardMatcher;
use crate::core::model::{BusinessEntity, SelectOption, SortOption};
use crate::core::query::{apply_query, QueryParams};
use crate::platform::config::AppConfig;
use crate::util::constants;
use std::path::PathBuf;

/// Status of the one-shot data load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Not loaded yet, or a reload is in progress.
    Loading,
    /// Entities are available.
    Ready,
    /// The load failed; `message` is shown to the user with a retry action.
    Failed { message: String },
}

/// Top-level directory state.
#[derive(Debug)]
pub struct DirectoryState {
    /// Data file to load.
    pub data_path: PathBuf,

    /// Maximum accepted data file size in bytes.
    pub max_data_file_size: u64,

    /// Award lookup used during enrichment.
    pub awards: AwardMatcher,

    pub load_state: LoadState,

    /// All enriched entities from the last successful load. Never mutated.
    pub entities: Vec<BusinessEntity>,

    /// Industry dropdown options.
    pub industries: Vec<SelectOption>,

    /// Location dropdown options.
    pub locations: Vec<SelectOption>,

    /// Current query parameters.
    pub query: QueryParams,

    /// Indices of entities in the current view (into `entities`).
    pub filtered_indices: Vec<usize>,
}

impl DirectoryState {
    /// Create unloaded state from validated configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            data_path: config.data_path.clone(),
            max_data_file_size: config.max_data_file_size,
            awards: AwardMatcher::new(&config.award_winners),
            load_state: LoadState::Loading,
            entities: Vec::new(),
            industries: Vec::new(),
            locations: Vec::new(),
            query: QueryParams {
                sort: config.default_sort,
                ..Default::default()
            },
            filtered_indices: Vec::new(),
        }
    }

    /// Load the data file. On failure the previous entities are discarded
    /// and the state carries the user-facing message.
    pub fn load(&mut self) {
        self.load_state = LoadState::Loading;
        self.entities.clear();
        self.industries.clear();
        self.locations.clear();
        self.filtered_indices.clear();

        match loader::load_directory(&self.data_path, self.max_data_file_size, &self.awards) {
            Ok(directory) => {
                self.entities = directory.entities;
                self.industries = directory.industries;
                self.locations = directory.locations;
                self.load_state = LoadState::Ready;
                self.apply_query();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load business data");
                self.load_state = LoadState::Failed {
                    message: e.user_message(),
                };
            }
        }
    }

    /// User-initiated retry: a full reload from scratch.
    pub fn reload(&mut self) {
        tracing::info!(path = %self.data_path.display(), "Reloading business data");
        self.load();
    }

    /// Recompute the view from current entities and query parameters.
    pub fn apply_query(&mut self) {
        self.filtered_indices = apply_query(&self.entities, &self.query);
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.query.search_term = term.to_string();
        self.apply_query();
    }

    pub fn set_industry(&mut self, industry: &str) {
        self.query.industry = industry.to_string();
        self.apply_query();
    }

    pub fn set_location(&mut self, location: &str) {
        self.query.location = location.to_string();
        self.apply_query();
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.query.sort = sort;
        self.apply_query();
    }

    /// Reset search, industry, location and sort in one step.
    pub fn clear_filters(&mut self) {
        self.query.reset();
        self.apply_query();
    }

    /// Entities in the current view, in view order.
    pub fn view(&self) -> Vec<&BusinessEntity> {
        self.filtered_indices
            .iter()
            .filter_map(|&idx| self.entities.get(idx))
            .collect()
    }

    /// The fixed sort option catalogue.
    pub fn sort_options(&self) -> Vec<SelectOption> {
        SortOption::options()
    }

    /// Message and hint for the error screen, if the load failed.
    pub fn error_message(&self) -> Option<String> {
        match &self.load_state {
            LoadState::Failed { message } => Some(format!(
                "{message}\n{} ({})",
                constants::LOAD_FAILURE_HINT,
                self.data_path.display()
            )),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.load_state == LoadState::Ready
    }
}
