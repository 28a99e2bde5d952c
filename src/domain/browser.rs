// src/domain/browser.rs
use std::str::FromStr;
use tracing::error;

use crate::db::kv::KeyValueStore;
use crate::domain::complaint::{Complaint, ComplaintStatus};
use crate::store::{ComplaintStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ComplaintStatus),
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Only(ComplaintStatus::Pending),
        StatusFilter::Only(ComplaintStatus::InProgress),
        StatusFilter::Only(ComplaintStatus::Resolved),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "Todos",
            StatusFilter::Only(status) => status.filter_label(),
        }
    }

    pub fn accepts(self, status: ComplaintStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// What the list view should show for the current state.
#[derive(Debug, PartialEq, Eq)]
pub enum BrowserView<'a> {
    /// Nothing was ever submitted.
    Empty,
    /// There are complaints, but none pass the filters.
    NoMatches,
    Results(Vec<&'a Complaint>),
}

/// Filterable view over the complaint collection.
///
/// Owns its copy of the collection; hydrate it from the store once and keep
/// it in sync through [`ComplaintBrowser::change_status`].
#[derive(Debug, Default)]
pub struct ComplaintBrowser {
    complaints: Vec<Complaint>,
    status_filter: StatusFilter,
    search_term: String,
}

impl ComplaintBrowser {
    pub fn new(complaints: Vec<Complaint>) -> Self {
        Self {
            complaints,
            ..Self::default()
        }
    }

    /// Loads the collection from the store. A failed read yields an empty
    /// browser together with the error so the caller can notify the user.
    pub fn hydrate<S: KeyValueStore>(store: &ComplaintStore<S>) -> (Self, Option<StoreError>) {
        match store.load_all() {
            Ok(all) => (Self::new(all), None),
            Err(e) => {
                error!(error = %e, "failed to load complaints");
                (Self::default(), Some(e))
            }
        }
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn reset_filters(&mut self) {
        self.status_filter = StatusFilter::All;
        self.search_term.clear();
    }

    /// Records passing both filters, in stored order.
    pub fn filtered(&self) -> Vec<&Complaint> {
        // Blank terms don't filter; others match as typed, padding included.
        let term = (!self.search_term.trim().is_empty()).then(|| self.search_term.to_lowercase());

        self.complaints
            .iter()
            .filter(|c| self.status_filter.accepts(c.status))
            .filter(|c| term.as_deref().map_or(true, |t| c.matches_term(t)))
            .collect()
    }

    pub fn view(&self) -> BrowserView<'_> {
        if self.complaints.is_empty() {
            return BrowserView::Empty;
        }

        let matches = self.filtered();
        if matches.is_empty() {
            BrowserView::NoMatches
        } else {
            BrowserView::Results(matches)
        }
    }

    /// Writes the change through the store, then mirrors it locally.
    /// The local copy is only touched once the write went through.
    ///
    /// Returns `false` when there was nothing to change: the id is not in
    /// the collection, or the record already has `new_status`.
    pub fn change_status<S: KeyValueStore>(
        &mut self,
        store: &ComplaintStore<S>,
        id: &str,
        new_status: ComplaintStatus,
    ) -> Result<bool, StoreError> {
        let changes = self
            .complaints
            .iter()
            .any(|c| c.id == id && c.status != new_status);

        store.update_status(id, new_status)?;
        self.refresh_record(store, id);
        Ok(changes)
    }

    fn refresh_record<S: KeyValueStore>(&mut self, store: &ComplaintStore<S>, id: &str) {
        let Some(local) = self.complaints.iter_mut().find(|c| c.id == id) else {
            return;
        };

        match store.load_all() {
            Ok(all) => {
                if let Some(stored) = all.into_iter().find(|c| c.id == id) {
                    *local = stored;
                }
            }
            Err(e) => error!(error = %e, %id, "failed to re-read complaint after status change"),
        }
    }
}

/// "N denúncias encontradas" style summary line.
pub fn result_count_label(count: usize) -> String {
    match count {
        0 => "Nenhuma denúncia encontrada".to_string(),
        1 => "1 denúncia encontrada".to_string(),
        n => format!("{n} denúncias encontradas"),
    }
}
