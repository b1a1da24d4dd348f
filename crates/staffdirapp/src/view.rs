//! # View Coordinator
//!
//! [`ViewCoordinator`] owns the state behind one view of the directory: the query (search,
//! filters, sort, page, page size) and whether a record is being edited. Every state change
//! reruns the query pipeline and paginator and hands the resulting [`ViewSnapshot`] to each
//! registered render callback.
//!
//! Two rules the paginator leaves to its caller are enforced here:
//!
//! - Changing the search, filters, sort or page size returns to page 1.
//! - After any add/update/delete the page is clamped into `[1, max(1, total_pages)]`, so
//!   deleting the last record on the last page steps back a page instead of showing nothing.
//!
//! Adds and updates go through [`ViewCoordinator::submit`], which waits out a configurable
//! delay (simulated network latency) before touching the store. The coordinator stays
//! mutably borrowed for the whole call, so anything issued afterwards sees the result.

use crate::api::DirectoryApi;
use crate::commands::{CmdResult, DirectoryStats};
use crate::error::{DirectoryError, Result};
use crate::model::{Employee, EmployeeDraft, EmployeeId, Field};
use crate::paginate::{clamp_page, paginate, total_pages, PageLink, PageResult};
use crate::query::{process, QueryState, SortDirection, SortSpec};
use crate::store::DataStore;
use std::time::Duration;
use tracing::debug;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub page: PageResult<Employee>,
    pub window: Vec<PageLink>,
    pub stats: DirectoryStats,
    pub query: QueryState,
    pub editing: Option<EmployeeId>,
}

pub type RenderCallback = Box<dyn FnMut(&ViewSnapshot)>;

pub struct ViewCoordinator<S: DataStore> {
    api: DirectoryApi<S>,
    query: QueryState,
    editing: Option<EmployeeId>,
    mutation_delay: Duration,
    renderers: Vec<RenderCallback>,
}

impl<S: DataStore> ViewCoordinator<S> {
    pub fn new(api: DirectoryApi<S>, page_size: usize, mutation_delay: Duration) -> Self {
        Self {
            api,
            query: QueryState::default().with_page(1, page_size.max(1)),
            editing: None,
            mutation_delay,
            renderers: Vec::new(),
        }
    }

    /// Register a callback invoked with every fresh snapshot.
    pub fn on_render<F>(&mut self, callback: F)
    where
        F: FnMut(&ViewSnapshot) + 'static,
    {
        self.renderers.push(Box::new(callback));
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn editing(&self) -> Option<EmployeeId> {
        self.editing
    }

    pub fn api(&self) -> &DirectoryApi<S> {
        &self.api
    }

    /// Recompute the current view, clamping the page if the data shrank, and notify renderers.
    pub fn refresh(&mut self) -> Result<ViewSnapshot> {
        let processed = process(self.api.list()?, &self.query);
        let clamped = clamp_page(
            self.query.page,
            total_pages(processed.len(), self.query.page_size),
        );
        if clamped != self.query.page {
            debug!(from = self.query.page, to = clamped, "clamped page");
            self.query.page = clamped;
        }
        let page = paginate(&processed, self.query.page, self.query.page_size);
        let stats = self.api.stats(&self.query)?.stats.unwrap_or_default();

        let snapshot = ViewSnapshot {
            window: page.window(),
            page,
            stats,
            query: self.query.clone(),
            editing: self.editing,
        };
        for render in self.renderers.iter_mut() {
            render(&snapshot);
        }
        Ok(snapshot)
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> Result<ViewSnapshot> {
        self.query.search = search.into();
        self.query.page = 1;
        self.refresh()
    }

    pub fn set_filter(&mut self, field: Field, value: impl Into<String>) -> Result<ViewSnapshot> {
        self.query.filters.set(field, value);
        self.query.page = 1;
        self.refresh()
    }

    pub fn clear_filters(&mut self) -> Result<ViewSnapshot> {
        self.query.filters.clear();
        self.query.page = 1;
        self.refresh()
    }

    /// Drop the search and every filter in one step.
    pub fn clear_query(&mut self) -> Result<ViewSnapshot> {
        self.query.search.clear();
        self.query.filters.clear();
        self.query.page = 1;
        self.refresh()
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) -> Result<ViewSnapshot> {
        self.query.sort = sort;
        self.query.page = 1;
        self.refresh()
    }

    /// Sort by `field`, flipping to descending when it is already the ascending sort field.
    pub fn toggle_sort(&mut self, field: Field) -> Result<ViewSnapshot> {
        let direction = match self.query.sort {
            Some(SortSpec {
                field: current,
                direction: SortDirection::Asc,
            }) if current == field => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        self.set_sort(Some(SortSpec { field, direction }))
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<ViewSnapshot> {
        self.query.page_size = page_size.max(1);
        self.query.page = 1;
        self.refresh()
    }

    /// Jump to `page` if it exists; out-of-range requests leave the page unchanged.
    pub fn go_to_page(&mut self, page: usize) -> Result<ViewSnapshot> {
        let matched = process(self.api.list()?, &self.query).len();
        if page >= 1 && page <= total_pages(matched, self.query.page_size) {
            self.query.page = page;
        }
        self.refresh()
    }

    pub fn next_page(&mut self) -> Result<ViewSnapshot> {
        self.go_to_page(self.query.page + 1)
    }

    pub fn prev_page(&mut self) -> Result<ViewSnapshot> {
        self.go_to_page(self.query.page.saturating_sub(1))
    }

    /// Switch to edit mode for `id`, returning its current values to prefill a form.
    pub fn begin_edit(&mut self, id: EmployeeId) -> Result<EmployeeDraft> {
        let employee = self
            .api
            .get_by_id(id)?
            .ok_or(DirectoryError::NotFound(id))?;
        self.editing = Some(id);
        Ok(EmployeeDraft::from(&employee))
    }

    /// Leave edit mode; the next submit adds a new employee.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Add (or, in edit mode, update) after the simulated latency.
    ///
    /// On success edit mode ends and the view refreshes. On failure nothing changes, edit
    /// mode included, so a form can show the errors and let the user retry.
    pub async fn submit(&mut self, draft: EmployeeDraft) -> Result<CmdResult> {
        if !self.mutation_delay.is_zero() {
            tokio::time::sleep(self.mutation_delay).await;
        }
        let result = match self.editing {
            Some(id) => self.api.update(id, &draft)?,
            None => self.api.add(&draft)?,
        };
        self.editing = None;
        self.refresh()?;
        Ok(result)
    }

    /// Delete immediately and refresh, leaving edit mode if it was editing this record.
    pub fn delete(&mut self, id: EmployeeId) -> Result<CmdResult> {
        let result = self.api.delete(id)?;
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.refresh()?;
        Ok(result)
    }
}
