//! Live object memory lister
//!
//! Lists every live instance of a type chosen by name, with the retained
//! size the host's memory instrumentation reports for each one. The list is
//! a snapshot: it is rebuilt wholesale by [`MemoryObjectLister::refresh`] and
//! never updated incrementally.

mod panel;
mod record;
mod view;

pub use record::ObjectRecord;
pub use view::{
    ListViewState, PageSize, SizeUnit, SortDirection, SortKey, group_thousands, sort_records,
};

use crate::error::LookupError;
use crate::host::{MemoryInstrumentation, ObjectReflection};

/// Type name and module the lister queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeQuery {
    pub type_name: String,
    pub module_name: String,
}

impl TypeQuery {
    pub fn new(type_name: impl Into<String>, module_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            module_name: module_name.into(),
        }
    }
}

/// Memory lister state
#[derive(Debug)]
pub struct MemoryObjectLister {
    /// Whether the window is drawn
    pub show: bool,
    query: TypeQuery,
    records: Vec<ObjectRecord>,
    total_bytes: u64,
    view: ListViewState,
}

impl MemoryObjectLister {
    /// Create a hidden, empty lister for `query`
    pub fn new(query: TypeQuery) -> Self {
        Self {
            show: false,
            query,
            records: Vec::new(),
            total_bytes: 0,
            view: ListViewState::default(),
        }
    }

    /// Toggle window visibility
    pub fn toggle(&mut self) {
        self.show = !self.show;
    }

    /// Type and module the next refresh resolves
    pub fn query(&self) -> &TypeQuery {
        &self.query
    }

    /// Replace the query; nothing is validated until the next refresh
    pub fn set_query(&mut self, type_name: impl Into<String>, module_name: impl Into<String>) {
        self.query = TypeQuery::new(type_name, module_name);
    }

    /// Rows in display order
    pub fn records(&self) -> &[ObjectRecord] {
        &self.records
    }

    /// Sum of retained bytes over every row
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Page, unit and sort settings
    pub fn view(&self) -> &ListViewState {
        &self.view
    }

    /// Rebuild the list from the host.
    ///
    /// On a lookup failure the previous list is kept untouched. On success
    /// the page goes back to the first one and the current sort is applied.
    /// Returns the number of rows.
    pub fn refresh<R, M>(&mut self, reflection: &R, memory: &M) -> Result<usize, LookupError>
    where
        R: ObjectReflection + ?Sized,
        M: MemoryInstrumentation + ?Sized,
    {
        let ty = reflection
            .resolve_type(&self.query.type_name, &self.query.module_name)
            .ok_or_else(|| LookupError::UnknownType {
                type_name: self.query.type_name.clone(),
                module_name: self.query.module_name.clone(),
            })?;

        let objects = reflection.find_objects_of_type(&ty);
        let mut instrumented = true;

        self.records = objects
            .iter()
            .enumerate()
            .map(|(index, object)| {
                let bytes = memory.retained_bytes(object.id).unwrap_or_else(|| {
                    instrumented = false;
                    0
                });
                ObjectRecord::from_live(index, object, bytes)
            })
            .collect();
        self.total_bytes = self.records.iter().map(|r| r.retained_bytes).sum();

        if !instrumented {
            tracing::debug!("memory: instrumentation unavailable, reporting zero sizes");
        }
        tracing::debug!(
            type_name = %ty.full_name,
            count = self.records.len(),
            total_bytes = self.total_bytes,
            "memory: refreshed object list"
        );

        self.view.page_index = 0;
        self.sort();
        self.reset_view_if_empty();
        Ok(self.records.len())
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.view.sort_key = key;
        self.sort();
    }

    pub fn set_sort_direction(&mut self, direction: SortDirection) {
        self.view.sort_direction = direction;
        self.sort();
    }

    pub fn toggle_sort_direction(&mut self) {
        self.set_sort_direction(self.view.sort_direction.toggled());
    }

    /// Change rows per page; the page index is clamped, rows are not re-sorted
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.view.page_size = page_size;
        self.view.clamp_page(self.records.len());
    }

    pub fn set_unit(&mut self, unit: SizeUnit) {
        self.view.unit = unit;
    }

    /// Jump to a page, clamped into range
    pub fn set_page(&mut self, page_index: usize) {
        self.view.page_index = page_index;
        self.view.clamp_page(self.records.len());
    }

    pub fn next_page(&mut self) {
        self.view.next_page(self.records.len());
    }

    pub fn previous_page(&mut self) {
        self.view.previous_page();
    }

    pub fn total_pages(&self) -> usize {
        self.view.total_pages(self.records.len())
    }

    /// Rows on the current page, with their index into [`Self::records`]
    pub fn visible_records(&self) -> impl Iterator<Item = (usize, &ObjectRecord)> {
        let range = self.view.page_range(self.records.len());
        let start = range.start;
        self.records[range]
            .iter()
            .enumerate()
            .map(move |(offset, record)| (start + offset, record))
    }

    fn sort(&mut self) {
        sort_records(
            &mut self.records,
            self.view.sort_key,
            self.view.sort_direction,
        );
    }

    /// An empty list drops every view setting back to its default
    fn reset_view_if_empty(&mut self) {
        if self.records.is_empty() {
            self.view.reset();
        }
    }
}
