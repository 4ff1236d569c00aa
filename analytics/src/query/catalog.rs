//! Search, sort and paginate the creature catalog for tabular display

use std::cmp::Ordering;

use crate::types::Creature;

/// Rows per page when none is given
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sortable catalog columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortColumn {
    #[default]
    Id,
    Name,
    Height,
    Weight,
    BaseExperience,
}

impl SortColumn {
    /// Parse a column name ("id", "name", "height", "weight", "exp")
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "id" => Some(SortColumn::Id),
            "name" => Some(SortColumn::Name),
            "height" => Some(SortColumn::Height),
            "weight" => Some(SortColumn::Weight),
            "exp" | "base_experience" | "base-experience" => Some(SortColumn::BaseExperience),
            _ => None,
        }
    }

    fn compare(&self, a: &Creature, b: &Creature) -> Ordering {
        match self {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::Height => a.height.cmp(&b.height),
            SortColumn::Weight => a.weight.cmp(&b.weight),
            SortColumn::BaseExperience => a.base_experience.cmp(&b.base_experience),
        }
    }
}

/// Table view state: filter text, sort column/direction, page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Case-insensitive substring matched against id, name and type names
    pub search: String,
    pub sort: SortColumn,
    pub descending: bool,
    /// 0-based page index
    pub page: usize,
    pub page_size: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortColumn::Id,
            descending: false,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of query results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage<'a> {
    pub rows: Vec<&'a Creature>,
    /// Matches across all pages
    pub total_matches: usize,
    pub page: usize,
    pub page_count: usize,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortColumn, descending: bool) -> Self {
        self.sort = sort;
        self.descending = descending;
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Whether a creature passes the search filter
    pub fn matches(&self, creature: &Creature) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        creature.id.to_string().contains(&needle)
            || creature.name.to_lowercase().contains(&needle)
            || creature
                .types
                .iter()
                .any(|t| t.to_lowercase().contains(&needle))
    }

    /// Filter, sort (stable) and slice out the requested page.
    ///
    /// A page index past the end yields an empty `rows`.
    pub fn apply<'a>(&self, creatures: &'a [Creature]) -> CatalogPage<'a> {
        let mut rows: Vec<&Creature> = creatures.iter().filter(|c| self.matches(c)).collect();
        rows.sort_by(|a, b| {
            let ord = self.sort.compare(a, b);
            if self.descending { ord.reverse() } else { ord }
        });

        let page_size = self.page_size.max(1);
        let total_matches = rows.len();
        let page_count = total_matches.div_ceil(page_size);

        let rows = rows
            .into_iter()
            .skip(self.page.saturating_mul(page_size))
            .take(page_size)
            .collect();

        CatalogPage {
            rows,
            total_matches,
            page: self.page,
            page_count,
        }
    }
}
