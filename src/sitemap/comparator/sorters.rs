use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    AlphabeticAscending, AlphabeticDescending, InsertionOrderAscending, InsertionOrderDescending,
    NodeComparator, PositionIndexAscending, PositionIndexDescending,
};

/// The node attribute a sort is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum SortType {
    Alphabetic,
    Insertion,
    Position,
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortType::Alphabetic => "alphabetic",
            SortType::Insertion => "insertion",
            SortType::Position => "position",
        };
        write!(f, "{}", name)
    }
}

/// Runtime selection over the ordering strategies.
///
/// Holds the currently selected sort type and direction on behalf of a
/// navigation component and hands out the matching strategy. Defaults to
/// alphabetic ascending.
#[derive(Debug, Clone)]
pub struct UserSitemapSorters {
    sort_type: SortType,
    ascending: bool,
}

impl UserSitemapSorters {
    pub fn new() -> Self {
        UserSitemapSorters {
            sort_type: SortType::Alphabetic,
            ascending: true,
        }
    }

    /// Every available strategy, for rendering a sort-order selection menu
    /// from the strategies' `name_key`s.
    pub fn available() -> [&'static dyn NodeComparator; 6] {
        [
            &AlphabeticAscending,
            &AlphabeticDescending,
            &InsertionOrderAscending,
            &InsertionOrderDescending,
            &PositionIndexAscending,
            &PositionIndexDescending,
        ]
    }

    pub fn sort_type(&self) -> SortType {
        self.sort_type
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    pub fn set_sort_type(&mut self, sort_type: SortType) {
        debug!(?sort_type, "sort type selected");
        self.sort_type = sort_type;
    }

    pub fn set_sort_ascending(&mut self, ascending: bool) {
        debug!(ascending, "sort direction selected");
        self.ascending = ascending;
    }

    /// The strategy matching the current selection.
    pub fn comparator(&self) -> &'static dyn NodeComparator {
        match (self.sort_type, self.ascending) {
            (SortType::Alphabetic, true) => &AlphabeticAscending,
            (SortType::Alphabetic, false) => &AlphabeticDescending,
            (SortType::Insertion, true) => &InsertionOrderAscending,
            (SortType::Insertion, false) => &InsertionOrderDescending,
            (SortType::Position, true) => &PositionIndexAscending,
            (SortType::Position, false) => &PositionIndexDescending,
        }
    }
}

impl Default for UserSitemapSorters {
    fn default() -> Self {
        UserSitemapSorters::new()
    }
}
