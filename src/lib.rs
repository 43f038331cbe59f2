//! Ordering layer for a web application's navigation sitemap.
//!
//! The crate models the navigation tree a user sees ([`UserSitemap`]), a
//! family of interchangeable ordering strategies over its nodes
//! ([`NodeComparator`]), a runtime-selectable registry of those strategies
//! for sort-order menus ([`UserSitemapSorters`]), and the load-once label
//! catalog the strategies identify themselves through ([`Translate`]).
//!
//! Position indices record insertion order and never change; labels and
//! collation keys are the only mutable node state, and only through a locale
//! change.

pub mod i18n;
pub mod sitemap;
pub mod test_utils;

pub use i18n::{CollationKey, LabelKey, Locale, Translate, UnsupportedLocaleError};
pub use sitemap::comparator::{
    AlphabeticAscending, AlphabeticDescending, InsertionOrderAscending, InsertionOrderDescending,
    NodeComparator, PositionIndexAscending, PositionIndexDescending, SortType, UserSitemapSorters,
};
pub use sitemap::{
    LocaleChangeListener, MasterNode, NodeId, SitemapError, UserSitemap, UserSitemapNode,
};
