use std::cmp::Ordering;

use crate::i18n::LabelKey;

use super::UserSitemapNode;

mod sorters;

pub use sorters::{SortType, UserSitemapSorters};

/// Ordering strategy over user sitemap nodes.
///
/// Implementations are stateless and pure: `compare` reads one attribute of
/// each node and nothing else, and `name_key` is a constant identifying the
/// strategy to sort-order selection menus. All comparisons are three-way, so
/// extreme key values order correctly instead of wrapping.
pub trait NodeComparator: Send + Sync {
    fn compare(&self, a: &UserSitemapNode, b: &UserSitemapNode) -> Ordering;

    fn name_key(&self) -> LabelKey;
}

/// Orders nodes by position index, lowest first — the insertion order of
/// siblings into the sitemap. Nodes with equal indices are equivalent; their
/// relative order is whatever the caller's sort makes of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionIndexAscending;

impl NodeComparator for PositionIndexAscending {
    fn compare(&self, a: &UserSitemapNode, b: &UserSitemapNode) -> Ordering {
        a.position_index().cmp(&b.position_index())
    }

    fn name_key(&self) -> LabelKey {
        LabelKey::PositionIndexAscending
    }
}

/// Orders nodes by position index, highest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionIndexDescending;

impl NodeComparator for PositionIndexDescending {
    fn compare(&self, a: &UserSitemapNode, b: &UserSitemapNode) -> Ordering {
        b.position_index().cmp(&a.position_index())
    }

    fn name_key(&self) -> LabelKey {
        LabelKey::PositionIndexDescending
    }
}

/// Orders nodes by id, oldest first — insertion order over the whole
/// sitemap rather than among siblings.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionOrderAscending;

impl NodeComparator for InsertionOrderAscending {
    fn compare(&self, a: &UserSitemapNode, b: &UserSitemapNode) -> Ordering {
        a.id().cmp(&b.id())
    }

    fn name_key(&self) -> LabelKey {
        LabelKey::InsertionOrderAscending
    }
}

/// Orders nodes by id, newest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionOrderDescending;

impl NodeComparator for InsertionOrderDescending {
    fn compare(&self, a: &UserSitemapNode, b: &UserSitemapNode) -> Ordering {
        b.id().cmp(&a.id())
    }

    fn name_key(&self) -> LabelKey {
        LabelKey::InsertionOrderDescending
    }
}

/// Orders nodes by the collation key of their current label, so the result
/// follows the locale the labels were resolved for.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphabeticAscending;

impl NodeComparator for AlphabeticAscending {
    fn compare(&self, a: &UserSitemapNode, b: &UserSitemapNode) -> Ordering {
        a.collation_key().cmp(b.collation_key())
    }

    fn name_key(&self) -> LabelKey {
        LabelKey::AlphabeticAscending
    }
}

/// Reverse of [`AlphabeticAscending`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphabeticDescending;

impl NodeComparator for AlphabeticDescending {
    fn compare(&self, a: &UserSitemapNode, b: &UserSitemapNode) -> Ordering {
        b.collation_key().cmp(a.collation_key())
    }

    fn name_key(&self) -> LabelKey {
        LabelKey::AlphabeticDescending
    }
}
