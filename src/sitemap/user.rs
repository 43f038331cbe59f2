use rayon::prelude::*;
use tracing::debug;

use crate::i18n::{LabelKey, Locale, Translate, UnsupportedLocaleError};

use super::comparator::NodeComparator;
use super::{MasterNode, NodeId, SitemapError, UserSitemapNode};

/// Implemented by anything that has to refresh locale-dependent state when
/// the user's locale changes. The embedding application decides when to call
/// it; this crate owns no listener registry.
pub trait LocaleChangeListener {
    fn locale_changed(
        &mut self,
        locale: Locale,
        translate: &Translate,
    ) -> Result<(), UnsupportedLocaleError>;
}

struct Entry {
    node: UserSitemapNode,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// The navigation tree presented to one user, with labels resolved for that
/// user's locale.
///
/// Nodes are stored in an arena in insertion order; a node's `id` doubles as
/// its arena index because nodes are never removed. Insertion assigns the
/// position index (the per-sibling insertion counter) unless the caller
/// supplies one explicitly.
pub struct UserSitemap {
    entries: Vec<Entry>,
    roots: Vec<usize>,
    locale: Locale,
}

impl UserSitemap {
    pub fn new(locale: Locale) -> Self {
        UserSitemap {
            entries: Vec::new(),
            roots: Vec::new(),
            locale,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn node_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a child of `parent` (a root when `parent` is `None`), taking
    /// the next free position index among its siblings.
    pub fn insert(
        &mut self,
        parent: Option<NodeId>,
        segment: &str,
        label_key: LabelKey,
        translate: &Translate,
    ) -> Result<NodeId, SitemapError> {
        self.insert_inner(parent, segment, label_key, None, translate)
    }

    /// Appends a child with an explicit position index. Indices are not
    /// required to be unique, so this can create ties.
    pub fn insert_at(
        &mut self,
        parent: Option<NodeId>,
        segment: &str,
        label_key: LabelKey,
        position_index: i32,
        translate: &Translate,
    ) -> Result<NodeId, SitemapError> {
        self.insert_inner(parent, segment, label_key, Some(position_index), translate)
    }

    fn insert_inner(
        &mut self,
        parent: Option<NodeId>,
        segment: &str,
        label_key: LabelKey,
        position_index: Option<i32>,
        translate: &Translate,
    ) -> Result<NodeId, SitemapError> {
        if segment.is_empty() || segment.contains('/') {
            return Err(SitemapError::InvalidSegment(segment.to_string()));
        }
        if let Some(NodeId(parent_index)) = parent {
            if parent_index >= self.entries.len() {
                return Err(SitemapError::UnknownParent(NodeId(parent_index)));
            }
        }

        let sibling_count = match parent {
            Some(NodeId(parent_index)) => self.entries[parent_index].children.len(),
            None => self.roots.len(),
        };
        let position_index = position_index.unwrap_or(sibling_count as i32);

        let index = self.entries.len();
        let master = MasterNode::new(index as u64, segment.to_string(), label_key, position_index);
        let label = translate.label(label_key, self.locale)?.to_string();
        self.entries.push(Entry {
            node: UserSitemapNode::new(master, label),
            parent: parent.map(|NodeId(parent_index)| parent_index),
            children: Vec::new(),
        });

        match parent {
            Some(NodeId(parent_index)) => self.entries[parent_index].children.push(index),
            None => self.roots.push(index),
        }
        debug!(segment, position_index, "added sitemap node");
        Ok(NodeId(index))
    }

    pub fn node(&self, id: NodeId) -> Option<&UserSitemapNode> {
        self.entries.get(id.0).map(|entry| &entry.node)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &UserSitemapNode> {
        self.entries.iter().map(|entry| &entry.node)
    }

    /// Children of `parent` in insertion order.
    pub fn children(&self, parent: Option<NodeId>) -> Vec<&UserSitemapNode> {
        self.child_indices(parent)
            .iter()
            .map(|&index| &self.entries[index].node)
            .collect()
    }

    /// Children of `parent` ordered by `comparator`. The sort is stable, so
    /// nodes the comparator considers equivalent keep insertion order.
    pub fn sorted_children(
        &self,
        parent: Option<NodeId>,
        comparator: &dyn NodeComparator,
    ) -> Vec<&UserSitemapNode> {
        self.sorted_child_ids(parent, comparator)
            .into_iter()
            .map(|NodeId(index)| &self.entries[index].node)
            .collect()
    }

    /// Ids of the children of `parent`, ordered by `comparator`.
    pub fn sorted_child_ids(
        &self,
        parent: Option<NodeId>,
        comparator: &dyn NodeComparator,
    ) -> Vec<NodeId> {
        let mut indices = self.child_indices(parent).to_vec();
        indices.sort_by(|&a, &b| comparator.compare(&self.entries[a].node, &self.entries[b].node));
        indices.into_iter().map(NodeId).collect()
    }

    fn child_indices(&self, parent: Option<NodeId>) -> &[usize] {
        match parent {
            Some(NodeId(parent_index)) => self
                .entries
                .get(parent_index)
                .map(|entry| entry.children.as_slice())
                .unwrap_or(&[]),
            None => &self.roots,
        }
    }

    /// Full uri of a node, segments joined with `/` from the root.
    pub fn uri(&self, id: NodeId) -> Option<String> {
        if id.0 >= self.entries.len() {
            return None;
        }
        let mut segments = Vec::new();
        let mut current = Some(id.0);
        while let Some(index) = current {
            segments.push(self.entries[index].node.master().uri_segment());
            current = self.parent_of(index);
        }
        segments.reverse();
        Some(segments.join("/"))
    }

    fn parent_of(&self, index: usize) -> Option<usize> {
        self.entries[index].parent
    }

    /// Looks a node up by its full uri. Scans one tree level per segment.
    pub fn node_for_uri(&self, uri: &str) -> Option<NodeId> {
        let mut segments = uri.split('/').filter(|segment| !segment.is_empty());
        let first = segments.next()?;
        let mut current = self.find_child(&self.roots, first)?;
        for segment in segments {
            let children = &self.entries[current].children;
            current = self.find_child(children, segment)?;
        }
        Some(NodeId(current))
    }

    fn find_child(&self, indices: &[usize], segment: &str) -> Option<usize> {
        indices
            .iter()
            .copied()
            .find(|&index| self.entries[index].node.master().uri_segment() == segment)
    }
}

impl LocaleChangeListener for UserSitemap {
    /// Resets every node's label and collation key to the new locale. The
    /// tree structure and position indices are untouched.
    fn locale_changed(
        &mut self,
        locale: Locale,
        translate: &Translate,
    ) -> Result<(), UnsupportedLocaleError> {
        if !translate.is_supported(locale) {
            return Err(UnsupportedLocaleError {
                tag: locale.tag().to_string(),
            });
        }
        debug!(%locale, "responding to locale change");
        self.locale = locale;
        self.entries.par_iter_mut().for_each(|entry| {
            let key = entry.node.master().label_key();
            let label = translate.label(key, locale).unwrap_or_else(|_| key.name());
            entry.node.relabel(label.to_string());
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sitemap::comparator::{AlphabeticAscending, PositionIndexAscending};

    fn sitemap() -> (UserSitemap, Translate) {
        (UserSitemap::new(Locale::En), Translate::new())
    }

    #[test]
    fn test_insert_assigns_sequential_position_indices_per_sibling_group() {
        let (mut map, translate) = sitemap();
        let root = map.insert(None, "home", LabelKey::Home, &translate).unwrap();
        let a = map
            .insert(Some(root), "settings", LabelKey::Settings, &translate)
            .unwrap();
        let b = map
            .insert(Some(root), "messages", LabelKey::MessageBox, &translate)
            .unwrap();
        let other_root = map.insert(None, "login", LabelKey::Login, &translate).unwrap();

        assert_eq!(map.node(root).unwrap().position_index(), 0);
        assert_eq!(map.node(a).unwrap().position_index(), 0);
        assert_eq!(map.node(b).unwrap().position_index(), 1);
        assert_eq!(map.node(other_root).unwrap().position_index(), 1);
    }

    #[test]
    fn test_insert_at_allows_ties() {
        let (mut map, translate) = sitemap();
        let a = map
            .insert_at(None, "a", LabelKey::Home, 7, &translate)
            .unwrap();
        let b = map
            .insert_at(None, "b", LabelKey::Login, 7, &translate)
            .unwrap();
        assert_eq!(
            map.node(a).unwrap().position_index(),
            map.node(b).unwrap().position_index()
        );
    }

    #[test]
    fn test_insert_rejects_unknown_parent() {
        let (mut map, translate) = sitemap();
        let result = map.insert(Some(NodeId(3)), "home", LabelKey::Home, &translate);
        assert!(matches!(result, Err(SitemapError::UnknownParent(NodeId(3)))));
    }

    #[test]
    fn test_insert_rejects_invalid_segment() {
        let (mut map, translate) = sitemap();
        assert!(matches!(
            map.insert(None, "", LabelKey::Home, &translate),
            Err(SitemapError::InvalidSegment(_))
        ));
        assert!(matches!(
            map.insert(None, "a/b", LabelKey::Home, &translate),
            Err(SitemapError::InvalidSegment(_))
        ));
    }

    #[test]
    fn test_uri_round_trips_through_lookup() {
        let (mut map, translate) = sitemap();
        let root = map
            .insert(None, "private", LabelKey::PrivateHome, &translate)
            .unwrap();
        let child = map
            .insert(Some(root), "settings", LabelKey::Settings, &translate)
            .unwrap();
        let leaf = map
            .insert(Some(child), "notifications", LabelKey::Notifications, &translate)
            .unwrap();

        let uri = map.uri(leaf).unwrap();
        assert_eq!(uri, "private/settings/notifications");
        assert_eq!(map.node_for_uri(&uri), Some(leaf));
        assert_eq!(map.node_for_uri("private/missing"), None);
        assert_eq!(map.node_for_uri(""), None);
    }

    #[test]
    fn test_sorted_children_follows_comparator() {
        let (mut map, translate) = sitemap();
        map.insert_at(None, "settings", LabelKey::Settings, 5, &translate)
            .unwrap();
        map.insert_at(None, "home", LabelKey::Home, 1, &translate)
            .unwrap();
        map.insert_at(None, "login", LabelKey::Login, 3, &translate)
            .unwrap();

        let by_position = map.sorted_children(None, &PositionIndexAscending);
        let positions: Vec<i32> = by_position.iter().map(|n| n.position_index()).collect();
        assert_eq!(positions, vec![1, 3, 5]);

        let by_label = map.sorted_children(None, &AlphabeticAscending);
        let labels: Vec<&str> = by_label.iter().map(|n| n.label()).collect();
        assert_eq!(labels, vec!["Home", "Log In", "Settings"]);
    }

    #[test]
    fn test_locale_change_relabels_every_node() {
        let (mut map, translate) = sitemap();
        let root = map.insert(None, "home", LabelKey::Home, &translate).unwrap();
        let child = map
            .insert(Some(root), "settings", LabelKey::Settings, &translate)
            .unwrap();
        assert_eq!(map.node(child).unwrap().label(), "Settings");

        map.locale_changed(Locale::De, &translate).unwrap();

        assert_eq!(map.locale(), Locale::De);
        assert_eq!(map.node(root).unwrap().label(), "Startseite");
        let node = map.node(child).unwrap();
        assert_eq!(node.label(), "Einstellungen");
        assert_eq!(node.collation_key().as_str(), "einstellungen");
    }

    #[test]
    fn test_locale_change_rejects_unsupported_locale() {
        let (mut map, _) = sitemap();
        let translate = Translate::with_locales(&[Locale::En]);
        let err = map.locale_changed(Locale::Fr, &translate).unwrap_err();
        assert_eq!(err.tag, "fr");
    }
}
