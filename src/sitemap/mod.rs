use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::{CollationKey, LabelKey, UnsupportedLocaleError};

pub mod comparator;

mod user;

pub use user::{LocaleChangeListener, UserSitemap};

/// Handle to a node inside one [`UserSitemap`]. Handles from different
/// sitemaps are not interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("parent node {0:?} is not in the sitemap")]
    UnknownParent(NodeId),
    #[error("uri segment {0:?} is empty or contains '/'")]
    InvalidSegment(String),
    #[error(transparent)]
    UnsupportedLocale(#[from] UnsupportedLocaleError),
}

/// The user-independent identity of one navigable page.
///
/// `id` is an insertion counter over the whole sitemap and unique.
/// `position_index` records insertion order among siblings and is the sort
/// hint navigation menus use by default; it is assigned once at creation and
/// never changes, but uniqueness is not enforced, so explicit-position
/// insertion can create ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterNode {
    id: u64,
    uri_segment: String,
    label_key: LabelKey,
    position_index: i32,
}

impl MasterNode {
    pub(crate) fn new(id: u64, uri_segment: String, label_key: LabelKey, position_index: i32) -> Self {
        MasterNode {
            id,
            uri_segment,
            label_key,
            position_index,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn uri_segment(&self) -> &str {
        &self.uri_segment
    }

    pub fn label_key(&self) -> LabelKey {
        self.label_key
    }

    pub fn position_index(&self) -> i32 {
        self.position_index
    }
}

/// A master node plus the display state that depends on the user's locale.
///
/// Only `label` and `collation_key` change over the node's lifetime, and only
/// through a locale change; the master part is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSitemapNode {
    master: MasterNode,
    label: String,
    collation_key: CollationKey,
}

impl UserSitemapNode {
    pub(crate) fn new(master: MasterNode, label: String) -> Self {
        let collation_key = CollationKey::new(&label);
        UserSitemapNode {
            master,
            label,
            collation_key,
        }
    }

    pub(crate) fn relabel(&mut self, label: String) {
        self.collation_key = CollationKey::new(&label);
        self.label = label;
    }

    pub fn master(&self) -> &MasterNode {
        &self.master
    }

    pub fn id(&self) -> u64 {
        self.master.id
    }

    pub fn position_index(&self) -> i32 {
        self.master.position_index
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn collation_key(&self) -> &CollationKey {
        &self.collation_key
    }
}
