use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::i18n::{LabelKey, Locale, Translate};
use crate::sitemap::{MasterNode, NodeId, SitemapError, UserSitemap, UserSitemapNode};

const PAGE_KEYS: [LabelKey; 9] = [
    LabelKey::Home,
    LabelKey::PublicHome,
    LabelKey::PrivateHome,
    LabelKey::Login,
    LabelKey::Logout,
    LabelKey::Settings,
    LabelKey::Notifications,
    LabelKey::MessageBox,
    LabelKey::SystemAccount,
];

/// A standalone node with the given position index, for exercising
/// comparators without building a whole sitemap.
pub fn node_at_position(position_index: i32) -> UserSitemapNode {
    let master = MasterNode::new(0, "page".to_string(), LabelKey::Home, position_index);
    UserSitemapNode::new(master, LabelKey::Home.name().to_string())
}

/// The small fixture sitemap used across tests: two top-level sections with
/// a handful of nested pages each.
pub fn simple_sitemap(
    locale: Locale,
    translate: &Translate,
) -> Result<UserSitemap, SitemapError> {
    let mut map = UserSitemap::new(locale);
    map.insert(None, "home", LabelKey::Home, translate)?;
    let public = map.insert(None, "public", LabelKey::PublicHome, translate)?;
    map.insert(Some(public), "login", LabelKey::Login, translate)?;
    map.insert(Some(public), "messages", LabelKey::MessageBox, translate)?;
    let private = map.insert(None, "private", LabelKey::PrivateHome, translate)?;
    let settings = map.insert(Some(private), "settings", LabelKey::Settings, translate)?;
    map.insert(Some(settings), "notifications", LabelKey::Notifications, translate)?;
    map.insert(Some(settings), "account", LabelKey::SystemAccount, translate)?;
    map.insert(Some(private), "logout", LabelKey::Logout, translate)?;
    Ok(map)
}

/// A randomized sitemap of `node_count` nodes. The same seed always produces
/// the same tree.
pub fn random_sitemap(
    seed: u64,
    node_count: usize,
    locale: Locale,
    translate: &Translate,
) -> Result<UserSitemap, SitemapError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut map = UserSitemap::new(locale);
    let mut ids: Vec<NodeId> = Vec::with_capacity(node_count);
    for i in 0..node_count {
        let parent = if ids.is_empty() || rng.gen_bool(0.3) {
            None
        } else {
            Some(ids[rng.gen_range(0..ids.len())])
        };
        let key = PAGE_KEYS[rng.gen_range(0..PAGE_KEYS.len())];
        let id = map.insert(parent, &format!("page-{}", i), key, translate)?;
        ids.push(id);
    }
    Ok(map)
}
