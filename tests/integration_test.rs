#[cfg(test)]
mod tests {
    use navmap::test_utils::{random_sitemap, simple_sitemap};
    use navmap::{
        InsertionOrderAscending, Locale, LocaleChangeListener, NodeComparator, NodeId,
        PositionIndexAscending, PositionIndexDescending, SortType, Translate, UserSitemap,
        UserSitemapSorters,
    };

    fn top_level_labels(sitemap: &UserSitemap, comparator: &dyn NodeComparator) -> Vec<String> {
        sitemap
            .sorted_children(None, comparator)
            .iter()
            .map(|node| node.label().to_string())
            .collect()
    }

    #[test]
    fn test_position_sort_follows_insertion_order() {
        let translate = Translate::new();
        let sitemap = simple_sitemap(Locale::En, &translate).unwrap();

        let labels = top_level_labels(&sitemap, &PositionIndexAscending);
        assert_eq!(labels, vec!["Home", "Public Home", "Private Home"]);

        let labels = top_level_labels(&sitemap, &PositionIndexDescending);
        assert_eq!(labels, vec!["Private Home", "Public Home", "Home"]);
    }

    #[test]
    fn test_registry_selection_drives_sort_order() {
        let translate = Translate::new();
        let sitemap = simple_sitemap(Locale::En, &translate).unwrap();
        let mut sorters = UserSitemapSorters::new();

        // Default is alphabetic ascending.
        let labels = top_level_labels(&sitemap, sorters.comparator());
        assert_eq!(labels, vec!["Home", "Private Home", "Public Home"]);

        sorters.set_sort_type(SortType::Position);
        let labels = top_level_labels(&sitemap, sorters.comparator());
        assert_eq!(labels, vec!["Home", "Public Home", "Private Home"]);

        sorters.set_sort_ascending(false);
        let labels = top_level_labels(&sitemap, sorters.comparator());
        assert_eq!(labels, vec!["Private Home", "Public Home", "Home"]);

        sorters.set_sort_type(SortType::Insertion);
        sorters.set_sort_ascending(true);
        let ids: Vec<u64> = sitemap
            .sorted_children(None, sorters.comparator())
            .iter()
            .map(|node| node.id())
            .collect();
        let mut sorted_ids = ids.clone();
        sorted_ids.sort();
        assert_eq!(ids, sorted_ids);
    }

    #[test]
    fn test_locale_change_reorders_alphabetic_sort() {
        let translate = Translate::new();
        let mut sitemap = simple_sitemap(Locale::En, &translate).unwrap();
        let mut sorters = UserSitemapSorters::new();

        sitemap.locale_changed(Locale::De, &translate).unwrap();

        let labels = top_level_labels(&sitemap, sorters.comparator());
        assert_eq!(
            labels,
            vec![
                "Private Startseite",
                "Startseite",
                "Öffentliche Startseite"
            ]
        );

        // Position order is locale-independent.
        sorters.set_sort_type(SortType::Position);
        let labels = top_level_labels(&sitemap, sorters.comparator());
        assert_eq!(
            labels,
            vec![
                "Startseite",
                "Öffentliche Startseite",
                "Private Startseite"
            ]
        );
    }

    #[test]
    fn test_strategy_menu_resolves_in_every_locale() {
        let translate = Translate::new();
        for locale in Locale::ALL {
            for strategy in UserSitemapSorters::available() {
                let label = translate.label(strategy.name_key(), locale).unwrap();
                assert!(!label.is_empty());
            }
        }
    }

    #[test]
    fn test_random_sitemap_sorts_every_sibling_group() {
        let translate = Translate::new();
        let sitemap = random_sitemap(7, 40, Locale::En, &translate).unwrap();
        assert_eq!(sitemap.node_count(), 40);

        fn check_group(sitemap: &UserSitemap, parent: Option<NodeId>) {
            let children = sitemap.sorted_children(parent, &PositionIndexAscending);
            for pair in children.windows(2) {
                assert!(pair[0].position_index() <= pair[1].position_index());
            }
            for id in sitemap.sorted_child_ids(parent, &InsertionOrderAscending) {
                check_group(sitemap, Some(id));
            }
        }
        check_group(&sitemap, None);
    }

    #[test]
    fn test_random_sitemap_is_deterministic_per_seed() {
        let translate = Translate::new();
        let first = random_sitemap(3, 25, Locale::En, &translate).unwrap();
        let second = random_sitemap(3, 25, Locale::En, &translate).unwrap();

        let uris = |sitemap: &UserSitemap| -> Vec<String> {
            let mut all = Vec::new();
            fn walk(sitemap: &UserSitemap, parent: Option<NodeId>, all: &mut Vec<String>) {
                for id in sitemap.sorted_child_ids(parent, &InsertionOrderAscending) {
                    if let Some(uri) = sitemap.uri(id) {
                        all.push(uri);
                    }
                    walk(sitemap, Some(id), all);
                }
            }
            walk(sitemap, None, &mut all);
            all
        };
        assert_eq!(uris(&first), uris(&second));
    }
}
