use clap::Parser;
use serde::Serialize;

use navmap::test_utils;
use navmap::{Locale, NodeComparator, NodeId, SortType, Translate, UserSitemap, UserSitemapSorters};

#[derive(Parser)]
struct Args {
    /// Locale to resolve labels in.
    #[clap(long, short, default_value = "en")]
    locale: String,
    /// Node attribute to sort by.
    #[clap(long, short, value_enum, default_value_t = SortType::Alphabetic)]
    sort_type: SortType,
    #[clap(long, short)]
    descending: bool,
    /// Generate a random sitemap with this many nodes instead of the fixture.
    #[clap(long, short)]
    random: Option<usize>,
    #[clap(long, default_value_t = 42)]
    seed: u64,
    /// Print the sorted tree as JSON instead of text.
    #[clap(long)]
    json: bool,
}

#[derive(Serialize)]
struct NodeReport {
    label: String,
    uri: String,
    position_index: i32,
    children: Vec<NodeReport>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let locale: Locale = args.locale.parse()?;
    let translate = Translate::new();
    let sitemap = match args.random {
        Some(count) => test_utils::random_sitemap(args.seed, count, locale, &translate)?,
        None => test_utils::simple_sitemap(locale, &translate)?,
    };

    let mut sorters = UserSitemapSorters::new();
    sorters.set_sort_type(args.sort_type);
    sorters.set_sort_ascending(!args.descending);
    let comparator = sorters.comparator();

    if args.json {
        let report = tree_report(&sitemap, None, comparator);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Sort strategies:");
    for strategy in UserSitemapSorters::available() {
        let marker = if strategy.name_key() == comparator.name_key() {
            "*"
        } else {
            " "
        };
        println!(
            " {} {}",
            marker,
            translate.label(strategy.name_key(), locale)?
        );
    }
    println!();
    print_tree(&sitemap, None, comparator, 0);
    Ok(())
}

fn print_tree(
    sitemap: &UserSitemap,
    parent: Option<NodeId>,
    comparator: &dyn NodeComparator,
    depth: usize,
) {
    for id in sitemap.sorted_child_ids(parent, comparator) {
        let Some(node) = sitemap.node(id) else { continue };
        println!(
            "{}{} [{}]",
            "  ".repeat(depth),
            node.label(),
            node.position_index()
        );
        print_tree(sitemap, Some(id), comparator, depth + 1);
    }
}

fn tree_report(
    sitemap: &UserSitemap,
    parent: Option<NodeId>,
    comparator: &dyn NodeComparator,
) -> Vec<NodeReport> {
    let mut reports = Vec::new();
    for id in sitemap.sorted_child_ids(parent, comparator) {
        let (Some(node), Some(uri)) = (sitemap.node(id), sitemap.uri(id)) else {
            continue;
        };
        reports.push(NodeReport {
            label: node.label().to_string(),
            uri,
            position_index: node.position_index(),
            children: tree_report(sitemap, Some(id), comparator),
        });
    }
    reports
}
