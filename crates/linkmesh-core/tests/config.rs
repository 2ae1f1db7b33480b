//! Tests for config-driven store construction

use linkmesh_core::config::{GraphConfig, SearchStrategy};
use linkmesh_core::graph::{GraphStore, PathFinder};

#[test]
fn test_store_uses_configured_strategy() {
    let config = GraphConfig::from_toml_str(
        r#"
[search]
strategy = "iterative"
"#,
    )
    .unwrap();
    let mut store = GraphStore::with_config(config);
    let a = store.add("a");
    let b = store.add("b");
    store.connect(a, b, 2).unwrap();

    assert_eq!(store.config().search.strategy, SearchStrategy::Iterative);
    let path = store.find_path(a, b).unwrap().unwrap();
    assert_eq!(path.cost(), 2);
}

#[test]
fn test_auto_switches_above_recursion_limit() {
    let config = GraphConfig::from_toml_str("[search]\nrecursion_limit = 3\n").unwrap();
    let mut store = GraphStore::with_config(config);
    for i in 0..3 {
        store.add(i);
    }

    let limit = store.config().search.recursion_limit;
    assert_eq!(
        store.config().search.strategy.resolve(store.len(), limit),
        SearchStrategy::Recursive
    );
    store.add(3);
    assert_eq!(
        store.config().search.strategy.resolve(store.len(), limit),
        SearchStrategy::Iterative
    );
}

#[test]
fn test_set_config_replaces_search_settings() {
    let mut store: GraphStore<u8> = GraphStore::new();
    let mut config = GraphConfig::default();
    config.search.strategy = SearchStrategy::Recursive;
    store.set_config(config.clone());
    assert_eq!(store.config(), &config);

    let finder = PathFinder::new(&store, store.config().search.strategy);
    assert_eq!(finder.strategy(), SearchStrategy::Recursive);
}
