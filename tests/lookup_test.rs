//! Lookups by id, by parent relation and by slug path.

use rstest::{fixture, rstest};

use taxonomy::{Node, Taxonomy};

struct News {
    taxonomy: Taxonomy,
    news: String,
    local: String,
    sports: String,
    football: String,
}

/// news/{local, sports/football}, plus a second root "archive"
#[fixture]
fn news() -> News {
    let mut taxonomy = Taxonomy::new();
    let news = taxonomy.add_node(Node::new("News"), None, None).unwrap().unwrap();
    let local = taxonomy.insert(Node::new("Local"), &news.id, None).unwrap().unwrap();
    let sports = taxonomy.insert(Node::new("Sports"), &news.id, None).unwrap().unwrap();
    let football = taxonomy
        .insert(Node::new("Football"), &sports.id, None)
        .unwrap()
        .unwrap();
    taxonomy.add_node(Node::new("Archive"), None, None).unwrap();

    News {
        taxonomy,
        news: news.id,
        local: local.id,
        sports: sports.id,
        football: football.id,
    }
}

// ============================================================
// find / find_parent_child
// ============================================================

#[rstest]
fn given_nested_id_when_find_then_returns_node(news: News) {
    let found = news.taxonomy.find(&news.football).unwrap();
    assert_eq!(found.data(), "Football");
}

#[rstest]
fn given_unknown_id_when_find_then_none(news: News) {
    assert!(news.taxonomy.find("missing").is_none());
    assert!(!news.taxonomy.contains("missing"));
}

#[rstest]
fn given_child_id_when_find_parent_child_then_returns_parent_and_position(news: News) {
    let pc = news.taxonomy.find_parent_child(&news.sports).unwrap();

    assert_eq!(pc.parent.id(), news.news);
    assert_eq!(pc.child.id(), news.sports);
    assert_eq!(pc.position, 1);
}

#[rstest]
fn given_root_id_when_find_parent_child_then_none(news: News) {
    assert!(news.taxonomy.find_parent_child(&news.news).is_none());
}

// ============================================================
// find_by_path
// ============================================================

#[rstest]
#[case::absolute("/news/sports/football")]
#[case::relative("news/sports/football")]
#[case::trailing("/news/sports/football/")]
fn given_slug_path_when_find_by_path_then_resolves_id(news: News, #[case] path: &str) {
    assert_eq!(news.taxonomy.find_by_path(path), Some(news.football.as_str()));
}

#[rstest]
fn given_root_slug_when_find_by_path_then_resolves_root(news: News) {
    assert_eq!(news.taxonomy.find_by_path("/news"), Some(news.news.as_str()));
    assert_eq!(news.taxonomy.find_by_path("news/local"), Some(news.local.as_str()));
}

#[rstest]
#[case::empty("")]
#[case::slash("/")]
#[case::unknown_root("/weather")]
#[case::unknown_child("/news/weather")]
#[case::too_deep("/news/local/more")]
#[case::label_not_slug("/News")]
fn given_unresolvable_path_when_find_by_path_then_none(news: News, #[case] path: &str) {
    assert_eq!(news.taxonomy.find_by_path(path), None);
}

#[test]
fn given_duplicate_slugs_when_find_by_path_then_first_sibling_wins() {
    let mut taxonomy = Taxonomy::new();
    let root = taxonomy.add_node(Node::new("root"), None, None).unwrap().unwrap();
    let first = taxonomy.insert(Node::new("Same"), &root.id, None).unwrap().unwrap();
    taxonomy.insert(Node::new("same"), &root.id, None).unwrap();

    assert_eq!(taxonomy.find_by_path("/root/same"), Some(first.id.as_str()));
}

#[test]
fn given_numeric_labels_when_find_by_path_then_matches_number_slugs() {
    let mut taxonomy = Taxonomy::new();
    let mut parent = taxonomy.add_node(Node::new(1), None, None).unwrap().unwrap();
    for n in 2..=9 {
        parent = taxonomy.insert(Node::new(n), &parent.id, None).unwrap().unwrap();
    }

    assert_eq!(
        taxonomy.find_by_path("/1/2/3/4/5/6/7/8/9"),
        Some(parent.id.as_str())
    );
}
