//! Path reconstruction from ancestor labels.

use taxonomy::{Node, Taxonomy};

#[test]
fn given_root_when_path_then_slash() {
    let mut taxonomy = Taxonomy::new();
    let root = taxonomy.add_node(Node::new("foo"), None, None).unwrap().unwrap();

    assert_eq!(taxonomy.path(&root.id), "/");
}

#[test]
fn given_unknown_id_when_path_then_slash() {
    assert_eq!(Taxonomy::new().path("missing"), "/");
}

#[test]
fn given_grandchild_when_path_then_lists_ancestor_labels() {
    let mut taxonomy = Taxonomy::new();
    let foo = taxonomy.add_node(Node::new("foo"), None, None).unwrap().unwrap();
    let bar = taxonomy.add_node(Node::new("bar"), Some(&foo), None).unwrap().unwrap();
    let grandchild = taxonomy
        .add_node(Node::new("grandchild"), Some(&bar), None)
        .unwrap()
        .unwrap();

    assert_eq!(taxonomy.path(&bar.id), "/foo/");
    assert_eq!(taxonomy.path(&grandchild.id), "/foo/bar/");
}

#[test]
fn given_great_grandchild_when_path_then_lists_three_ancestors_and_leaf_flags_hold() {
    let mut taxonomy = Taxonomy::new();
    let foo = taxonomy.add_node(Node::new("foo"), None, None).unwrap().unwrap();
    let bar = taxonomy.add_node(Node::new("bar"), Some(&foo), None).unwrap().unwrap();
    let grandchild = taxonomy
        .add_node(Node::new("grandchild"), Some(&bar), None)
        .unwrap()
        .unwrap();
    let great_grandchild = taxonomy
        .add_node(Node::new("greatGrandchild"), Some(&grandchild), None)
        .unwrap()
        .unwrap();

    assert_eq!(taxonomy.path(&great_grandchild.id), "/foo/bar/grandchild/");
    assert!(taxonomy.find(&great_grandchild.id).unwrap().is_leaf());
    assert!(!taxonomy.find(&grandchild.id).unwrap().is_leaf());
}

#[test]
fn given_sibling_branches_when_path_then_only_own_ancestors_listed() {
    let mut taxonomy = Taxonomy::new();
    let gg = taxonomy.add_node(Node::new("gg"), None, None).unwrap().unwrap();
    let gg2 = taxonomy.insert(Node::new("gg2"), &gg.id, None).unwrap().unwrap();
    let gg3 = taxonomy.insert(Node::new("gg3"), &gg2.id, None).unwrap().unwrap();
    let other = taxonomy.insert(Node::new("other"), &gg.id, None).unwrap().unwrap();

    assert_eq!(taxonomy.path(&gg3.id), "/gg/gg2/");
    assert_eq!(taxonomy.path(&other.id), "/gg/");
}

#[test]
fn given_chain_of_ten_when_path_of_deepest_then_lists_nine_labels() {
    let mut taxonomy = Taxonomy::new();
    let mut node = taxonomy.add_node(Node::new(1), None, None).unwrap().unwrap();
    for n in 2..=10 {
        node = taxonomy.insert(Node::new(n), &node.id, None).unwrap().unwrap();
    }

    assert_eq!(taxonomy.path(&node.id), "/1/2/3/4/5/6/7/8/9/");
}

#[test]
fn given_any_node_when_path_plus_slug_resolved_then_yields_same_id() {
    let mut taxonomy = Taxonomy::new();
    let news = taxonomy.add_node(Node::new("news"), None, None).unwrap().unwrap();
    let local = taxonomy.insert(Node::new("local"), &news.id, None).unwrap().unwrap();
    let events = taxonomy.insert(Node::new("events"), &local.id, None).unwrap().unwrap();
    let archive = taxonomy.add_node(Node::new("archive"), None, None).unwrap().unwrap();

    for id in [&local.id, &events.id, &archive.id] {
        let node = taxonomy.find(id).unwrap();
        let slug = node.slug().and_then(|s| s.as_str()).unwrap();
        let path = taxonomy.path(id);
        assert_eq!(taxonomy.find_by_path(&format!("{path}{slug}")), Some(id.as_str()));
    }
}
