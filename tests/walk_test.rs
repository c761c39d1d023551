//! Depth-first walk with visitor hooks.

use serde_json::json;

use taxonomy::{Node, NodeRef, Taxonomy, Visitor};

#[derive(Default)]
struct Counter {
    node_start: usize,
    node_end: usize,
    level_start: usize,
    level_end: usize,
    visited: Vec<String>,
}

impl Visitor for Counter {
    fn on_level_start(&mut self, _level: usize) {
        self.level_start += 1;
    }

    fn on_level_end(&mut self, _level: usize) {
        self.level_end += 1;
    }

    fn on_node_start(&mut self, node: NodeRef<'_>) {
        self.node_start += 1;
        self.visited.push(node.id().to_string());
    }

    fn on_node_end(&mut self, _node: NodeRef<'_>) {
        self.node_end += 1;
    }
}

fn chain(len: usize) -> (Taxonomy, Vec<String>) {
    let mut taxonomy = Taxonomy::new();
    let mut ids = Vec::new();
    let mut parent: Option<Node> = None;
    for n in 1..=len {
        let node = taxonomy
            .add_node(Node::new(format!("n{n}")), parent.as_ref(), None)
            .unwrap()
            .unwrap();
        ids.push(node.id.clone());
        parent = Some(node);
    }
    (taxonomy, ids)
}

#[test]
fn given_chain_of_three_when_walked_then_every_hook_fires_per_node_and_level() {
    let (taxonomy, ids) = chain(3);
    let mut counter = Counter::default();

    taxonomy.walk(&mut counter, None);

    assert_eq!(counter.node_start, 3);
    assert_eq!(counter.node_end, 3);
    assert_eq!(counter.level_start, 3);
    assert_eq!(counter.level_end, 3);
    assert_eq!(counter.visited, ids);
}

#[test]
fn given_max_depth_when_walked_then_traversal_truncated_at_that_level() {
    let (taxonomy, _) = chain(3);
    let mut counter = Counter::default();

    taxonomy.walk(&mut counter, Some(2));

    assert_eq!(counter.node_start, 2);
    assert_eq!(counter.node_end, 1);
    assert_eq!(counter.level_start, 2);
    assert_eq!(counter.level_end, 1);
}

#[test]
fn given_empty_tree_when_walked_then_only_outer_level_fires() {
    let mut counter = Counter::default();

    Taxonomy::new().walk(&mut counter, None);

    assert_eq!(counter.level_start, 1);
    assert_eq!(counter.level_end, 1);
    assert_eq!(counter.node_start, 0);
}

#[test]
fn given_root_with_falsy_data_when_walked_then_root_hooks_skipped_children_visited() {
    let mut taxonomy = Taxonomy::new();
    let root = taxonomy.add_node(Node::new(json!(0)), None, None).unwrap().unwrap();
    let child = taxonomy.insert(Node::new("child"), &root.id, None).unwrap().unwrap();
    let mut counter = Counter::default();

    taxonomy.walk(&mut counter, None);

    assert_eq!(counter.visited, vec![child.id]);
    assert_eq!(counter.node_end, 1);
}

#[test]
fn given_siblings_when_walked_then_visited_in_order() {
    let mut taxonomy = Taxonomy::new();
    let root = taxonomy.add_node(Node::new("root"), None, None).unwrap().unwrap();
    let a = taxonomy.insert(Node::new("a"), &root.id, None).unwrap().unwrap();
    let b = taxonomy.insert(Node::new("b"), &root.id, None).unwrap().unwrap();
    let first = taxonomy.insert(Node::new("first"), &root.id, Some(0)).unwrap().unwrap();
    let mut counter = Counter::default();

    taxonomy.walk(&mut counter, None);

    assert_eq!(counter.visited, vec![root.id, first.id, a.id, b.id]);
}
