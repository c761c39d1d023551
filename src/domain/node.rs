//! Node model and normalizer.
//!
//! A [`Node`] is the owned, detached form of a taxonomy element. Callers build
//! nodes (inline or through [`create_node`]), hand them to the mutators, and get
//! owned snapshots back. Inside the engine nodes live in the arena instead.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use crate::domain::error::{DomainError, DomainResult};

/// Attribute key mirroring the node identity for external consumers.
pub const ID_ATTRIBUTE: &str = "id";
/// Attribute key holding the normalized slug.
pub const SLUG_ATTRIBUTE: &str = "slug";

const ID_PREFIX: &str = "tax_";

/// String-keyed attribute mapping carried by every node.
pub type Attributes = Map<String, Value>;

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static ILLEGAL_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_\-]+").expect("slug pattern is valid"));

/// Detached taxonomy node.
///
/// Unknown fields survive a serde round trip through `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Identity; empty until the node is normalized
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Caller payload, required before the node can join a tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub is_leaf: bool,
    /// Arbitrary extra properties, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Ordered sequence of root-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    #[serde(default)]
    pub roots: Vec<Node>,
}

impl Node {
    /// Inline node carrying `data` and nothing else.
    pub fn new(data: impl Into<Value>) -> Self {
        Self {
            data: Some(data.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn slug(&self) -> Option<&Value> {
        self.attributes.get(SLUG_ATTRIBUTE)
    }

    /// Identity this node will carry once normalized: the `id` attribute wins
    /// over the `id` field.
    pub fn effective_id(&self) -> Option<String> {
        self.attributes
            .get(ID_ATTRIBUTE)
            .and_then(id_text)
            .or_else(|| (!self.id.is_empty()).then(|| self.id.clone()))
    }

    /// Shallow copy under a fresh identity.
    ///
    /// The caller-supplied `id` attribute is dropped, otherwise normalization
    /// would restore the duplicated identity.
    pub(crate) fn reidentified(&self) -> Self {
        let mut clone = self.clone();
        clone.id = generate_id();
        clone.attributes.remove(ID_ATTRIBUTE);
        clone
    }
}

/// Constructs a detached, normalized node.
///
/// `extra` is shallow-merged onto the node before normalization, so `id`,
/// `attributes`, `children` and `data` given there pre-seed the node. Any other
/// key is kept verbatim in [`Node::extra`].
pub fn create_node(
    children: Option<Vec<Node>>,
    data: Option<Value>,
    extra: Option<Map<String, Value>>,
) -> DomainResult<Node> {
    let data = data.filter(|d| !d.is_null()).ok_or(DomainError::RequireField {
        context: "node",
    })?;
    let mut node = Node {
        data: Some(data),
        children: children.unwrap_or_default(),
        ..Node::default()
    };

    for (key, value) in extra.unwrap_or_default() {
        match key.as_str() {
            "id" => {
                node.id = id_text(&value).ok_or_else(|| DomainError::InvalidField {
                    field: key.clone(),
                    reason: "expected a string or number".to_string(),
                })?;
            }
            "attributes" => match value {
                Value::Object(attributes) => node.attributes = attributes,
                _ => {
                    return Err(DomainError::InvalidField {
                        field: key,
                        reason: "expected an object".to_string(),
                    })
                }
            },
            "children" => {
                node.children =
                    serde_json::from_value(value).map_err(|e| DomainError::InvalidField {
                        field: key.clone(),
                        reason: e.to_string(),
                    })?;
            }
            "data" if !value.is_null() => node.data = Some(value),
            // derived, recomputed below
            "data" | "isLeaf" => {}
            _ => {
                node.extra.insert(key, value);
            }
        }
    }

    normalize(&mut node);
    Ok(node)
}

/// Assigns identity, attributes, slug and leaf flag. Idempotent.
pub fn normalize(node: &mut Node) {
    if node.id.is_empty() {
        node.id = generate_id();
    }

    match node.attributes.get(ID_ATTRIBUTE).and_then(id_text) {
        Some(declared) if declared != node.id => node.id = declared,
        _ => {
            node.attributes
                .insert(ID_ATTRIBUTE.to_string(), Value::String(node.id.clone()));
        }
    }

    let slug = match node.attributes.get(SLUG_ATTRIBUTE) {
        None => match &node.data {
            Some(Value::String(data)) => Some(Value::String(slugify(data))),
            Some(number @ Value::Number(_)) => Some(number.clone()),
            _ => None,
        },
        Some(Value::String(raw)) => Some(Value::String(slugify(raw))),
        Some(_) => None,
    };
    if let Some(slug) = slug {
        node.attributes.insert(SLUG_ATTRIBUTE.to_string(), slug);
    }

    node.is_leaf = node.children.is_empty();
    trace!(id = %node.id, "normalized node");
}

/// URL-safe slug: trimmed, whitespace collapsed to `-`, lower-cased, and
/// stripped of everything outside `[A-Za-z0-9_-]`.
pub fn slugify(raw: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(raw.trim(), "-").to_lowercase();
    ILLEGAL_SLUG_CHARS.replace_all(&collapsed, "").into_owned()
}

/// Process-unique identifier: monotonic counter plus a millisecond timestamp.
pub fn generate_id() -> String {
    let n = ID_COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
    format!("{}{}{}", ID_PREFIX, n, Utc::now().timestamp_millis())
}

/// Textual form of a value as it appears in paths and markup.
pub fn value_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Loose truthiness: null, false, zero and the empty string are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
