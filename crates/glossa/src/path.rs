//! Dotted-path lookup into tree-shaped data.
//!
//! A path such as `user.items.0.name` is split on a separator and walked one
//! segment at a time. A missing segment, or a leaf reached before the path
//! ends, resolves to `None`; lookups never panic.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::Value as JsonValue;

use crate::types::{ParamNode, TranslationNode, Value};

/// A tree node that may have named children.
pub trait PathNode {
    /// The child named by `segment`, or `None` for leaves and missing names.
    fn child(&self, segment: &str) -> Option<&Self>;
}

/// A top-level mapping that a path starts from.
pub trait PathRoot {
    type Node: PathNode;

    /// The top-level entry named by `segment`.
    fn entry(&self, segment: &str) -> Option<&Self::Node>;
}

impl<N: PathNode> PathRoot for BTreeMap<String, N> {
    type Node = N;

    fn entry(&self, segment: &str) -> Option<&N> {
        self.get(segment)
    }
}

impl<N: PathNode, S: BuildHasher> PathRoot for HashMap<String, N, S> {
    type Node = N;

    fn entry(&self, segment: &str) -> Option<&N> {
        self.get(segment)
    }
}

/// Resolve `path` against `root`, splitting on `separator`.
///
/// An empty separator treats the whole path as a single segment.
///
/// ```
/// use glossa::{Value, args};
/// use glossa::path::resolve;
///
/// let args = args! { "user" => Value::from(serde_json::json!({ "tags": ["a", "b"] })) };
/// assert_eq!(resolve(&args, "user.tags.1", "."), Some(&Value::from("b")));
/// assert_eq!(resolve(&args, "user.tags.2", "."), None);
/// assert_eq!(resolve(&args, "user/tags/0", "/"), Some(&Value::from("a")));
/// ```
pub fn resolve<'a, R>(root: &'a R, path: &str, separator: &str) -> Option<&'a R::Node>
where
    R: PathRoot + ?Sized,
{
    if separator.is_empty() {
        return root.entry(path);
    }
    let mut segments = path.split(separator);
    let first = root.entry(segments.next()?)?;
    segments.try_fold(first, |node, segment| node.child(segment))
}

/// Parse a segment as a list index: a canonical non-negative integer.
fn list_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}

impl PathNode for TranslationNode {
    fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            TranslationNode::Group(children) => children.get(segment),
            TranslationNode::Text(_) | TranslationNode::Template(_) => None,
        }
    }
}

impl PathNode for ParamNode {
    fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            ParamNode::Group(children) => children.get(segment),
            ParamNode::Spec(_) => None,
        }
    }
}

impl PathNode for Value {
    fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            Value::Map(entries) => entries.get(segment),
            Value::List(items) => items.get(list_index(segment)?),
            _ => None,
        }
    }
}

impl PathNode for JsonValue {
    fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            JsonValue::Object(entries) => entries.get(segment),
            JsonValue::Array(items) => items.get(list_index(segment)?),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn root() -> BTreeMap<String, JsonValue> {
        let JsonValue::Object(map) = json!({
            "a": { "b": { "c": 42 } },
            "list": [{ "c": 1 }, { "c": 2 }],
            "0": { "zero": true },
            "leaf": "text"
        }) else {
            unreachable!()
        };
        map.into_iter().collect()
    }

    #[test]
    fn nested_lookup() {
        assert_eq!(resolve(&root(), "a.b.c", "."), Some(&json!(42)));
        assert_eq!(resolve(&root(), "a.b", "."), Some(&json!({ "c": 42 })));
    }

    #[test]
    fn list_indices() {
        assert_eq!(resolve(&root(), "list.1.c", "."), Some(&json!(2)));
        assert_eq!(resolve(&root(), "list.01.c", "."), None);
        assert_eq!(resolve(&root(), "list.+1.c", "."), None);
        assert_eq!(resolve(&root(), "list.5", "."), None);
    }

    #[test]
    fn numeric_segments_address_map_keys() {
        assert_eq!(resolve(&root(), "0.zero", "."), Some(&json!(true)));
    }

    #[test]
    fn missing_and_leaf_paths_are_absent() {
        assert_eq!(resolve(&root(), "a.x.c", "."), None);
        assert_eq!(resolve(&root(), "leaf.more", "."), None);
        assert_eq!(resolve(&root(), "", "."), None);
        assert_eq!(resolve(&root(), "a..b", "."), None);
    }

    #[test]
    fn custom_separator() {
        assert_eq!(resolve(&root(), "a/b/c", "/"), Some(&json!(42)));
        assert_eq!(resolve(&root(), "a.b.c", ""), None);
    }
}
