//! Expansion tree: decoding a parsed template and flattening it into every
//! concrete variant it denotes.
//!
//! Each [`Node`] holds its own content plus two optional links:
//!
//! - `child`: the first optional group found among the node's items, one
//!   nesting level down
//! - `next`: everything that follows that group at the same level
//!
//! A node's own content only ever holds items that come before its first
//! optional group, so a second group at the same level becomes the `child`
//! of `next` rather than a sibling of the first one.
//!
//! Nodes live in an arena and link to each other by index. A node is always
//! created after the node that links to it, so every `child`/`next` index is
//! greater than its parent's. [`ExpansionTree::flatten`] relies on this to
//! visit the arena back to front without recursion.
//!
//! ```rust
//! use flexlayout::grammar::parse;
//! use flexlayout::tree::ExpansionTree;
//! use flexlayout::CompileOptions;
//!
//! let options = CompileOptions::new();
//! let template = parse("a[b[c]]", &options).unwrap();
//! let tree = ExpansionTree::decode(&template);
//!
//! let rendered: Vec<String> = tree
//!     .flatten(options.max_variants)
//!     .unwrap()
//!     .iter()
//!     .map(|seq| seq.render())
//!     .collect();
//! assert_eq!(rendered, ["a", "ab", "abc"]);
//! ```

use crate::grammar::{Item, Template};
use crate::run::TaggedSeq;
use crate::{Error, Result};
use indexmap::IndexSet;

/// Index of a node inside an [`ExpansionTree`].
pub type NodeId = usize;

/// One node of the expansion tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub content: TaggedSeq,
    pub optional: bool,
    pub child: Option<NodeId>,
    pub next: Option<NodeId>,
}

/// Arena-backed expansion tree. The root is always node `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionTree {
    nodes: Vec<Node>,
}

struct Frame<'t> {
    items: std::slice::Iter<'t, Item>,
    node: NodeId,
    found_optional: bool,
}

impl ExpansionTree {
    pub const ROOT: NodeId = 0;

    /// Builds the tree for `template`.
    #[must_use]
    pub fn decode(template: &Template) -> Self {
        let mut tree = ExpansionTree {
            nodes: vec![Node::default()],
        };
        let mut stack = vec![Frame {
            items: template.items().iter(),
            node: Self::ROOT,
            found_optional: false,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(item) = frame.items.next() else {
                stack.pop();
                continue;
            };

            // Anything after the first group continues in a `next` node.
            if frame.found_optional {
                let next = tree.push(Node::default());
                tree.nodes[frame.node].next = Some(next);
                frame.node = next;
                frame.found_optional = false;
            }

            match item {
                Item::Run(run) => tree.nodes[frame.node].content.push(run.clone()),
                Item::Optional(inner) => {
                    let child = tree.push(Node {
                        optional: true,
                        ..Node::default()
                    });
                    tree.nodes[frame.node].child = Some(child);
                    frame.found_optional = true;
                    stack.push(Frame {
                        items: inner.iter(),
                        node: child,
                        found_optional: false,
                    });
                }
            }
        }

        trace!("decoded expansion tree with {} nodes", tree.nodes.len());
        tree
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn root(&self) -> &Node {
        &self.nodes[Self::ROOT]
    }

    /// Number of nodes, the root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Produces every concrete sequence the tree denotes, deduplicated in
    /// first-seen order.
    ///
    /// For each node, starting from `{content}`:
    ///
    /// 1. every flattened `child` variant is appended to `content` and added
    /// 2. if any flattened `next` variant is non-empty, the set becomes the
    ///    product `a ++ r` over the current set and the `next` variants
    /// 3. an optional node with non-empty content also yields the empty
    ///    sequence, the variant that skips the group
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyVariants`] as soon as any node holds more than
    /// `max_variants` distinct sequences. Duplicates are dropped before
    /// counting.
    pub fn flatten(&self, max_variants: usize) -> Result<Vec<TaggedSeq>> {
        let mut results: Vec<Option<IndexSet<TaggedSeq>>> = Vec::with_capacity(self.nodes.len());
        results.resize_with(self.nodes.len(), || None);

        // Links always point forward, so walking back to front sees every
        // child and next before the node that owns them.
        for id in (0..self.nodes.len()).rev() {
            let node = &self.nodes[id];
            let cur = &node.content;

            let mut total = IndexSet::new();
            total.insert(cur.clone());

            if let Some(child) = node.child {
                for seq in results[child].take().unwrap_or_default() {
                    total.insert(cur.concat(&seq));
                }
            }

            if let Some(next) = node.next {
                let rest = results[next].take().unwrap_or_default();
                if rest.iter().any(|seq| !seq.is_empty()) {
                    let mut product = IndexSet::new();
                    for head in &total {
                        for tail in &rest {
                            product.insert(head.concat(tail));
                            if product.len() > max_variants {
                                return Err(Error::too_many_variants(max_variants));
                            }
                        }
                    }
                    total = product;
                }
            }

            if node.optional && !cur.is_empty() {
                total.insert(TaggedSeq::new());
            }

            if total.len() > max_variants {
                return Err(Error::too_many_variants(max_variants));
            }
            results[id] = Some(total);
        }

        let flattened: Vec<TaggedSeq> = results[Self::ROOT]
            .take()
            .unwrap_or_default()
            .into_iter()
            .collect();
        trace!("flattened {} nodes into {} variants", self.nodes.len(), flattened.len());
        Ok(flattened)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse;
    use crate::run::{LiteralRun, Origin};
    use crate::CompileOptions;

    fn tree(input: &str) -> ExpansionTree {
        ExpansionTree::decode(&parse(input, &CompileOptions::new()).unwrap())
    }

    fn rendered(input: &str) -> Vec<String> {
        tree(input)
            .flatten(4096)
            .unwrap()
            .iter()
            .map(TaggedSeq::render)
            .collect()
    }

    #[test]
    fn test_decode_no_groups() {
        let t = tree("YYYY-MM");
        assert_eq!(t.node_count(), 1);
        assert_eq!(t.root().content.render(), "YYYY-MM");
        assert!(!t.root().optional);
    }

    #[test]
    fn test_decode_child_and_next() {
        let t = tree("a[b]c");
        let root = t.root();
        assert_eq!(root.content.render(), "a");

        let child = t.node(root.child.unwrap()).unwrap();
        assert!(child.optional);
        assert_eq!(child.content.render(), "b");

        let next = t.node(root.next.unwrap()).unwrap();
        assert!(!next.optional);
        assert_eq!(next.content.render(), "c");
    }

    #[test]
    fn test_decode_sibling_groups_reroot_through_next() {
        let t = tree("a[b][c]");
        let root = t.root();
        let next = t.node(root.next.unwrap()).unwrap();
        assert!(next.content.is_empty());
        let second = t.node(next.child.unwrap()).unwrap();
        assert!(second.optional);
        assert_eq!(second.content.render(), "c");
    }

    #[test]
    fn test_links_point_forward() {
        let t = tree("a[b[c]d][e]f[[g]h]");
        for id in 0..t.node_count() {
            let node = t.node(id).unwrap();
            for link in [node.child, node.next].into_iter().flatten() {
                assert!(link > id);
            }
        }
    }

    #[test]
    fn test_flatten_plain() {
        assert_eq!(rendered("YYYY-MM-DD"), ["YYYY-MM-DD"]);
    }

    #[test]
    fn test_flatten_empty_template() {
        assert_eq!(rendered(""), [""]);
    }

    #[test]
    fn test_flatten_trailing_group() {
        assert_eq!(rendered("abc[def]"), ["abc", "abcdef"]);
    }

    #[test]
    fn test_flatten_nested_group_requires_parent() {
        let out = rendered("a[b[c]]");
        assert_eq!(out, ["a", "ab", "abc"]);
        assert!(!out.contains(&"ac".to_string()));
    }

    #[test]
    fn test_flatten_middle_group() {
        assert_eq!(rendered("a[b]c"), ["ac", "abc"]);
    }

    #[test]
    fn test_flatten_sibling_groups_independent() {
        assert_eq!(rendered("a[b][c]"), ["a", "ac", "ab", "abc"]);
    }

    #[test]
    fn test_flatten_leading_group() {
        assert_eq!(rendered("[a]b"), ["b", "ab"]);
    }

    #[test]
    fn test_flatten_group_with_only_nested_content() {
        // The outer group can still be skipped entirely.
        assert_eq!(rendered("x[[a]b]"), ["x", "xb", "xab"]);
    }

    #[test]
    fn test_flatten_empty_group() {
        assert_eq!(rendered("a[]"), ["a"]);
    }

    #[test]
    fn test_flatten_keeps_origins() {
        let variants = tree(r"[Y][\Y]").flatten(16).unwrap();
        let plain_y: TaggedSeq = [LiteralRun::plain("Y")].into_iter().collect();
        let escaped_y: TaggedSeq = [LiteralRun::new("Y", Origin::SlashEscaped)]
            .into_iter()
            .collect();
        assert!(variants.contains(&plain_y));
        assert!(variants.contains(&escaped_y));
        assert_eq!(variants.len(), 4);
    }

    #[test]
    fn test_flatten_variant_limit() {
        let t = tree("[a][b][c][d]");
        assert!(t.flatten(16).is_ok());
        assert_eq!(t.flatten(15).unwrap_err(), Error::too_many_variants(15));
    }

    #[test]
    fn test_flatten_limit_counts_distinct_variants() {
        // Four head/tail pairs, but `a` arises twice.
        let t = tree("[a][a]");
        let out: Vec<String> = t
            .flatten(3)
            .unwrap()
            .iter()
            .map(TaggedSeq::render)
            .collect();
        assert_eq!(out, ["", "a", "aa"]);
        assert_eq!(t.flatten(2).unwrap_err(), Error::too_many_variants(2));
    }

    #[test]
    fn test_flatten_deep_nesting() {
        let depth = 2_000;
        let input = format!("{}x{}", "[".repeat(depth), "]".repeat(depth));
        let template = parse(&input, &CompileOptions::new().with_max_depth(depth)).unwrap();
        let out = ExpansionTree::decode(&template).flatten(16).unwrap();
        let rendered: Vec<String> = out.iter().map(TaggedSeq::render).collect();
        assert_eq!(rendered, ["", "x"]);
    }
}
