//! Binary search tree with per-key occurrence counting
//!
//! Duplicate keys are stored once, carrying an occurrence counter, so the
//! tree doubles as a frequency table. Every mutating operation reports how
//! many occurrences of the key existed before the call; a search reports the
//! current count, with 0 as the not-found answer. Removal takes away one
//! occurrence at a time and only unlinks the node when the last one goes,
//! replacing a two-child node with its in-order successor.

use std::cmp::Ordering;
use std::fmt::Display;

struct Node<K> {
    key: K,
    count: u64,
    left: Option<Box<Node<K>>>,
    right: Option<Box<Node<K>>>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            count: 1,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree keyed by `K`, counting duplicate insertions
#[derive(Default)]
pub struct CountingBst<K: Ord> {
    root: Option<Box<Node<K>>>,
}

impl<K: Ord> CountingBst<K> {
    /// Create an empty tree
    pub fn new() -> Self {
        Self { root: None }
    }

    /// True when the tree holds no keys
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert one occurrence of `key`.
    ///
    /// Returns the number of occurrences present before the insert (0 for a
    /// new key).
    pub fn insert(&mut self, key: K) -> u64 {
        insert_node(&mut self.root, key)
    }

    /// Number of occurrences of `key` currently stored (0 when absent).
    pub fn occurrences(&self, key: &K) -> u64 {
        let mut current = &self.root;
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return node.count,
            }
        }
        0
    }

    /// Remove one occurrence of `key`.
    ///
    /// Returns the number of occurrences present before the removal; 0 means
    /// the key was absent and nothing changed. The node itself is unlinked
    /// only when its last occurrence is removed.
    pub fn remove(&mut self, key: &K) -> u64 {
        remove_node(&mut self.root, key)
    }

    /// In-order walk: `(key, occurrences)` pairs in ascending key order.
    pub fn in_order(&self) -> Vec<(&K, u64)> {
        let mut out = Vec::new();
        walk(&self.root, &mut out);
        out
    }

    /// Render the tree sideways, root at the left, right subtree on top.
    pub fn render(&self) -> String
    where
        K: Display,
    {
        let mut out = String::new();
        render_node(&self.root, 0, &mut out);
        out
    }
}

fn insert_node<K: Ord>(node: &mut Option<Box<Node<K>>>, key: K) -> u64 {
    match node {
        None => {
            *node = Some(Box::new(Node::new(key)));
            0
        }
        Some(n) => match key.cmp(&n.key) {
            Ordering::Less => insert_node(&mut n.left, key),
            Ordering::Greater => insert_node(&mut n.right, key),
            Ordering::Equal => {
                let before = n.count;
                n.count += 1;
                before
            }
        },
    }
}

fn remove_node<K: Ord>(node: &mut Option<Box<Node<K>>>, key: &K) -> u64 {
    let Some(n) = node else {
        return 0;
    };
    match key.cmp(&n.key) {
        Ordering::Less => remove_node(&mut n.left, key),
        Ordering::Greater => remove_node(&mut n.right, key),
        Ordering::Equal => {
            let before = n.count;
            if n.count > 1 {
                n.count -= 1;
                return before;
            }
            // Last occurrence: unlink the physical node.
            match (n.left.take(), n.right.take()) {
                (None, None) => *node = None,
                (Some(l), None) => *node = Some(l),
                (None, Some(r)) => *node = Some(r),
                (Some(l), Some(r)) => {
                    n.left = Some(l);
                    n.right = Some(r);
                    if let Some((succ_key, succ_count)) = take_min(&mut n.right) {
                        n.key = succ_key;
                        n.count = succ_count;
                    }
                }
            }
            before
        }
    }
}

/// Unlink the minimum node of a non-empty subtree and return its data.
fn take_min<K: Ord>(node: &mut Option<Box<Node<K>>>) -> Option<(K, u64)> {
    if node.as_ref()?.left.is_some() {
        take_min(&mut node.as_mut()?.left)
    } else {
        let boxed = node.take()?;
        *node = boxed.right;
        Some((boxed.key, boxed.count))
    }
}

fn walk<'a, K>(node: &'a Option<Box<Node<K>>>, out: &mut Vec<(&'a K, u64)>) {
    if let Some(n) = node {
        walk(&n.left, out);
        out.push((&n.key, n.count));
        walk(&n.right, out);
    }
}

fn render_node<K: Display>(node: &Option<Box<Node<K>>>, level: usize, out: &mut String) {
    if let Some(n) = node {
        render_node(&n.right, level + 1, out);
        out.push_str(&"      ".repeat(level));
        out.push_str(&format!("{}\n", n.key));
        render_node(&n.left, level + 1, out);
    }
}
