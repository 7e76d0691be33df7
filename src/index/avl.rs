//! Height-balanced binary search tree keyed by book id.
//!
//! Insert-only: books are never removed from the catalog, so no delete
//! is implemented. Nodes form a composite ownership tree; recursion is
//! safe because the height is bounded by the AVL invariant.

use std::cmp::Ordering;

use crate::models::BookId;

type Link<V> = Option<Box<Node<V>>>;

#[derive(Debug)]
struct Node<V> {
    key: BookId,
    value: V,
    height: i32,
    left: Link<V>,
    right: Link<V>,
}

impl<V> Node<V> {
    fn new(key: BookId, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

fn height<V>(link: &Link<V>) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// AVL map from book id to an arbitrary payload (a catalog slot in
/// practice). Point operations are O(log n).
#[derive(Debug)]
pub struct AvlMap<V> {
    root: Link<V>,
    len: usize,
}

impl<V> AvlMap<V> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `value` under `key`.
    ///
    /// Inserting a key that is already present keeps the stored entry
    /// and discards `value`: an idempotent insert, not an update. Call
    /// sites assign monotonic ids, so a duplicate never carries a
    /// different payload.
    pub fn insert(&mut self, key: BookId, value: V) {
        let (root, inserted) = Self::insert_node(self.root.take(), key, value);
        self.root = Some(root);
        if inserted {
            self.len += 1;
        }
    }

    fn insert_node(link: Link<V>, key: BookId, value: V) -> (Box<Node<V>>, bool) {
        let mut node = match link {
            None => return (Node::new(key, value), true),
            Some(node) => node,
        };

        let inserted = match key.cmp(&node.key) {
            Ordering::Less => {
                let (child, inserted) = Self::insert_node(node.left.take(), key, value);
                node.left = Some(child);
                inserted
            }
            Ordering::Greater => {
                let (child, inserted) = Self::insert_node(node.right.take(), key, value);
                node.right = Some(child);
                inserted
            }
            Ordering::Equal => return (node, false),
        };

        node.update_height();
        (Self::rebalance(node), inserted)
    }

    /// Restore `|balance factor| <= 1` at `node` with single or double
    /// rotations.
    fn rebalance(mut node: Box<Node<V>>) -> Box<Node<V>> {
        let balance = node.balance_factor();

        if balance > 1 {
            // Left-heavy; a left-right shape needs the inner rotation first.
            if node.left.as_ref().map_or(0, |n| n.balance_factor()) < 0 {
                let left = node.left.take().expect("left-heavy node has a left child");
                node.left = Some(Self::rotate_left(left));
            }
            return Self::rotate_right(node);
        }

        if balance < -1 {
            if node.right.as_ref().map_or(0, |n| n.balance_factor()) > 0 {
                let right = node
                    .right
                    .take()
                    .expect("right-heavy node has a right child");
                node.right = Some(Self::rotate_right(right));
            }
            return Self::rotate_left(node);
        }

        node
    }

    fn rotate_right(mut y: Box<Node<V>>) -> Box<Node<V>> {
        let mut x = y.left.take().expect("rotate_right requires a left child");
        y.left = x.right.take();
        y.update_height();
        x.right = Some(y);
        x.update_height();
        x
    }

    fn rotate_left(mut x: Box<Node<V>>) -> Box<Node<V>> {
        let mut y = x.right.take().expect("rotate_left requires a right child");
        x.right = y.left.take();
        x.update_height();
        y.left = Some(x);
        y.update_height();
        y
    }

    /// O(log n) point lookup.
    pub fn get(&self, key: BookId) -> Option<&V> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    pub fn contains(&self, key: BookId) -> bool {
        self.get(key).is_some()
    }

    /// In-order traversal: entries in ascending key order.
    pub fn iter_in_order(&self) -> Vec<(BookId, &V)> {
        let mut out = Vec::with_capacity(self.len);
        Self::collect_in_order(self.root.as_deref(), &mut out);
        out
    }

    fn collect_in_order<'a>(node: Option<&'a Node<V>>, out: &mut Vec<(BookId, &'a V)>) {
        if let Some(node) = node {
            Self::collect_in_order(node.left.as_deref(), out);
            out.push((node.key, &node.value));
            Self::collect_in_order(node.right.as_deref(), out);
        }
    }

    pub fn height(&self) -> i32 {
        height(&self.root)
    }
}

impl<V> Default for AvlMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
