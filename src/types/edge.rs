//! Edge records and the per-vertex owned chain.

use serde::Serialize;

/// A single record in a vertex's outgoing-edge chain.
///
/// Records are created by edge insertion, never mutated afterwards, and
/// freed only when the whole graph is torn down; there is no edge removal.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct EdgeNode {
    /// Destination vertex index.
    pub dest: usize,
    /// The rest of the chain, owned by this record.
    pub next: Option<Box<EdgeNode>>,
}

/// One vertex's outgoing-edge chain. The list owns the head record and each
/// record owns its successor.
///
/// Insertion is at the head only, so iteration yields the most recently
/// added record first.
#[derive(Debug, Default, Serialize)]
pub struct EdgeList {
    head: Option<Box<EdgeNode>>,
}

impl EdgeList {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Insert a record pointing at `dest` at the head of the chain.
    pub fn push_front(&mut self, dest: usize) {
        self.head = Some(Box::new(EdgeNode {
            dest,
            next: self.head.take(),
        }));
    }

    /// The first record, if any.
    pub fn head(&self) -> Option<&EdgeNode> {
        self.head.as_deref()
    }

    /// Iterate the chain, head first.
    pub fn iter(&self) -> EdgeIter<'_> {
        EdgeIter {
            cur: self.head.as_deref(),
        }
    }

    /// Number of records in the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the chain has no records.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl Clone for EdgeList {
    fn clone(&self) -> Self {
        // Rebuild back to front so the clone keeps the original order.
        let dests: Vec<usize> = self.iter().map(|record| record.dest).collect();
        let mut list = EdgeList::new();
        for &dest in dests.iter().rev() {
            list.push_front(dest);
        }
        list
    }
}

impl Drop for EdgeList {
    fn drop(&mut self) {
        // Unlink iteratively; the derived drop would recurse once per record.
        let mut cur = self.head.take();
        while let Some(mut record) = cur {
            cur = record.next.take();
        }
    }
}

impl<'a> IntoIterator for &'a EdgeList {
    type Item = &'a EdgeNode;
    type IntoIter = EdgeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the records of one chain, head first.
#[derive(Debug, Clone, Default)]
pub struct EdgeIter<'a> {
    cur: Option<&'a EdgeNode>,
}

impl<'a> Iterator for EdgeIter<'a> {
    type Item = &'a EdgeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.cur?;
        self.cur = record.next.as_deref();
        Some(record)
    }
}
