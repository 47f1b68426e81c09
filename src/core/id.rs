use std::fmt;

/// Index of an edge in the edge arena of the graph that created it.
///
/// Edge ids are assigned sequentially by
/// [`AdjList::add_edge`](crate::storage::AdjList::add_edge), starting at zero.
/// They are only meaningful for the graph they come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    #[inline]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<EdgeId> for usize {
    fn from(id: EdgeId) -> Self {
        id.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
