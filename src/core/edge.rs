use std::{fmt, marker::PhantomData};

use super::{
    error::NotIncidentError,
    marker::{Directed, EdgeType, Undirected},
};

/// An immutable weighted edge between two vertices.
///
/// The edge type marker decides which accessors are available. Undirected
/// edges expose the symmetric [`either`](Edge::either) /
/// [`other`](Edge::other) pair, directed edges expose
/// [`from`](Edge::from) / [`to`](Edge::to).
///
/// Unweighted graphs use `W = ()`.
pub struct Edge<W, Ty = Undirected> {
    v: usize,
    w: usize,
    weight: W,
    ty: PhantomData<fn() -> Ty>,
}

/// A weighted edge with a direction.
pub type DirectedEdge<W> = Edge<W, Directed>;

impl<W, Ty: EdgeType> Edge<W, Ty> {
    pub fn new(v: usize, w: usize, weight: W) -> Self {
        Self {
            v,
            w,
            weight,
            ty: PhantomData,
        }
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Both endpoints in the order the edge was created with.
    pub fn endpoints(&self) -> (usize, usize) {
        (self.v, self.w)
    }

    pub fn is_loop(&self) -> bool {
        self.v == self.w
    }

    /// Returns the same edge with swapped endpoints.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self::new(self.w, self.v, self.weight)
    }
}

impl<W> Edge<W, Undirected> {
    pub fn either(&self) -> usize {
        self.v
    }

    /// Returns the endpoint different from `vertex`.
    ///
    /// For a self-loop, this returns the vertex itself.
    pub fn other(&self, vertex: usize) -> Result<usize, NotIncidentError> {
        if vertex == self.v {
            Ok(self.w)
        } else if vertex == self.w {
            Ok(self.v)
        } else {
            Err(NotIncidentError {
                vertex,
                from: self.v,
                to: self.w,
            })
        }
    }
}

impl<W> Edge<W, Directed> {
    pub fn from(&self) -> usize {
        self.v
    }

    pub fn to(&self) -> usize {
        self.w
    }
}

impl<W: Clone, Ty> Clone for Edge<W, Ty> {
    fn clone(&self) -> Self {
        Self {
            v: self.v,
            w: self.w,
            weight: self.weight.clone(),
            ty: PhantomData,
        }
    }
}

impl<W: Copy, Ty> Copy for Edge<W, Ty> {}

impl<W: PartialEq, Ty> PartialEq for Edge<W, Ty> {
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v && self.w == other.w && self.weight == other.weight
    }
}

impl<W: fmt::Debug, Ty: EdgeType> fmt::Debug for Edge<W, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if Ty::is_directed() { "->" } else { "-" };
        write!(f, "{}{}{} {:?}", self.v, arrow, self.w, self.weight)
    }
}

impl<Ty: EdgeType> From<(usize, usize)> for Edge<(), Ty> {
    fn from((v, w): (usize, usize)) -> Self {
        Self::new(v, w, ())
    }
}

impl<W, Ty: EdgeType> From<(usize, usize, W)> for Edge<W, Ty> {
    fn from((v, w, weight): (usize, usize, W)) -> Self {
        Self::new(v, w, weight)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn undirected_other() {
        let edge = Edge::<_, Undirected>::new(4, 5, 0.35);

        assert_eq!(edge.either(), 4);
        assert_eq!(edge.other(4), Ok(5));
        assert_eq!(edge.other(5), Ok(4));
        assert_matches!(
            edge.other(7),
            Err(NotIncidentError {
                vertex: 7,
                from: 4,
                to: 5
            })
        );
    }

    #[test]
    fn undirected_other_self_loop() {
        let edge = Edge::<_, Undirected>::new(2, 2, 1);
        assert_eq!(edge.other(2), Ok(2));
        assert!(edge.is_loop());
    }

    #[test]
    fn directed_accessors() {
        let edge = DirectedEdge::new(4, 7, 0.37);

        assert_eq!(edge.from(), 4);
        assert_eq!(edge.to(), 7);
        assert_eq!(*edge.weight(), 0.37);

        let reversed = edge.reversed();
        assert_eq!((reversed.from(), reversed.to()), (7, 4));
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", DirectedEdge::new(0, 2, 26)), "0->2 26");
        assert_eq!(format!("{:?}", Edge::<_, Undirected>::new(0, 2, ())), "0-2 ()");
    }
}
