use std::fmt::{Debug, Display};

use crate::vertex::*;

/// An edge is defined by its two endpoints and a weight.
/// It is up to the graph whether an Edge is directed or not.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<V> {
    pub src: V,
    pub dest: V,
    pub weight: Weight,
}

impl<V: Display> Display for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.weight == DEFAULT_WEIGHT {
            write!(f, "({},{})", self.src, self.dest)
        } else {
            write!(f, "({},{};{})", self.src, self.dest, self.weight)
        }
    }
}

impl<V: Debug> Debug for Edge<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?},{:?};{})", self.src, self.dest, self.weight)
    }
}

impl<V: Vertex> Edge<V> {
    /// Creates a new edge
    pub fn new(src: V, dest: V, weight: Weight) -> Self {
        Self { src, dest, weight }
    }

    /// Creates a new edge carrying [`DEFAULT_WEIGHT`]
    pub fn unweighted(src: V, dest: V) -> Self {
        Self::new(src, dest, DEFAULT_WEIGHT)
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        if self.is_normalized() {
            self.clone()
        } else {
            self.reverse()
        }
    }

    /// Returns true if the endpoint with smaller value comes first
    pub fn is_normalized(&self) -> bool {
        self.src <= self.dest
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.src == self.dest
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Self::new(self.dest.clone(), self.src.clone(), self.weight)
    }

    /// Returns the endpoints as a tuple, dropping the weight
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.src, &self.dest)
    }
}

impl<V: Vertex> From<(V, V)> for Edge<V> {
    fn from(value: (V, V)) -> Self {
        Edge::unweighted(value.0, value.1)
    }
}

impl<V: Vertex> From<(V, V, Weight)> for Edge<V> {
    fn from(value: (V, V, Weight)) -> Self {
        Edge::new(value.0, value.1, value.2)
    }
}

impl<V: Vertex> From<&(V, V)> for Edge<V> {
    fn from(value: &(V, V)) -> Self {
        Edge::unweighted(value.0.clone(), value.1.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        let e = Edge::new(5, 2, 7);
        assert!(!e.is_normalized());
        assert_eq!(e.normalized(), Edge::new(2, 5, 7));
        assert_eq!(e.reverse().reverse(), e);
        assert!(Edge::unweighted('a', 'a').is_loop());
    }

    #[test]
    fn display() {
        assert_eq!(Edge::unweighted(1, 2).to_string(), "(1,2)");
        assert_eq!(Edge::new("a", "b", 4).to_string(), "(a,b;4)");
        assert_eq!(Edge::from((3, 4, -1)).to_string(), "(3,4;-1)");
    }
}
