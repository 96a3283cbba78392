//! The alternating vertex/edge sequence a driver reconstructs from a search
//! (§3.5). `Vector`, the original core's bespoke growable array, is not
//! ported — it is `Vec<T>` everywhere the original used one (Design Note
//! 9.2's "eliminate the bespoke container" reasoning applied to `Vector` as
//! well as the doubly-linked calendar); only `Path` earns a type of its own,
//! because it carries a real invariant (strict vertex/edge alternation)
//! worth enforcing at the API boundary.

/// An alternating `Vertex, Edge, Vertex, …, Vertex` sequence of length
/// `2k + 1`, append-only during reconstruction and immutable thereafter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<V, E> {
    origin: V,
    steps: Vec<(E, V)>,
}

impl<V, E> Path<V, E> {
    /// A path of length 1 containing only `origin` — the starting point of
    /// a reconstruction before any edge has been appended.
    pub fn new(origin: V) -> Self {
        Path {
            origin,
            steps: Vec::new(),
        }
    }

    /// Append one `(edge, vertex)` step, extending the alternation.
    pub fn push(&mut self, edge: E, vertex: V) {
        self.steps.push((edge, vertex));
    }

    pub fn origin(&self) -> &V {
        &self.origin
    }

    /// The final vertex reached, i.e. `origin` if no steps have been
    /// appended yet.
    pub fn terminus(&self) -> &V {
        self.steps.last().map(|(_, v)| v).unwrap_or(&self.origin)
    }

    /// Number of edges traversed (`k` in the `2k + 1`-length sequence).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn edges(&self) -> impl Iterator<Item = &E> {
        self.steps.iter().map(|(e, _)| e)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        std::iter::once(&self.origin).chain(self.steps.iter().map(|(_, v)| v))
    }
}
