use crate::graph::base_graph::{VertexId, Weight};
use fxhash::FxHashMap;
use std::cmp::Ordering;

/// A vertex and its incident edges, stored as neighbor id -> edge weight.
///
/// A vertex knows nothing about the graph owning it. Adjacency is only mutated through the
/// owning graph, which always updates both endpoints of an edge together.
#[derive(Clone, Debug)]
pub struct Vertex<I, W> {
    id: I,
    adjacency: FxHashMap<I, W>,
}

impl<I: VertexId, W: Weight> Vertex<I, W> {
    pub fn new(id: I) -> Self {
        Self {
            id,
            adjacency: FxHashMap::default(),
        }
    }

    pub fn with_capacity(id: I, capacity: usize) -> Self {
        Self {
            id,
            adjacency: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn id(&self) -> &I {
        &self.id
    }

    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    pub fn has_neighbor(&self, id: &I) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn weight(&self, id: &I) -> Option<W> {
        self.adjacency.get(id).copied()
    }

    /// Neighbors in unspecified, but stable, order.
    pub fn neighbors(&self) -> impl Iterator<Item = (&I, W)> + '_ {
        self.adjacency.iter().map(|(id, w)| (id, *w))
    }

    pub fn neighbors_by_id(&self, increasing: bool) -> Vec<(&I, W)> {
        let mut neighbors: Vec<_> = self.neighbors().collect();
        neighbors.sort_by(|a, b| a.0.cmp(b.0));
        if !increasing {
            neighbors.reverse();
        }
        neighbors
    }

    /// Neighbors ordered by edge weight, ties broken by id.
    pub fn neighbors_by_weight(&self, increasing: bool) -> Vec<(&I, W)> {
        let mut neighbors: Vec<_> = self.neighbors().collect();
        neighbors.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        if !increasing {
            neighbors.reverse();
        }
        neighbors
    }

    pub(crate) fn incident_weight(&self) -> W {
        self.adjacency.values().fold(W::zero(), |acc, w| acc + *w)
    }

    /// Returns `false` without inserting if `id` is already a neighbor or is this vertex.
    pub(crate) fn add_neighbor(&mut self, id: I, weight: W) -> bool {
        if id == self.id || self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, weight);
        true
    }

    pub(crate) fn remove_neighbor(&mut self, id: &I) -> Option<W> {
        self.adjacency.remove(id)
    }

    /// Replaces the weight towards `id` and hands back the previous one.
    pub(crate) fn update_weight(&mut self, id: &I, weight: W) -> Option<W> {
        self.adjacency
            .get_mut(id)
            .map(|stored| std::mem::replace(stored, weight))
    }

    pub(crate) fn into_adjacency(self) -> FxHashMap<I, W> {
        self.adjacency
    }
}
