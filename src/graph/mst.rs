use super::SpanningTreeBuilder;
use crate::types::GraphEdge;
use petgraph::unionfind::UnionFind;

/// Kruskal's algorithm over edges sorted by `(weight, i, j)`.
///
/// On a disconnected graph the result is a minimum spanning forest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Kruskal;

impl SpanningTreeBuilder for Kruskal {
    fn spanning_forest(&self, node_count: usize, edges: &[GraphEdge]) -> Vec<GraphEdge> {
        if node_count < 2 || edges.is_empty() {
            return Vec::new();
        }
        let mut sorted: Vec<GraphEdge> = edges
            .iter()
            .copied()
            .filter(|e| e.i != e.j && e.i < node_count && e.j < node_count)
            .collect();
        sorted.sort_by(|a, b| {
            a.weight
                .total_cmp(&b.weight)
                .then(a.i.cmp(&b.i))
                .then(a.j.cmp(&b.j))
        });

        let mut uf = UnionFind::<usize>::new(node_count);
        let mut tree = Vec::with_capacity(node_count - 1);
        for edge in sorted {
            if uf.union(edge.i, edge.j) {
                tree.push(edge);
                if tree.len() == node_count - 1 {
                    break;
                }
            }
        }
        tree
    }
}

/// Number of connected components spanned by `edges` over `node_count` nodes.
pub fn count_components(node_count: usize, edges: &[GraphEdge]) -> usize {
    let mut uf = UnionFind::<usize>::new(node_count);
    let mut components = node_count;
    for e in edges {
        if e.i < node_count && e.j < node_count && uf.union(e.i, e.j) {
            components -= 1;
        }
    }
    components
}
