use petgraph::stable_graph::StableUnGraph;

/// Complete graph over a node list. Node weights are indices into that list.
pub type Mesh = StableUnGraph<usize, ()>;

/// Connects every unordered pair of distinct entries, `n * (n - 1) / 2` edges.
///
/// The edge count grows quadratically, which is fine for the handful of
/// nodes a session holds.
pub fn full_mesh<T>(items: &[T]) -> Mesh {
    let n = items.len();
    let mut g = Mesh::with_capacity(n, n * n.saturating_sub(1) / 2);

    let idx: Vec<_> = (0..n).map(|i| g.add_node(i)).collect();
    for (i, a) in idx.iter().enumerate() {
        for b in &idx[i + 1..] {
            g.add_edge(*a, *b, ());
        }
    }

    g
}
