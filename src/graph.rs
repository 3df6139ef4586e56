use bitvec::prelude::BitVec;
use petgraph::graph::UnGraph;

use crate::data_structures::{PauliString, Tableau};

/// Builds the canonical graph state tableau directly from an edge list:
/// `X = I_n`, `Z` = the adjacency matrix of the graph, all signs positive.
/// `n = 1 + max vertex` seen across `edges`.
///
/// Vertices are routed through [`petgraph::graph::UnGraph`] so the
/// adjacency structure is built with the same graph representation used
/// elsewhere, rather than by hand-rolling an adjacency matrix.
pub fn from_edge_list(edges: &[(usize, usize)]) -> Tableau {
    let n = edges
        .iter()
        .flat_map(|&(a, b)| [a, b])
        .map(|v| v + 1)
        .max()
        .unwrap_or(0);

    let mut graph = UnGraph::<(), ()>::with_capacity(n, edges.len());
    let nodes: Vec<_> = (0..n).map(|_| graph.add_node(())).collect();
    for &(a, b) in edges {
        graph.add_edge(nodes[a], nodes[b], ());
    }

    let rows = nodes
        .iter()
        .enumerate()
        .map(|(i, &node)| {
            let mut z = BitVec::repeat(false, n);
            for neighbor in graph.neighbors(node) {
                let j = nodes.iter().position(|&nn| nn == neighbor).unwrap();
                z.set(j, true);
            }
            let mut x = BitVec::repeat(false, n);
            x.set(i, true);
            PauliString::new(x, z)
        })
        .collect();

    Tableau::construct(rows, BitVec::repeat(false, n))
}
