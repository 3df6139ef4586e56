use crate::data_structures::{PauliLetter, Tableau};
use crate::ir::rref::rref;

/// The leftmost column with a non-identity letter in row `i`, as `1 +`
/// that column index. A row with no non-identity letter cannot occur in a
/// valid (empty-column-free, independent) tableau; such a row is treated
/// as never exceeding any prefix length.
fn leftmost_support(tableau: &Tableau, i: usize) -> usize {
    let n = tableau.size();
    (0..n)
        .find(|&j| tableau.letter(i, j) != PauliLetter::I)
        .map(|j| j + 1)
        .unwrap_or(n + 1)
}

/// The height function `h(x)`, evaluated against a tableau already in
/// RREF (see [`rref`]). `x` ranges over `0..=n`.
pub fn height(rref_tableau: &Tableau, x: usize) -> i64 {
    let n = rref_tableau.size();
    let exceeding = (0..n).filter(|&i| leftmost_support(rref_tableau, i) > x).count();
    n as i64 - x as i64 - exceeding as i64
}

/// The number of emitters needed to emit the `n`-photon graph state `tableau`
/// represents: `max_x h(x)`, computed after placing a cloned copy of
/// `tableau` in RREF.
pub fn emitter_count(tableau: &Tableau) -> usize {
    let mut working = tableau.clone();
    rref(&mut working);
    let n = working.size();
    (0..=n)
        .map(|x| height(&working, x))
        .max()
        .unwrap_or(0)
        .max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::from_edge_list;

    #[test]
    fn five_cycle_graph_state_needs_three_emitters() {
        let t = from_edge_list(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        assert_eq!(emitter_count(&t), 3);
    }

    #[test]
    fn emitter_count_never_exceeds_qubit_count() {
        let t = from_edge_list(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
        assert!(emitter_count(&t) <= t.size());
    }

    #[test]
    fn single_edge_graph_state_needs_one_emitter() {
        let t = from_edge_list(&[(0, 1)]);
        assert_eq!(emitter_count(&t), 1);
    }
}
