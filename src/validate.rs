use bitvec::prelude::BitVec;

use crate::data_structures::Tableau;
use crate::error::{Error, InvalidTableauKind};

/// Row count equals qubit count, and (by construction, see
/// [`Tableau::construct`]) every row already has that same length, so this
/// only needs to check the row count itself.
pub fn square(tableau: &Tableau) -> bool {
    tableau.size() == tableau.rows().len() && tableau.rows().iter().all(|r| r.len() == tableau.size())
}

/// No column is identity across every row.
pub fn empty_column(tableau: &Tableau) -> bool {
    let n = tableau.size();
    for j in 0..n {
        let free = (0..n).all(|i| !tableau.row(i).x(j) && !tableau.row(i).z(j));
        if free {
            return false;
        }
    }
    true
}

/// All row pairs commute.
pub fn commuter(tableau: &Tableau) -> bool {
    let n = tableau.size();
    for i in 0..n {
        for j in (i + 1)..n {
            if !tableau.row(i).commutes_with(tableau.row(j)) {
                return false;
            }
        }
    }
    true
}

/// GF(2) rank of the `2n`-wide `[X|Z]` matrix, by Gaussian elimination over
/// bit rows built by concatenating each row's `x` and `z` vectors.
fn gf2_rank(tableau: &Tableau) -> usize {
    let n = tableau.size();
    let width = 2 * n;
    let mut matrix: Vec<BitVec> = (0..n)
        .map(|i| {
            let row = tableau.row(i);
            let mut bits = BitVec::with_capacity(width);
            for j in 0..n {
                bits.push(row.x(j));
            }
            for j in 0..n {
                bits.push(row.z(j));
            }
            bits
        })
        .collect();

    let mut rank = 0;
    for col in 0..width {
        if let Some(pivot) = (rank..n).find(|&r| matrix[r][col]) {
            matrix.swap(rank, pivot);
            for r in 0..n {
                if r != rank && matrix[r][col] {
                    let pivot_row = matrix[rank].clone();
                    matrix[r] ^= pivot_row;
                }
            }
            rank += 1;
            if rank == n {
                break;
            }
        }
    }
    rank
}

/// Rank of `[X|Z]` over GF(2) equals `n`.
pub fn linear_independence(tableau: &Tableau) -> bool {
    gf2_rank(tableau) == tableau.size()
}

/// Composes the four validators above, failing with the first violated
/// invariant, in the order square, empty_column, commuter,
/// linear_independence. `ignore_commute` skips the commutation check, for
/// callers (such as the measurement routine) that build an intermediate
/// tableau temporarily violating it, to be restored by subsequent row
/// operations.
pub fn validate(tableau: &Tableau, ignore_commute: bool) -> Result<(), Error> {
    if !square(tableau) {
        return Err(Error::InvalidTableau(InvalidTableauKind::NotSquare));
    }
    if !empty_column(tableau) {
        return Err(Error::InvalidTableau(InvalidTableauKind::EmptyColumn));
    }
    if !ignore_commute && !commuter(tableau) {
        return Err(Error::InvalidTableau(InvalidTableauKind::NonCommuting));
    }
    if !linear_independence(tableau) {
        return Err(Error::InvalidTableau(InvalidTableauKind::Dependent));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_stabilizers, ParserInput};

    #[test]
    fn zero_state_is_valid() {
        let t = Tableau::construct_zero(4);
        assert!(validate(&t, false).is_ok());
    }

    #[test]
    fn bell_state_is_valid() {
        let mut t = Tableau::construct_zero(2);
        t.h(0);
        t.cnot(0, 1);
        assert!(validate(&t, false).is_ok());
    }

    #[test]
    fn duplicated_rows_fail_independence() {
        let t = parse_stabilizers(ParserInput::OneString("ZI,ZI".to_string()), None).unwrap();
        assert_eq!(
            validate(&t, false).unwrap_err(),
            Error::InvalidTableau(InvalidTableauKind::Dependent)
        );
    }

    #[test]
    fn anticommuting_rows_fail_commuter() {
        let t = parse_stabilizers(ParserInput::OneString("XI,ZI".to_string()), None).unwrap();
        assert_eq!(
            validate(&t, false).unwrap_err(),
            Error::InvalidTableau(InvalidTableauKind::NonCommuting)
        );
        assert!(validate(&t, true).is_err());
    }

    #[test]
    fn free_qubit_fails_empty_column() {
        let t = parse_stabilizers(ParserInput::OneString("ZI,II".to_string()), None).unwrap();
        assert_eq!(
            validate(&t, false).unwrap_err(),
            Error::InvalidTableau(InvalidTableauKind::EmptyColumn)
        );
    }
}
