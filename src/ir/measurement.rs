use bitvec::prelude::BitVec;

use crate::data_structures::{PauliString, Tableau};
use crate::error::Error;

/// Expresses `target`'s bit pattern as a GF(2) combination of `tableau`'s
/// rows, returning the indices of the rows to XOR together. Only valid to
/// call when `target` commutes with every row of `tableau`: for a valid
/// (full-rank, pairwise-commuting) tableau the rowspan is a maximal
/// isotropic subspace, so anything commuting with the whole group lies in
/// the span.
fn express_in_rowspan(tableau: &Tableau, target: &PauliString) -> Vec<usize> {
    let n = tableau.size();
    let width = 2 * n;

    let mut basis: Vec<(BitVec, Vec<bool>)> = (0..n)
        .map(|i| {
            let row = tableau.row(i);
            let mut bits = BitVec::with_capacity(width);
            for j in 0..n {
                bits.push(row.x(j));
            }
            for j in 0..n {
                bits.push(row.z(j));
            }
            let mut mask = vec![false; n];
            mask[i] = true;
            (bits, mask)
        })
        .collect();

    let mut pivot_col: Vec<Option<usize>> = vec![None; n];
    let mut rank = 0;
    for col in 0..width {
        if rank == n {
            break;
        }
        if let Some(r) = (rank..n).find(|&r| basis[r].0[col]) {
            basis.swap(rank, r);
            let (pivot_bits, pivot_mask) = (basis[rank].0.clone(), basis[rank].1.clone());
            for rr in 0..n {
                if rr != rank && basis[rr].0[col] {
                    let bits = basis[rr].0.clone() ^ pivot_bits.clone();
                    basis[rr].0 = bits;
                    for k in 0..n {
                        basis[rr].1[k] ^= pivot_mask[k];
                    }
                }
            }
            pivot_col[rank] = Some(col);
            rank += 1;
        }
    }

    let mut target_bits = BitVec::with_capacity(width);
    for j in 0..n {
        target_bits.push(target.x(j));
    }
    for j in 0..n {
        target_bits.push(target.z(j));
    }

    let mut combo = vec![false; n];
    for r in 0..rank {
        let col = pivot_col[r].expect("rank counted this row as pivoted");
        if target_bits[col] {
            let pivot_bits = basis[r].0.clone();
            target_bits ^= pivot_bits;
            for k in 0..n {
                combo[k] ^= basis[r].1[k];
            }
        }
    }

    combo
        .into_iter()
        .enumerate()
        .filter_map(|(i, used)| used.then_some(i))
        .collect()
}

/// Projects `tableau` onto the `outcome` eigenspace of `p`.
pub fn measure_one(tableau: &mut Tableau, p: &PauliString, outcome: bool) -> Result<(), Error> {
    let n = tableau.size();
    if p.len() != n {
        return Err(Error::MeasurementArityError {
            expected: n,
            found: p.len(),
        });
    }

    let first_anticommuting = (0..n).find(|&i| !tableau.row(i).commutes_with(p));

    match first_anticommuting {
        None => {
            let combo = express_in_rowspan(tableau, p);
            let mut acc = PauliString::identity(n);
            let mut acc_sign = false;
            for idx in combo {
                let (next_p, next_sign) = acc.compose(acc_sign, tableau.row(idx), tableau.sign(idx));
                acc = next_p;
                acc_sign = next_sign;
            }
            debug_assert_eq!(acc.to_letters(), p.to_letters());
            if acc_sign != outcome {
                return Err(Error::ContradictoryMeasurement { requested: outcome as u8 });
            }
            Ok(())
        }
        Some(i) => {
            for k in (i + 1)..n {
                if !tableau.row(k).commutes_with(p) {
                    tableau.row_add(i, k);
                }
            }
            *tableau.row_mut(i) = p.clone();
            tableau.set_sign(i, outcome);
            Ok(())
        }
    }
}

/// Measures each Pauli in `paulis`, in order, against the parallel
/// `outcomes` array (`0` or `1`).
pub fn measure_all(tableau: &mut Tableau, paulis: &[PauliString], outcomes: &[u8]) -> Result<(), Error> {
    for (p, &o) in paulis.iter().zip(outcomes.iter()) {
        measure_one(tableau, p, o != 0)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measuring_zi_on_bell_state_replaces_the_anticommuting_row() {
        let mut t = Tableau::construct_zero(2);
        t.h(0);
        t.cnot(0, 1);
        assert_eq!(t.to_strings(), vec!["XX", "ZZ"]);

        // ZI anticommutes with XX (one shared anticommuting qubit) but
        // commutes with ZZ, so only row 0 is replaced.
        let zi = PauliString::from_letters("ZI").unwrap();
        measure_one(&mut t, &zi, false).unwrap();
        assert_eq!(t.to_strings(), vec!["ZI", "ZZ"]);
        assert!(!t.sign(0) && !t.sign(1));
    }

    #[test]
    fn measuring_zz_on_bell_state_is_a_no_op() {
        // ZZ is already a generator of the Bell state, so this is the
        // deterministic branch: the outcome matches and nothing changes.
        let t0 = {
            let mut t = Tableau::construct_zero(2);
            t.h(0);
            t.cnot(0, 1);
            t
        };
        let mut t = t0.clone();
        let zz = PauliString::from_letters("ZZ").unwrap();
        measure_one(&mut t, &zz, false).unwrap();
        assert_eq!(t, t0);
    }

    #[test]
    fn measuring_already_stabilized_pauli_is_a_no_op() {
        let t0 = Tableau::construct_zero(2);
        let mut t = t0.clone();
        let zi = PauliString::from_letters("ZI").unwrap();
        measure_one(&mut t, &zi, false).unwrap();
        assert_eq!(t, t0);
    }

    #[test]
    fn measuring_stabilized_pauli_with_wrong_outcome_is_contradictory() {
        let mut t = Tableau::construct_zero(2);
        let zi = PauliString::from_letters("ZI").unwrap();
        let err = measure_one(&mut t, &zi, true).unwrap_err();
        assert_eq!(err, Error::ContradictoryMeasurement { requested: 1 });
    }

    #[test]
    fn rejects_wrong_length_pauli() {
        let mut t = Tableau::construct_zero(2);
        let too_long = PauliString::from_letters("ZII").unwrap();
        assert!(matches!(
            measure_one(&mut t, &too_long, false),
            Err(Error::MeasurementArityError { expected: 2, found: 3 })
        ));
    }
}
