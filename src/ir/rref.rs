use itertools::Itertools;

use crate::data_structures::{PauliLetter, Tableau};

/// Brings `tableau` into canonical row-echelon form: a binary-symplectic
/// Gauss-Jordan elimination that treats each column's letter (rather than
/// a raw bit) as the unit to eliminate, maintaining pointers `NL` (next
/// column to pivot) and `KU` (next row to place).
///
/// Every letter lookup happens fresh against the current tableau state, so
/// a `row_add` earlier in a pass is always visible to later comparisons in
/// the same pass, rather than against a stale snapshot taken before the
/// pass began.
pub fn rref(tableau: &mut Tableau) {
    let n = tableau.size();
    if n < 2 {
        return;
    }

    let mut nl = 0usize;
    let mut ku = 0usize;

    while nl < n - 1 && ku < n - 1 {
        let distinct: Vec<PauliLetter> = (ku..n)
            .map(|i| tableau.letter(i, nl))
            .filter(|&letter| letter != PauliLetter::I)
            .unique()
            .collect();

        match distinct.len() {
            0 => {
                nl += 1;
            }
            1 => {
                let letter = distinct[0];
                let pivot = (ku..n).find(|&i| tableau.letter(i, nl) == letter).unwrap();
                tableau.swap_rows(ku, pivot);
                for i in (ku + 1)..n {
                    if tableau.letter(i, nl) != PauliLetter::I {
                        tableau.row_add(ku, i);
                    }
                }
                nl += 1;
                ku += 1;
            }
            _ => {
                let letter1 = distinct[0];
                let ref1 = (ku..n).find(|&i| tableau.letter(i, nl) == letter1).unwrap();
                tableau.swap_rows(ku, ref1);

                let letter2 = distinct[1];
                let ref2 = ((ku + 1)..n).find(|&i| tableau.letter(i, nl) == letter2).unwrap();
                tableau.swap_rows(ku + 1, ref2);

                for i in (ku + 2)..n {
                    let letter = tableau.letter(i, nl);
                    if letter == PauliLetter::I {
                        continue;
                    }
                    if letter == letter1 {
                        tableau.row_add(ku, i);
                    } else if letter == letter2 {
                        tableau.row_add(ku + 1, i);
                    } else {
                        tableau.row_add(ku, i);
                        tableau.row_add(ku + 1, i);
                    }
                }
                nl += 1;
                ku += 2;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_stabilizers, ParserInput};

    #[test]
    fn zero_state_is_already_in_rref() {
        let mut t = Tableau::construct_zero(4);
        let before = t.clone();
        rref(&mut t);
        assert_eq!(t, before);
    }

    #[test]
    fn applying_rref_twice_is_idempotent() {
        let mut t = parse_stabilizers(
            ParserInput::OneString("XZZXI,IXZZX,XIXZZ,ZXIXZ,ZZZZZ".to_string()),
            None,
        )
        .unwrap();
        rref(&mut t);
        let once = t.clone();
        rref(&mut t);
        assert_eq!(t, once);
    }

    #[test]
    fn rref_preserves_commutation_and_rank() {
        use crate::validate::{commuter, linear_independence};

        let mut t = parse_stabilizers(
            ParserInput::OneString("XZZXI,IXZZX,XIXZZ,ZXIXZ,ZZZZZ".to_string()),
            None,
        )
        .unwrap();
        rref(&mut t);
        assert!(commuter(&t));
        assert!(linear_independence(&t));
    }
}
