use bitvec::prelude::BitVec;
use std::fmt;

use super::pauli::{phase_exponent, PauliString};
use crate::error::Error;
use crate::IndexType;

/// The binary-symplectic stabilizer tableau of `n` qubits: `n` generator
/// rows, each an unsigned [`PauliString`] of length `n`, plus one sign bit
/// per row. This type itself enforces only shape (every row has length
/// `n`), not the semantic invariants a *valid* tableau satisfies;
/// [`crate::validate::validate`] checks those.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tableau {
    rows: Vec<PauliString>,
    signs: BitVec,
}

impl Tableau {
    /// Builds a tableau directly from its rows and signs, with no invariant
    /// checking beyond shape (every row must have length `rows.len()`).
    pub fn construct(rows: Vec<PauliString>, signs: BitVec) -> Self {
        let n = rows.len();
        assert_eq!(signs.len(), n, "sign vector must have one entry per row");
        for row in &rows {
            assert_eq!(row.len(), n, "every row must have length equal to the qubit count");
        }
        Tableau { rows, signs }
    }

    /// The all-zero-state tableau: stabilizers `Z` on the diagonal, all
    /// signs positive.
    pub fn construct_zero(n: usize) -> Self {
        let rows = (0..n).map(|i| PauliString::single_z(n, i)).collect();
        Tableau {
            rows,
            signs: BitVec::repeat(false, n),
        }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, i: usize) -> &PauliString {
        &self.rows[i]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut PauliString {
        &mut self.rows[i]
    }

    pub fn rows(&self) -> &[PauliString] {
        &self.rows
    }

    pub fn sign(&self, i: usize) -> bool {
        self.signs[i]
    }

    pub fn set_sign(&mut self, i: usize, value: bool) {
        self.signs.set(i, value);
    }

    pub fn signs(&self) -> &BitVec {
        &self.signs
    }

    /// The letter at row `i`, column `j`.
    pub fn letter(&self, i: usize, j: usize) -> super::PauliLetter {
        self.rows[i].pauli(j)
    }

    /// The `X` bit across every row for column `j`, in row order.
    pub fn column_x(&self, j: usize) -> BitVec {
        self.rows.iter().map(|r| r.x(j)).collect()
    }

    /// The `Z` bit across every row for column `j`, in row order.
    pub fn column_z(&self, j: usize) -> BitVec {
        self.rows.iter().map(|r| r.z(j)).collect()
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
        let si = self.signs[i];
        let sj = self.signs[j];
        self.signs.set(i, sj);
        self.signs.set(j, si);
    }

    /// Reverses row order in place. Row order carries no semantic weight for
    /// the stabilized state, but is visible to the synthesis and photonic
    /// components, which exploit specific positions.
    pub fn flip(&mut self) {
        self.rows.reverse();
        let reversed: BitVec = self.signs.iter().rev().by_vals().collect();
        self.signs = reversed;
    }

    /// One canonical stabilizer string per row, `-` prefixed iff signed.
    pub fn to_strings(&self) -> Vec<String> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                if self.signs[i] {
                    format!("-{}", row.to_letters())
                } else {
                    row.to_letters()
                }
            })
            .collect()
    }

    // ---- Clifford gate updates ----------------------------------------

    pub fn h(&mut self, q: IndexType) {
        for i in 0..self.size() {
            let row = &mut self.rows[i];
            let (x, z) = (row.x(q), row.z(q));
            row.set_x(q, z);
            row.set_z(q, x);
            if x & z {
                let s = self.signs[i];
                self.signs.set(i, !s);
            }
        }
    }

    pub fn s(&mut self, q: IndexType) {
        for i in 0..self.size() {
            let row = &mut self.rows[i];
            let (x, z) = (row.x(q), row.z(q));
            if x & z {
                let s = self.signs[i];
                self.signs.set(i, !s);
            }
            row.set_z(q, z ^ x);
        }
    }

    /// The phase inverse of [`Tableau::s`].
    pub fn sdg(&mut self, q: IndexType) {
        self.z(q);
        self.s(q);
    }

    pub fn x(&mut self, q: IndexType) {
        for i in 0..self.size() {
            if self.rows[i].z(q) {
                let s = self.signs[i];
                self.signs.set(i, !s);
            }
        }
    }

    pub fn z(&mut self, q: IndexType) {
        for i in 0..self.size() {
            if self.rows[i].x(q) {
                let s = self.signs[i];
                self.signs.set(i, !s);
            }
        }
    }

    pub fn y(&mut self, q: IndexType) {
        for i in 0..self.size() {
            let row = &self.rows[i];
            if row.x(q) ^ row.z(q) {
                let s = self.signs[i];
                self.signs.set(i, !s);
            }
        }
    }

    /// No-op when `c == t`.
    pub fn cnot(&mut self, c: IndexType, t: IndexType) {
        if c == t {
            return;
        }
        for i in 0..self.size() {
            let row = &mut self.rows[i];
            let (xc, zc, xt, zt) = (row.x(c), row.z(c), row.x(t), row.z(t));
            row.set_x(t, xt ^ xc);
            row.set_z(c, zc ^ zt);
            if xc & zt & (xt ^ zc ^ true) {
                let s = self.signs[i];
                self.signs.set(i, !s);
            }
        }
    }

    /// Implemented as `H(t); CNOT(c,t); H(t)`.
    pub fn cz(&mut self, c: IndexType, t: IndexType) {
        self.h(t);
        self.cnot(c, t);
        self.h(t);
    }

    /// Dynamic-dispatch entry point for a gate named by string, as used by
    /// an external caller replaying a generic gate sequence. `name` is
    /// case-insensitive.
    pub fn apply_gate(
        &mut self,
        name: &str,
        q1: IndexType,
        q2: Option<IndexType>,
    ) -> Result<(), Error> {
        match name.to_ascii_lowercase().as_str() {
            "h" => self.h(q1),
            "s" => self.s(q1),
            "sdg" => self.sdg(q1),
            "x" => self.x(q1),
            "y" => self.y(q1),
            "z" => self.z(q1),
            "cnot" | "cx" => {
                let q2 = q2.ok_or_else(|| Error::GateArityError { gate: name.to_string() })?;
                self.cnot(q1, q2);
            }
            "cz" => {
                let q2 = q2.ok_or_else(|| Error::GateArityError { gate: name.to_string() })?;
                self.cz(q1, q2);
            }
            other => return Err(Error::UnknownGateError(other.to_string())),
        }
        Ok(())
    }

    // ---- Row composition ------------------------------------------------

    /// Replaces row `dst` with the GF(2) sum of rows `src` and `dst`,
    /// tracking the ± phase exactly via the per-position phase-product
    /// table. Callers are responsible for only composing rows that commute
    /// (the usual case: both are generators of the same valid tableau);
    /// composing anticommuting rows leaves the sign undefined.
    pub fn row_add(&mut self, src: usize, dst: usize) {
        let src_row = self.rows[src].clone();
        let src_sign = self.signs[src];
        let n = self.size();

        let mut exponent: u16 = 0;
        for j in 0..n {
            exponent += phase_exponent(src_row.pauli(j), self.rows[dst].pauli(j)) as u16;
        }
        exponent %= 4;
        debug_assert_eq!(
            exponent % 2,
            0,
            "row_add composed anticommuting rows; phase is not a real ±1"
        );
        let epsilon = (exponent / 2) % 2 == 1;

        let dst_sign = self.signs[dst];
        self.signs.set(dst, src_sign ^ dst_sign ^ epsilon);

        let dst_row = &mut self.rows[dst];
        dst_row.x ^= &src_row.x;
        dst_row.z ^= &src_row.z;
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for s in self.to_strings() {
            writeln!(f, "{s}")?;
        }
        Ok(())
    }
}
