use bitvec::prelude::BitVec;
use std::fmt;

use crate::error::Error;

/// One of the four single-qubit Pauli operators, encoded by the
/// binary-symplectic `(x, z)` pair: I→(0,0), X→(1,0), Y→(1,1), Z→(0,1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PauliLetter {
    I,
    X,
    Y,
    Z,
}

impl PauliLetter {
    pub fn new(x: bool, z: bool) -> Self {
        match (x, z) {
            (false, false) => PauliLetter::I,
            (true, false) => PauliLetter::X,
            (true, true) => PauliLetter::Y,
            (false, true) => PauliLetter::Z,
        }
    }

    pub fn bits(self) -> (bool, bool) {
        match self {
            PauliLetter::I => (false, false),
            PauliLetter::X => (true, false),
            PauliLetter::Y => (true, true),
            PauliLetter::Z => (false, true),
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(PauliLetter::I),
            'X' => Some(PauliLetter::X),
            'Y' => Some(PauliLetter::Y),
            'Z' => Some(PauliLetter::Z),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            PauliLetter::I => 'I',
            PauliLetter::X => 'X',
            PauliLetter::Y => 'Y',
            PauliLetter::Z => 'Z',
        }
    }
}

impl fmt::Display for PauliLetter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Phase contributed by multiplying the letter `left` onto `right` at a
/// single position, as an exponent of `i` in `0..=3` (0 = 1, 1 = i, 2 = -1,
/// 3 = -i).
pub(crate) fn phase_exponent(left: PauliLetter, right: PauliLetter) -> u8 {
    use PauliLetter::*;
    if left == right || left == I || right == I {
        return 0;
    }
    // The remaining pairs cycle X -> Y -> Z -> X with a +i exponent in the
    // forward direction and -i in reverse.
    match (left, right) {
        (X, Y) | (Y, Z) | (Z, X) => 1,
        (Y, X) | (Z, Y) | (X, Z) => 3,
        _ => unreachable!("all I/equal cases handled above"),
    }
}

/// An unsigned length-n Pauli string: the bit pattern of one tableau row,
/// with no sign of its own (sign lives on the owning [`super::Tableau`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PauliString {
    pub(crate) x: BitVec,
    pub(crate) z: BitVec,
}

impl PauliString {
    pub fn new(x: BitVec, z: BitVec) -> Self {
        assert_eq!(x.len(), z.len(), "x and z bit-vectors must have equal length");
        PauliString { x, z }
    }

    /// The all-identity string of length `n`.
    pub fn identity(n: usize) -> Self {
        PauliString {
            x: BitVec::repeat(false, n),
            z: BitVec::repeat(false, n),
        }
    }

    /// A string that is `Z` on qubit `i` and identity elsewhere.
    pub fn single_z(n: usize, i: usize) -> Self {
        let mut s = PauliString::identity(n);
        s.z.set(i, true);
        s
    }

    /// A string that is `X` on qubit `i` and identity elsewhere.
    pub fn single_x(n: usize, i: usize) -> Self {
        let mut s = PauliString::identity(n);
        s.x.set(i, true);
        s
    }

    /// Parses a letter sequence such as `"XZZXI"` (no sign prefix, callers
    /// strip that beforehand). Fails on any character outside `{I,X,Y,Z}`.
    pub fn from_letters(letters: &str) -> Result<Self, Error> {
        let mut x = BitVec::with_capacity(letters.len());
        let mut z = BitVec::with_capacity(letters.len());
        for c in letters.chars() {
            let letter = PauliLetter::from_char(c).ok_or_else(|| Error::ParseError {
                string: letters.to_string(),
                reason: format!("unrecognized Pauli letter {c:?}"),
            })?;
            let (xb, zb) = letter.bits();
            x.push(xb);
            z.push(zb);
        }
        Ok(PauliString { x, z })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self, i: usize) -> bool {
        self.x[i]
    }

    pub fn z(&self, i: usize) -> bool {
        self.z[i]
    }

    pub fn set_x(&mut self, i: usize, value: bool) {
        self.x.set(i, value);
    }

    pub fn set_z(&mut self, i: usize, value: bool) {
        self.z.set(i, value);
    }

    pub fn pauli(&self, i: usize) -> PauliLetter {
        PauliLetter::new(self.x(i), self.z(i))
    }

    pub fn set_pauli(&mut self, i: usize, letter: PauliLetter) {
        let (x, z) = letter.bits();
        self.set_x(i, x);
        self.set_z(i, z);
    }

    /// The canonical letter string, with no sign prefix.
    pub fn to_letters(&self) -> String {
        (0..self.len()).map(|i| self.pauli(i).to_char()).collect()
    }

    /// The GF(2) symplectic inner product against `other`: 0 iff the two
    /// Paulis commute.
    pub fn symplectic_inner(&self, other: &PauliString) -> bool {
        assert_eq!(self.len(), other.len());
        let mut acc = false;
        for i in 0..self.len() {
            acc ^= (self.x(i) & other.z(i)) ^ (self.z(i) & other.x(i));
        }
        acc
    }

    pub fn commutes_with(&self, other: &PauliString) -> bool {
        !self.symplectic_inner(other)
    }

    /// The signed product `self * other`, via the per-position
    /// phase-product table. Used wherever a caller needs to combine two
    /// signed Paulis directly rather than through
    /// [`super::Tableau::row_add`] (which operates on rows already living
    /// in a tableau).
    pub fn compose(&self, self_sign: bool, other: &PauliString, other_sign: bool) -> (PauliString, bool) {
        assert_eq!(self.len(), other.len());
        let mut exponent: u16 = 0;
        for j in 0..self.len() {
            exponent += phase_exponent(self.pauli(j), other.pauli(j)) as u16;
        }
        exponent %= 4;
        debug_assert_eq!(exponent % 2, 0, "composed anticommuting Paulis; phase is not a real +-1");
        let epsilon = (exponent / 2) % 2 == 1;
        let sign = self_sign ^ other_sign ^ epsilon;
        let x = self.x.clone() ^ &other.x;
        let z = self.z.clone() ^ &other.z;
        (PauliString { x, z }, sign)
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_letters())
    }
}
