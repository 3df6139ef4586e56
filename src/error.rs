use thiserror::Error;

/// A specialized `Result` type for tableau operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a [`crate::data_structures::Tableau`] fails [`crate::validate::validate`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTableauKind {
    #[error("row count does not equal qubit count, or a row has the wrong length")]
    NotSquare,
    #[error("some column has no non-identity entry in any row")]
    EmptyColumn,
    #[error("some pair of rows does not commute")]
    NonCommuting,
    #[error("the rows are not linearly independent over GF(2)")]
    Dependent,
}

/// Errors returned by this crate. Nothing here is recovered internally: every
/// fallible operation hands the caller a value to act on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A stabilizer string used an unrecognized letter, or the wrong length.
    #[error("could not parse Pauli string {string:?}: {reason}")]
    ParseError { string: String, reason: String },

    /// A constructed or mutated tableau violates one of the four invariants.
    #[error("invalid tableau: {0}")]
    InvalidTableau(InvalidTableauKind),

    /// A two-qubit gate was named without its second qubit.
    #[error("gate {gate} requires a second qubit argument")]
    GateArityError { gate: String },

    /// A gate name did not match any known Clifford gate.
    #[error("unknown gate {0:?}")]
    UnknownGateError(String),

    /// A measurement Pauli had a length other than the tableau's qubit count.
    #[error("measurement Pauli has length {found}, expected {expected}")]
    MeasurementArityError { expected: usize, found: usize },

    /// The circuit synthesizer could not find a pivot; the input tableau did
    /// not actually satisfy the invariants its caller claimed it did.
    #[error("synthesis failed: no pivot available for qubit {qubit}")]
    SynthesisFailure { qubit: usize },

    /// A measurement Pauli commutes with the whole stabilizer group (so the
    /// outcome is deterministic) but the caller asked for the outcome the
    /// group does not have.
    #[error("measurement outcome {requested} is incompatible with the determined state")]
    ContradictoryMeasurement { requested: u8 },

    /// The photonic solver hit a configuration its algorithm does not cover.
    #[error("photonic protocol synthesis does not support this target: {reason}")]
    UnsupportedTarget { reason: String },
}
