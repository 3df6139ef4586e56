mod pauli;
mod tableau;

pub use pauli::PauliLetter;
pub use pauli::PauliString;
pub use tableau::Tableau;
