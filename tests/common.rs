pub mod sample_clifford_tableaus;
