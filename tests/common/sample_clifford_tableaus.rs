use stabir::parser::{parse_stabilizers, ParserInput};
use stabir::{graph, Tableau};

/// The two-qubit Bell state: stabilizers `XX`, `ZZ`, both signs positive.
pub fn bell_state() -> Tableau {
    let mut t = Tableau::construct_zero(2);
    t.h(0);
    t.cnot(0, 1);
    t
}

/// The five-qubit perfect code.
pub fn five_qubit_code() -> Tableau {
    parse_stabilizers(
        ParserInput::OneString("XZZXI,IXZZX,XIXZZ,ZXIXZ,ZZZZZ".to_string()),
        None,
    )
    .unwrap()
}

/// The graph state of the 5-cycle `0-1-2-3-4-0`.
pub fn five_cycle_graph_state() -> Tableau {
    graph::from_edge_list(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)])
}
