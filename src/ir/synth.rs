use crate::data_structures::Tableau;
use crate::error::Error;
use crate::gate_record::{GateRecord, GateSink};
use crate::IndexType;

fn rec_h(working: &mut Tableau, trace: &mut Vec<GateRecord>, q: IndexType) {
    working.h(q);
    trace.push(GateRecord::H(q).inverse());
}

fn rec_s(working: &mut Tableau, trace: &mut Vec<GateRecord>, q: IndexType) {
    working.s(q);
    trace.push(GateRecord::S(q).inverse());
}

fn rec_x(working: &mut Tableau, trace: &mut Vec<GateRecord>, q: IndexType) {
    working.x(q);
    trace.push(GateRecord::X(q).inverse());
}

fn rec_cnot(working: &mut Tableau, trace: &mut Vec<GateRecord>, c: IndexType, t: IndexType) {
    working.cnot(c, t);
    trace.push(GateRecord::Cnot { control: c, target: t }.inverse());
}

fn rec_cz(working: &mut Tableau, trace: &mut Vec<GateRecord>, c: IndexType, t: IndexType) {
    working.cz(c, t);
    trace.push(GateRecord::Cz { control: c, target: t }.inverse());
}

/// Produces the gate sequence that prepares `target`'s stabilizer state
/// from `|0...0>`: a standard Aaronson/Gottesman-style reduction on a
/// working copy, recording the inverse of each applied gate, then
/// replaying the recorded trace reversed into `sink`.
///
/// Row swaps and `row_add` are bookkeeping on the working copy only. They
/// relabel or combine generators, not physical operations, so neither
/// contributes a gate record.
pub fn synthesize(target: &Tableau, sink: &mut impl GateSink) -> Result<(), Error> {
    let mut working = target.clone();
    let n = working.size();
    let mut trace: Vec<GateRecord> = Vec::new();

    // 1. Diagonalize the X-block to the identity.
    for i in 0..n {
        if !working.row(i).x(i) {
            if working.row(i).z(i) {
                rec_h(&mut working, &mut trace, i);
            } else if let Some(j) = ((i + 1)..n).find(|&j| working.row(j).x(i)) {
                working.swap_rows(i, j);
            } else if let Some(j) = ((i + 1)..n).find(|&j| working.row(j).z(i)) {
                working.swap_rows(i, j);
                rec_h(&mut working, &mut trace, i);
            } else if let Some(j) = (0..i).find(|&j| working.row(j).z(i)) {
                working.row_add(j, i);
                rec_h(&mut working, &mut trace, i);
            } else {
                return Err(Error::SynthesisFailure { qubit: i });
            }
        }
        for j in 0..n {
            if j != i && working.row(i).x(j) {
                rec_cnot(&mut working, &mut trace, i, j);
            }
        }
    }

    // 2. Clear the Z diagonal.
    for i in 0..n {
        if working.row(i).z(i) {
            rec_s(&mut working, &mut trace, i);
        }
    }

    // 3. Clear off-diagonal Z. Z is symmetric once the diagonal is clear
    // (the rows still commute), so each unordered pair is visited once.
    for i in 0..n {
        for j in (i + 1)..n {
            if working.row(i).z(j) {
                rec_cz(&mut working, &mut trace, i, j);
            }
        }
    }

    // 4. Transform to the all-X basis.
    for i in 0..n {
        rec_h(&mut working, &mut trace, i);
    }

    // 5. Restore signs.
    for i in 0..n {
        if working.sign(i) {
            rec_x(&mut working, &mut trace, i);
        }
    }

    trace.reverse();
    for gate in trace {
        sink.record(gate);
    }
    Ok(())
}
