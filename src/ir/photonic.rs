use bitvec::prelude::BitVec;

use crate::data_structures::{PauliLetter, PauliString, Tableau};
use crate::error::Error;
use crate::gate_record::{GateRecord, GateSink};
use crate::ir::height::{emitter_count, height};
use crate::ir::rref::rref;
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

/// Builds the extended tableau `T'`: the original `n_p`-qubit tableau
/// padded with `n_e` identity columns, plus `n_e` new rows, each a single
/// `Z` on one emitter.
fn extend(target: &Tableau, n_e: usize) -> Tableau {
    let n_p = target.size();
    let n = n_p + n_e;

    let mut rows = Vec::with_capacity(n);
    for i in 0..n_p {
        let row = target.row(i);
        let mut x = BitVec::with_capacity(n);
        let mut z = BitVec::with_capacity(n);
        for j in 0..n_p {
            x.push(row.x(j));
            z.push(row.z(j));
        }
        x.resize(n, false);
        z.resize(n, false);
        rows.push(PauliString::new(x, z));
    }

    let mut signs = BitVec::with_capacity(n);
    for i in 0..n_p {
        signs.push(target.sign(i));
    }
    for e in 0..n_e {
        rows.push(PauliString::single_z(n, n_p + e));
        signs.push(false);
    }

    Tableau::construct(rows, signs)
}

/// Synthesizes an emitter-efficient photon emission protocol for the
/// `n_p`-photon graph state `target` represents, using [`emitter_count`]
/// additional emitter qubits. Operations are derived in time-reversed
/// order (photon index descending) against the extended tableau, then
/// replayed into `sink` in the corrected forward order via the same
/// inverse-then-reverse convention as [`crate::ir::synth::synthesize`].
pub fn synthesize_photonic_protocol(target: &Tableau, sink: &mut impl GateSink) -> Result<(), Error> {
    let n_p = target.size();
    let n_e = emitter_count(target);
    let n = n_p + n_e;

    let mut working = extend(target, n_e);
    let mut trace: Vec<GateRecord> = Vec::new();

    for p in (0..n_p).rev() {
        let mut canonical = working.clone();
        rref(&mut canonical);
        let dropped = height(&canonical, p + 1) - height(&canonical, p) < 0;

        if dropped {
            // A row with support on more than one emitter column here would
            // need a more thorough basis rotation before a single emitter
            // could be isolated; that case surfaces as `UnsupportedTarget`
            // rather than guessing at a rotation.
            let (row_with_e, e) = (0..n)
                .find_map(|i| {
                    let emitters: Vec<usize> = (n_p..n)
                        .filter(|&c| working.letter(i, c) != PauliLetter::I)
                        .collect();
                    match emitters.as_slice() {
                        [single] => Some((i, *single)),
                        _ => None,
                    }
                })
                .ok_or_else(|| Error::UnsupportedTarget {
                    reason: format!(
                        "no row has support on exactly one emitter at photon {p}; a more thorough rotation is required"
                    ),
                })?;

            match working.letter(row_with_e, e) {
                PauliLetter::X => rec_h(&mut working, &mut trace, e),
                PauliLetter::Y => {
                    rec_s(&mut working, &mut trace, e);
                    rec_h(&mut working, &mut trace, e);
                }
                PauliLetter::Z => {}
                PauliLetter::I => return Err(Error::SynthesisFailure { qubit: p }),
            }

            trace.push(GateRecord::Measure { src: e, cbit: p }.inverse());
            working.h(e);
            working.cnot(e, p);
        }

        let pivot = (0..n)
            .find(|&i| (0..p).all(|c| working.letter(i, c) == PauliLetter::I) && working.letter(i, p) != PauliLetter::I)
            .ok_or(Error::SynthesisFailure { qubit: p })?;

        for col in p..n {
            match working.letter(pivot, col) {
                PauliLetter::X => rec_h(&mut working, &mut trace, col),
                PauliLetter::Y => {
                    rec_s(&mut working, &mut trace, col);
                    rec_h(&mut working, &mut trace, col);
                }
                _ => {}
            }
        }

        let e = (n_p..n)
            .find(|&c| working.letter(pivot, c) == PauliLetter::Z)
            .ok_or(Error::SynthesisFailure { qubit: p })?;

        for i in (e + 1)..n {
            if working.letter(pivot, i) == PauliLetter::Z {
                rec_cnot(&mut working, &mut trace, i, e);
            }
        }

        trace.push(GateRecord::Absorb { emitter: e, photon: p }.inverse());
        working.cnot(e, p);

        for i in 0..n {
            if i != pivot && working.letter(i, p) != PauliLetter::I {
                working.row_add(pivot, i);
            }
        }
    }

    rref(&mut working);
    for i in 0..n_p {
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
