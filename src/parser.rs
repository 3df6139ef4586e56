use crate::data_structures::{PauliString, Tableau};
use crate::error::Error;
use bitvec::prelude::BitVec;

/// The two shapes a caller hands stabilizer (or measurement) input in.
/// Callers tag their input explicitly rather than relying on an implicit
/// string-vs-list conversion at the call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParserInput {
    /// A single comma-separated string, e.g. `"XX,ZZ"`.
    OneString(String),
    /// Already-split elements, each one stabilizer string.
    ManyStrings(Vec<String>),
}

impl ParserInput {
    fn into_elements(self) -> Vec<String> {
        match self {
            ParserInput::OneString(s) => {
                if s.trim().is_empty() {
                    Vec::new()
                } else {
                    s.split(',').map(|piece| piece.trim().to_string()).collect()
                }
            }
            ParserInput::ManyStrings(v) => v,
        }
    }
}

/// One parsed element: a sign and its unsigned letter sequence.
struct ParsedRow {
    sign: bool,
    letters: String,
}

fn parse_one(raw: &str) -> Result<ParsedRow, Error> {
    let (sign, letters) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };
    if letters.is_empty() {
        return Err(Error::ParseError {
            string: raw.to_string(),
            reason: "empty stabilizer string".to_string(),
        });
    }
    Ok(ParsedRow {
        sign,
        letters: letters.to_string(),
    })
}

/// Parses a stabilizer list into a [`Tableau`]. `n`, when given,
/// fixes the expected qubit count; otherwise it is inferred from the
/// first element. A length mismatch among elements, or against `n`,
/// surfaces as a `ParseError` here rather than deferring to the square
/// validator, since the tableau cannot even be constructed without a
/// consistent width.
pub fn parse_stabilizers(input: ParserInput, n: Option<usize>) -> Result<Tableau, Error> {
    let elements = input.into_elements();
    if elements.is_empty() {
        return Err(Error::ParseError {
            string: String::new(),
            reason: "no stabilizer strings supplied".to_string(),
        });
    }

    let mut rows = Vec::with_capacity(elements.len());
    let mut signs = BitVec::with_capacity(elements.len());
    let mut width = n;

    for raw in &elements {
        let parsed = parse_one(raw)?;
        let this_width = parsed.letters.chars().count();
        match width {
            None => width = Some(this_width),
            Some(w) if w != this_width => {
                return Err(Error::ParseError {
                    string: raw.clone(),
                    reason: format!("expected length {w}, found length {this_width}"),
                })
            }
            _ => {}
        }
        let string = PauliString::from_letters(&parsed.letters).map_err(|_| Error::ParseError {
            string: raw.clone(),
            reason: "unrecognized Pauli letter".to_string(),
        })?;
        rows.push(string);
        signs.push(parsed.sign);
    }

    Ok(Tableau::construct(rows, signs))
}

/// Parses a measurement list: a stabilizer-style list of Paulis, paired
/// with a parallel array of outcomes (`0` or `1`), defaulting to all-zero
/// when `outcomes` is `None` or shorter than the Pauli list.
pub fn parse_measurement_list(
    input: ParserInput,
    outcomes: Option<Vec<u8>>,
) -> Result<(Vec<PauliString>, Vec<u8>), Error> {
    let elements = input.into_elements();
    let mut paulis = Vec::with_capacity(elements.len());
    for raw in &elements {
        let parsed = parse_one(raw)?;
        let string = PauliString::from_letters(&parsed.letters).map_err(|_| Error::ParseError {
            string: raw.clone(),
            reason: "unrecognized Pauli letter".to_string(),
        })?;
        paulis.push(string);
    }
    let mut outcomes = outcomes.unwrap_or_default();
    outcomes.resize(paulis.len(), 0);
    Ok((paulis, outcomes))
}

/// Top-level constructor mirroring the original tool's `Stab(n, stabs)`
/// entry point: no arguments at all defaults to the two-qubit Bell state
/// `"XX,ZZ"`; a qubit count with no stabilizers gives the all-zero state of
/// that size; stabilizers (with or without an explicit qubit count) parse
/// as usual via [`parse_stabilizers`].
pub fn construct(n: Option<usize>, stabs: Option<ParserInput>) -> Result<Tableau, Error> {
    match (n, stabs) {
        (None, None) => parse_stabilizers(ParserInput::OneString("XX,ZZ".to_string()), None),
        (Some(n), None) => Ok(Tableau::construct_zero(n)),
        (n, Some(stabs)) => parse_stabilizers(stabs, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_with_no_args_is_bell_state() {
        let t = construct(None, None).unwrap();
        assert_eq!(t.to_strings(), vec!["XX", "ZZ"]);
        assert!(!t.sign(0) && !t.sign(1));
    }

    #[test]
    fn construct_with_n_and_no_stabs_is_zero_state() {
        let t = construct(Some(3), None).unwrap();
        assert_eq!(t.to_strings(), vec!["ZII", "IZI", "IIZ"]);
        assert!((0..3).all(|i| !t.sign(i)));
    }

    #[test]
    fn parses_one_string_comma_separated() {
        let t = parse_stabilizers(ParserInput::OneString("XX,ZZ".to_string()), None).unwrap();
        assert_eq!(t.to_strings(), vec!["XX", "ZZ"]);
    }

    #[test]
    fn parses_many_strings_with_sign() {
        let t = parse_stabilizers(
            ParserInput::ManyStrings(vec!["-XX".to_string(), "ZZ".to_string()]),
            None,
        )
        .unwrap();
        assert_eq!(t.to_strings(), vec!["-XX", "ZZ"]);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = parse_stabilizers(
            ParserInput::ManyStrings(vec!["XX".to_string(), "ZZZ".to_string()]),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, Error::ParseError { .. }));
    }

    #[test]
    fn rejects_empty_input() {
        let err = parse_stabilizers(ParserInput::OneString(String::new()), None).unwrap_err();
        assert!(matches!(err, Error::ParseError { .. }));
    }

    #[test]
    fn measurement_list_defaults_outcomes_to_zero() {
        let (paulis, outcomes) =
            parse_measurement_list(ParserInput::OneString("ZZ".to_string()), None).unwrap();
        assert_eq!(paulis.len(), 1);
        assert_eq!(outcomes, vec![0]);
    }
}
