//! Text front end: turns one equation per line into an augmented coefficient table.

use std::collections::HashMap;

use crate::config::SolverConfig;
use crate::error::{Result, SolveError};
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::is_not;
use nom::character::complete::{alpha1, char, digit0, digit1, one_of};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::error::VerboseError;
use nom::number::complete::recognize_float;
use nom::sequence::{pair, tuple};
use tracing::{debug, trace};

/// A left-hand-side chunk that did not contain a recognizable term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredToken {
    /// 1-based line number in the original input.
    pub line: usize,
    pub token: String,
}

/// Variables in discovery order plus one un-padded row per equation.
///
/// A row only has as many coefficient cells as there were variables when its
/// equation was parsed; [`crate::matrix::normalize`] squares it up.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedSystem {
    pub variables: Vec<String>,
    pub rows: Vec<Vec<f64>>,
    pub ignored: Vec<IgnoredToken>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Scan<'a> {
    Term { coefficient: f64, variable: &'a str },
    Ignored(&'a str),
}

pub fn parse_equations(input: &str) -> Result<ParsedSystem> {
    parse_equations_with(input, &SolverConfig::default())
}

pub fn parse_equations_with(input: &str, config: &SolverConfig) -> Result<ParsedSystem> {
    let mut system = ParsedSystem::default();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        if line.is_empty() {
            continue;
        }

        let (lhs, rhs) = line
            .split_once('=')
            .ok_or_else(|| SolveError::malformed(line_no, "equation must contain '='"))?;
        let constant = parse_rhs(rhs, line_no)?;

        let mut row = vec![0.0; system.variables.len()];
        for scan in lhs_chunks(lhs).into_iter().map(scan_chunk) {
            match scan {
                Scan::Term {
                    coefficient,
                    variable,
                } => {
                    if !coefficient.is_finite() {
                        return Err(SolveError::malformed(
                            line_no,
                            format!("coefficient of {variable:?} is not finite"),
                        ));
                    }
                    let col = match index.get(variable) {
                        Some(&col) => col,
                        None => {
                            let col = system.variables.len();
                            index.insert(variable.to_string(), col);
                            system.variables.push(variable.to_string());
                            row.push(0.0);
                            col
                        }
                    };
                    row[col] = coefficient;
                }
                Scan::Ignored(token) => {
                    if config.strict_terms {
                        return Err(SolveError::UnrecognizedTerm {
                            line: line_no,
                            token: token.to_string(),
                        });
                    }
                    debug!(line = line_no, token, "skipping chunk without a term");
                    system.ignored.push(IgnoredToken {
                        line: line_no,
                        token: token.to_string(),
                    });
                }
            }
        }
        row.push(constant);
        trace!(line = line_no, ?row, "parsed equation");
        system.rows.push(row);
    }

    debug!(
        equations = system.rows.len(),
        variables = system.variables.len(),
        "parsed linear system"
    );
    Ok(system)
}

fn parse_rhs(rhs: &str, line: usize) -> Result<f64> {
    let value = match all_consuming(parse_constant)(rhs) {
        Ok((_, value)) => value,
        Err(_) => {
            return Err(SolveError::malformed(
                line,
                format!("right-hand side {rhs:?} is not a number"),
            ));
        }
    };
    if !value.is_finite() {
        return Err(SolveError::malformed(
            line,
            format!("right-hand side {rhs:?} is not finite"),
        ));
    }
    Ok(value)
}

fn parse_constant(input: &str) -> IResult<&str, f64, VerboseError<&str>> {
    map_res(recognize_float, str::parse::<f64>)(input)
}

/// Splits a left-hand side into `[+-]?[^+-]+` chunks. Sign characters that
/// cannot open a chunk are dropped.
fn lhs_chunks(lhs: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = lhs;
    while let Some(first) = rest.chars().next() {
        match chunk(rest) {
            Ok((next, piece)) => {
                chunks.push(piece);
                rest = next;
            }
            Err(_) => rest = &rest[first.len_utf8()..],
        }
    }
    chunks
}

fn chunk(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    recognize(pair(opt(one_of("+-")), is_not("+-")))(input)
}

/// Finds the first term inside a chunk, scanning start positions left to right.
fn scan_chunk(chunk: &str) -> Scan<'_> {
    let found = chunk
        .char_indices()
        .find_map(|(at, _)| term(&chunk[at..]).ok().map(|(_, found)| found));

    match found {
        Some((Some(coefficient), variable)) => Scan::Term {
            coefficient,
            variable,
        },
        Some((None, variable)) => {
            let coefficient = if chunk.starts_with('-') { -1.0 } else { 1.0 };
            Scan::Term {
                coefficient,
                variable,
            }
        }
        None => Scan::Ignored(chunk),
    }
}

fn term(input: &str) -> IResult<&str, (Option<f64>, &str), VerboseError<&str>> {
    alt((
        pair(map(coefficient, Some), alpha1),
        map(alpha1, |name| (None, name)),
    ))(input)
}

fn coefficient(input: &str) -> IResult<&str, f64, VerboseError<&str>> {
    map_res(
        recognize(pair(
            opt(one_of("+-")),
            alt((recognize(tuple((digit0, char('.'), digit1))), digit1)),
        )),
        str::parse::<f64>,
    )(input)
}
