//! Parser for the flat clause set syntax
//!
//! ```text
//! formula := clause (";" clause)*
//! clause  := literal ("," literal)*
//! literal := "!"? name
//! ```
//!
//! Names are non-empty runs of characters admitted by the configured
//! [`Alphabet`]. Parsing is all-or-nothing: any violation yields
//! [`KalkulusError::InvalidFormulaFormat`] and no partial result.

use crate::config::{Alphabet, ParserConfig};
use crate::error::{KalkulusError, Result};
use crate::logic::{Clause, ClauseSet, Literal};
use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{map, opt},
    multi::separated_list1,
    sequence::pair,
    IResult,
};
use std::fmt;

/// Parse a formula using the reference identifier alphabet
pub fn parse_clause_set(formula: &str) -> Result<ClauseSet<String>> {
    parse_clause_set_with(formula, &ParserConfig::default())
}

/// Parse a formula with an explicit parser configuration
pub fn parse_clause_set_with(formula: &str, config: &ParserConfig) -> Result<ClauseSet<String>> {
    if formula.is_empty() {
        return Err(KalkulusError::InvalidFormulaFormat("empty formula".into()));
    }

    match clause_set(config.alphabet)(formula) {
        Ok(("", clauses)) => {
            let set: ClauseSet<String> = clauses.into_iter().collect();
            tracing::debug!(clauses = set.len(), "parsed clause set");
            Ok(set)
        }
        Ok((rest, _)) => Err(rejection(formula, trailing_failure(formula, rest))),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            Err(rejection(formula, formula.len() - e.input.len()))
        }
        Err(nom::Err::Incomplete(_)) => Err(rejection(formula, formula.len())),
    }
}

/// Render a clause set back into the formula syntax.
///
/// The output parses to an equal clause set as long as every clause is
/// non-empty and every name is admitted by the alphabet used for parsing.
pub fn render_clause_set<L: fmt::Display>(set: &ClauseSet<L>) -> String {
    set.iter()
        .map(|clause| {
            clause
                .iter()
                .map(|lit| lit.to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn literal<'a>(alphabet: Alphabet) -> impl Fn(&'a str) -> IResult<&'a str, Literal<String>> {
    move |input| {
        map(
            pair(opt(char('!')), take_while1(|c| alphabet.admits(c))),
            |(negation, name): (Option<char>, &str)| {
                Literal::new(name.to_string(), negation.is_some())
            },
        )(input)
    }
}

fn clause<'a>(alphabet: Alphabet) -> impl Fn(&'a str) -> IResult<&'a str, Clause<String>> {
    move |input| {
        map(separated_list1(char(','), literal(alphabet)), |literals| {
            literals.into_iter().collect()
        })(input)
    }
}

fn clause_set<'a>(alphabet: Alphabet) -> impl Fn(&'a str) -> IResult<&'a str, Vec<Clause<String>>> {
    move |input| separated_list1(char(';'), clause(alphabet))(input)
}

/// Locate the offending character when a prefix parsed but input remains.
///
/// A dangling delimiter means the literal after it failed; point past the
/// delimiter and past a single negation marker so the report names what is
/// actually wrong.
fn trailing_failure(formula: &str, rest: &str) -> usize {
    let mut pos = formula.len() - rest.len();
    if rest.starts_with([',', ';']) {
        pos += 1;
        if formula[pos..].starts_with('!') {
            pos += 1;
        }
    }
    pos
}

fn rejection(formula: &str, pos: usize) -> KalkulusError {
    let detail = match formula[pos..].chars().next() {
        Some(c) => format!("unexpected character '{}'", c),
        None => "unexpected end of input".to_string(),
    };
    tracing::debug!(position = pos, %detail, "rejected formula");
    KalkulusError::InvalidFormulaFormat(format!("at position {}: {}", pos, detail))
}
