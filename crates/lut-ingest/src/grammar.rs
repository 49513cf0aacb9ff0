//! Per-table line grammars.
//!
//! Every grammar splits a normalized line on whitespace. The first token of
//! each logical entry is its index; any other shape is a
//! [`LutError::MalformedLine`].

use lut_model::{CAVLC_NOT_APPLICABLE, Field, LutError, Result, TableEntry};

use crate::source::SourceLine;

const CTX_IDX_INC_FIELDS: usize = 3;
const CABAC_INIT_FIELDS: usize = 8;
const RANGE_TAB_LPS_FIELDS: usize = 4;

fn tokens(line: &SourceLine) -> Vec<&str> {
    line.text.split_whitespace().collect()
}

fn parse_index(line: &SourceLine, token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| {
        LutError::malformed(line.number, &line.text, format!("invalid index {token:?}"))
    })
}

fn parse_int_field(line: &SourceLine, token: &str) -> Result<Field> {
    token.parse::<i64>().map(Field::Int).map_err(|_| {
        LutError::malformed(line.number, &line.text, format!("invalid value {token:?}"))
    })
}

fn expect_token_count(line: &SourceLine, found: usize, expected: usize) -> Result<()> {
    if found == expected {
        Ok(())
    } else {
        Err(LutError::malformed(
            line.number,
            &line.text,
            format!("expected {expected} tokens, found {found}"),
        ))
    }
}

/// Split a line holding exactly two fixed-width entries.
fn parse_entry_pair<F>(line: &SourceLine, width: usize, mut field: F) -> Result<Vec<TableEntry>>
where
    F: FnMut(&SourceLine, &str) -> Result<Field>,
{
    let tokens = tokens(line);
    expect_token_count(line, tokens.len(), 2 * (1 + width))?;
    tokens
        .chunks(1 + width)
        .map(|chunk| {
            let index = parse_index(line, chunk[0])?;
            let fields = chunk[1..]
                .iter()
                .map(|token| field(line, *token))
                .collect::<Result<Vec<_>>>()?;
            Ok(TableEntry::new(index, fields))
        })
        .collect()
}

/// `idx f0 f1 f2 idx f0 f1 f2`
pub fn parse_ctx_idx_inc_line(line: &SourceLine) -> Result<Vec<TableEntry>> {
    parse_entry_pair(line, CTX_IDX_INC_FIELDS, |_, token| Ok(Field::from(token)))
}

/// `idx f0 f1 f2 f3 idx f0 f1 f2 f3`
pub fn parse_range_tab_lps_line(line: &SourceLine) -> Result<Vec<TableEntry>> {
    parse_entry_pair(line, RANGE_TAB_LPS_FIELDS, parse_int_field)
}

/// `idx f0..f7` or `idx f0..f7 idx f0..[f7]`.
///
/// The second entry of a two-entry line may be cut short by the page layout
/// of the source table; its missing trailing values become `0`.
pub fn parse_cabac_init_line(line: &SourceLine) -> Result<Vec<TableEntry>> {
    let tokens = tokens(line);
    let single = 1 + CABAC_INIT_FIELDS;
    if tokens.len() < single || tokens.len() > 2 * single {
        return Err(LutError::malformed(
            line.number,
            &line.text,
            format!(
                "expected {single} to {} tokens, found {}",
                2 * single,
                tokens.len()
            ),
        ));
    }

    let mut entries = Vec::with_capacity(2);
    let (first, rest) = tokens.split_at(single);
    entries.push(cabac_init_entry(line, first)?);
    if !rest.is_empty() {
        entries.push(cabac_init_entry(line, rest)?);
    }
    Ok(entries)
}

fn cabac_init_entry(line: &SourceLine, tokens: &[&str]) -> Result<TableEntry> {
    let index = parse_index(line, tokens[0])?;
    let mut fields = Vec::with_capacity(CABAC_INIT_FIELDS);
    for position in 0..CABAC_INIT_FIELDS {
        match tokens.get(1 + position) {
            Some(token) => fields.push(parse_int_field(line, token)?),
            None => fields.push(Field::Int(0)),
        }
    }
    Ok(TableEntry::new(index, fields))
}

/// `TrailingOnes TotalCoeff pattern...`
///
/// CAVLC rows carry no index of their own; `row` is the ordinal of the row in
/// the file. Patterns are binary digits or `-` for an empty cell. Any column
/// may carry a trailing comma; a token that is only commas is malformed.
pub fn parse_cavlc_line(row: i64, line: &SourceLine) -> Result<TableEntry> {
    let tokens: Vec<&str> = tokens(line)
        .into_iter()
        .map(|token| token.trim_end_matches(','))
        .collect();
    if tokens.len() < 2 {
        return Err(LutError::malformed(
            line.number,
            &line.text,
            format!("expected at least 2 tokens, found {}", tokens.len()),
        ));
    }

    let mut fields = Vec::with_capacity(tokens.len());
    for token in &tokens[..2] {
        parse_int_field(line, token)?;
        fields.push(Field::from(*token));
    }
    for pattern in &tokens[2..] {
        if !is_cavlc_pattern(pattern) {
            return Err(LutError::malformed(
                line.number,
                &line.text,
                format!("invalid bit pattern {pattern:?}"),
            ));
        }
        fields.push(Field::from(*pattern));
    }
    Ok(TableEntry::new(row, fields))
}

fn is_cavlc_pattern(pattern: &str) -> bool {
    pattern == CAVLC_NOT_APPLICABLE
        || (!pattern.is_empty() && pattern.chars().all(|c| c == '0' || c == '1'))
}
