//! Literal renderers, one per output shape.
//!
//! Every renderer is a pure function of an already sorted entry slice and
//! emits exactly one block per entry, in slice order.

use lut_model::{CAVLC_NOT_APPLICABLE, Field, TableEntry};

const CASE_INDENT: &str = "    ";
const BODY_INDENT: &str = "        ";

fn field(entry: &TableEntry, position: usize) -> String {
    entry.field(position).map(Field::as_text).unwrap_or_default()
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::as_text)
        .collect::<Vec<_>>()
        .join(", ")
}

/// ctxIdxInc switch arms.
///
/// Fields are, in order, the value for frame macroblocks in mode 1, field
/// macroblocks in mode 1, and any macroblock in other modes.
pub fn render_switch_cases(entries: &[TableEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("{CASE_INDENT}case {}:\n", entry.index()));
        out.push_str(&format!(
            "{BODY_INDENT}ctxIdxInc = (mode == 1) ? (isFrame ? {} : {}) : {};\n",
            field(entry, 0),
            field(entry, 1),
            field(entry, 2)
        ));
        out.push_str(&format!("{BODY_INDENT}break;\n"));
        out.push('\n');
    }
    out
}

/// CABAC initialization rows: `/*ctxIdx*/ m, n, m, n, ...,`
pub fn render_cabac_init(entries: &[TableEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{BODY_INDENT}/*{}*/ {},\n",
            entry.index(),
            join_fields(entry.fields())
        ));
    }
    out
}

/// rangeTabLPS rows, each nested under its pStateIdx.
pub fn render_range_tab_lps(entries: &[TableEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!(
            "{BODY_INDENT}/*{index}*/ [{index}] = [{}],\n",
            join_fields(entry.fields()),
            index = entry.index()
        ));
    }
    out
}

/// CAVLC codewords with every column after the first two written as a
/// binary literal.
pub fn render_bit_literals(entries: &[TableEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let cells: Vec<String> = entry
            .fields()
            .iter()
            .enumerate()
            .map(|(position, value)| {
                let text = value.as_text();
                if position < 2 {
                    text
                } else if text == CAVLC_NOT_APPLICABLE {
                    "0b0".to_string()
                } else {
                    format!("0b{text}")
                }
            })
            .collect();
        push_row(&mut out, &cells);
    }
    out
}

/// Bit width of every CAVLC cell; a cell with no codeword has width `0`.
pub fn render_widths(entries: &[TableEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let cells: Vec<String> = entry
            .fields()
            .iter()
            .map(|value| {
                let text = value.as_text();
                if text == CAVLC_NOT_APPLICABLE {
                    "0".to_string()
                } else {
                    text.chars().count().to_string()
                }
            })
            .collect();
        push_row(&mut out, &cells);
    }
    out
}

fn push_row(out: &mut String, cells: &[String]) {
    out.push_str(BODY_INDENT);
    out.push_str(&cells.join(",\t"));
    out.push_str(",\n");
}
