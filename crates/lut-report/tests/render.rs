//! Snapshot tests for the literal renderers.

use insta::assert_debug_snapshot;

use lut_model::{Field, TableEntry};
use lut_report::{
    render_bit_literals, render_cabac_init, render_range_tab_lps, render_switch_cases,
    render_widths,
};

fn ints(index: i64, values: &[i64]) -> TableEntry {
    TableEntry::new(index, values.iter().copied().map(Field::Int).collect())
}

fn texts(index: i64, values: &[&str]) -> TableEntry {
    TableEntry::new(index, values.iter().copied().map(Field::from).collect())
}

#[test]
fn ctx_idx_inc_switch() {
    let rendered = render_switch_cases(&[
        texts(3, &["5", "6", "7"]),
        texts(4, &["8", "9", "10"]),
    ]);
    assert_debug_snapshot!(rendered.lines().collect::<Vec<_>>(), @r#"
[
    "    case 3:",
    "        ctxIdxInc = (mode == 1) ? (isFrame ? 5 : 6) : 7;",
    "        break;",
    "",
    "    case 4:",
    "        ctxIdxInc = (mode == 1) ? (isFrame ? 8 : 9) : 10;",
    "        break;",
    "",
]
"#);
}

#[test]
fn range_tab_lps_rows() {
    let rendered = render_range_tab_lps(&[
        ints(0, &[128, 176, 208, 240]),
        ints(1, &[128, 167, 197, 227]),
    ]);
    assert_debug_snapshot!(rendered.lines().collect::<Vec<_>>(), @r#"
[
    "        /*0*/ [0] = [128, 176, 208, 240],",
    "        /*1*/ [1] = [128, 167, 197, 227],",
]
"#);
}

#[test]
fn cabac_init_rows() {
    let rendered = render_cabac_init(&[
        ints(0, &[20, -15, 20, -15, 20, -15, 20, -15]),
        ints(1, &[2, 54, 2, 54, 2, 54, 2, 54]),
    ]);
    assert_debug_snapshot!(rendered.lines().collect::<Vec<_>>(), @r#"
[
    "        /*0*/ 20, -15, 20, -15, 20, -15, 20, -15,",
    "        /*1*/ 2, 54, 2, 54, 2, 54, 2, 54,",
]
"#);
}

#[test]
fn cavlc_lut_and_sizes() {
    let rows = [
        texts(0, &["0", "0", "1", "11", "1111", "000011", "01", "1"]),
        texts(
            1,
            &[
                "0",
                "15",
                "0000000000000111",
                "00000000001001",
                "0000000101",
                "1111000",
                "-",
                "-",
            ],
        ),
    ];

    assert_debug_snapshot!(render_bit_literals(&rows).lines().collect::<Vec<_>>(), @r#"
[
    "        0,\t0,\t0b1,\t0b11,\t0b1111,\t0b000011,\t0b01,\t0b1,",
    "        0,\t15,\t0b0000000000000111,\t0b00000000001001,\t0b0000000101,\t0b1111000,\t0b0,\t0b0,",
]
"#);

    assert_debug_snapshot!(render_widths(&rows).lines().collect::<Vec<_>>(), @r#"
[
    "        1,\t1,\t1,\t2,\t4,\t6,\t2,\t1,",
    "        1,\t2,\t16,\t14,\t10,\t7,\t0,\t0,",
]
"#);
}

#[test]
fn one_block_per_entry() {
    let entries: Vec<TableEntry> = (0..5).map(|index| ints(index, &[1, 2, 3, 4])).collect();
    assert_eq!(render_range_tab_lps(&entries).lines().count(), entries.len());
    assert_eq!(
        render_switch_cases(&entries).matches("break;").count(),
        entries.len()
    );
}
