mod common;

use common::sample_users;
use user_crud_core::cli::output::{set_preferences, OutputPreferences};
use user_crud_core::cli::ui::table_renderer::{
    horizontal_rule, render_cell, Alignment, Table, TableColumn, MAX_CELL_WIDTH,
};
use user_crud_core::schema::user_schema;

fn plain() {
    set_preferences(OutputPreferences {
        plain_mode: true,
        quiet_mode: false,
    });
}

#[test]
fn width_calculation_respects_constraints() {
    let table = Table {
        columns: vec![
            TableColumn {
                header: "Name".into(),
                min_width: 4,
                max_width: Some(8),
                alignment: Alignment::Left,
            },
            TableColumn {
                header: "Notes".into(),
                min_width: 10,
                max_width: None,
                alignment: Alignment::Left,
            },
        ],
        rows: vec![
            vec!["AlphaBetaGamma".into(), "Short".into()],
            vec!["BB".into(), "Detailed overview entry".into()],
        ],
        padding: 1,
    };
    assert_eq!(table.compute_widths(), vec![8, 23]);
}

#[test]
fn render_cell_respects_alignment_and_truncates() {
    assert_eq!(render_cell("AB", 4, Alignment::Left, 1), " AB   ");
    assert_eq!(render_cell("AB", 4, Alignment::Right, 1), "   AB ");
    assert_eq!(render_cell("Lovelace", 5, Alignment::Left, 0), "Love…");
}

#[test]
fn schema_table_has_id_then_field_columns() {
    plain();
    let users = sample_users();
    let table = Table::from_schema(user_schema(), &users);

    let headers: Vec<&str> = table.columns.iter().map(|c| c.header.as_str()).collect();
    assert_eq!(
        headers,
        vec!["ID", "First Name", "Last Name", "Email Address", "Phone Number"]
    );
    assert!(table
        .columns
        .iter()
        .all(|c| c.max_width == Some(MAX_CELL_WIDTH)));

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 2 + users.len());
    assert!(lines[0].trim_start().starts_with("ID"));
    assert!(lines[1].chars().all(|ch| ch == '-'));
    assert!(lines[2].contains("u1") && lines[2].contains("Lovelace"));
    assert!(lines[4].contains("grace.hopper@example.com"));
}

#[test]
fn horizontal_rule_spans_padded_columns() {
    plain();
    assert_eq!(horizontal_rule(&[3, 2], 1), "-".repeat(10));
    assert_eq!(horizontal_rule(&[], 1), "");
}
