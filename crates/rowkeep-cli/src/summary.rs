use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rowkeep_core::EngineError;
use rowkeep_model::{CellValue, ColumnRole, Row, Schema, SortOutcome, UpsertResult};

pub fn print_schema(schema: &Schema) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Role"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for column in schema.columns() {
        let name = if column.is_key() {
            Cell::new(&column.name).add_attribute(Attribute::Bold)
        } else {
            Cell::new(&column.name)
        };
        table.add_row(vec![
            Cell::new(column.position),
            name,
            role_cell(column.role),
        ]);
    }
    println!("{table}");
    println!("Key format: {}", schema.key_format());
}

pub fn print_saved(result: &UpsertResult) {
    println!("{} {}", result.status, result.key);
}

pub fn print_rejected(error: &EngineError) {
    match error {
        EngineError::Validation(errors) => {
            for error in errors {
                eprintln!("- {error}");
            }
        }
        other => eprintln!("- {other}"),
    }
}

pub fn print_rows(schema: &Schema, rows: &[Row]) {
    if rows.is_empty() {
        println!("No rows.");
        return;
    }
    let mut table = Table::new();
    table.set_header(
        schema
            .columns()
            .iter()
            .map(|column| header_cell(&column.name))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for (index, column) in schema.columns().iter().enumerate() {
        if column.role.is_numeric() {
            align_column(&mut table, index, CellAlignment::Right);
        }
    }
    for row in rows {
        table.add_row(row.values().map(value_cell).collect::<Vec<_>>());
    }
    println!("{table}");
    println!("{} row(s)", rows.len());
}

pub fn print_rows_json(rows: &[Row]) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

pub fn print_sort(outcome: &SortOutcome) {
    if outcome.rewritten {
        println!("Sorted {} row(s).", outcome.rows);
    } else {
        println!("Already sorted ({} row(s)).", outcome.rows);
    }
    if outcome.unkeyed > 0 {
        eprintln!("{} row(s) without a readable key placed last.", outcome.unkeyed);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn role_cell(role: ColumnRole) -> Cell {
    let color = match role {
        ColumnRole::Key => Color::Yellow,
        ColumnRole::Integer | ColumnRole::Decimal => Color::Green,
        ColumnRole::Text => Color::Reset,
    };
    Cell::new(role).fg(color)
}

fn value_cell(value: &CellValue) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
