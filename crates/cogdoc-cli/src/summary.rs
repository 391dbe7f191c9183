use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cogdoc_cli::commands::IdReport;
use cogdoc_core::IdKind;

pub fn print_ids(report: &IdReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Group"),
        header_cell("Name"),
        header_cell("Id"),
        header_cell("Initial"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);

    for row in &report.rows {
        let colliding = report
            .collisions
            .iter()
            .any(|collision| collision.kind == row.kind && collision.id == row.id);
        let id_cell = if colliding {
            Cell::new(row.id.as_str()).fg(Color::Yellow)
        } else {
            Cell::new(row.id.as_str())
        };
        let name_cell = match row.kind {
            IdKind::Group => Cell::new(&row.name).add_attribute(Attribute::Bold),
            IdKind::Command => Cell::new(&row.name),
        };
        table.add_row(vec![
            dim_cell(row.kind.label()),
            Cell::new(&row.group),
            name_cell,
            id_cell,
            Cell::new(row.initial),
        ]);
    }
    println!("{table}");

    for collision in &report.collisions {
        println!(
            "warning: {} id {} is shared by {}",
            collision.kind.label(),
            collision.id,
            collision.names.join(", ")
        );
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
