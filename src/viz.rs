//! Tableau snapshot rendering.
//!
//! Converts the live tableau into a printable table for debugging: one
//! column per variable plus the right-hand side, one row per constraint
//! labeled with its basic variable, and a trailing `z` row with the
//! current objective entries and the achieved objective value. The cell
//! the next pivot would land on is marked with `*`.
//!
//! The title row and body rows are kept apart instead of going straight
//! into a `prettytable::Table`, so the JSON conversion can walk the same
//! cells without re-parsing rendered text.

use crate::tableau::AuxKind;
use crate::{Number, Tableau};
use lazy_static::lazy_static;
use prettytable::format::{LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};
use serde_json::json;
use std::fmt;

/// Printable snapshot of a tableau at one pivot step.
///
/// This is a read-only debugging surface; nothing in the solving contract
/// depends on it.
#[derive(Clone)]
pub struct TableauView {
    /// Header row: variable names and the rhs column.
    pub title: Row,
    /// One row per constraint plus the trailing objective row.
    pub rows: Vec<Row>,
}

impl TableauView {
    /// Captures the current state of a tableau.
    pub fn new<N: Number>(tableau: &Tableau<N>) -> Self {
        let names = column_names(tableau);
        let pivot = tableau
            .entering_column()
            .and_then(|column| tableau.pivot_row(column).map(|row| (row, column)));

        let mut title = Row::empty();
        title.add_cell(Cell::new(""));
        for name in &names {
            title.add_cell(Cell::new(name).style_spec("brFr"));
        }
        title.add_cell(Cell::new("rhs").style_spec("brFr"));

        let mut rows = Vec::new();
        for (row_index, (matrix_row, rhs)) in
            tableau.matrix.iter().zip(&tableau.rhs).enumerate()
        {
            let mut table_row = Row::empty();
            table_row.add_cell(Cell::new(&names[tableau.basis[row_index]]).style_spec("brFb"));
            for (column, value) in matrix_row.iter().enumerate() {
                let mut text = value.to_string();
                if pivot == Some((row_index, column)) {
                    text.insert(0, '*');
                }
                table_row.add_cell(Cell::new(&text).style_spec("r"));
            }
            table_row.add_cell(Cell::new(&rhs.to_string()).style_spec("r"));
            rows.push(table_row);
        }

        let mut objective_row = Row::empty();
        objective_row.add_cell(Cell::new("z").style_spec("brFb"));
        for value in &tableau.objective {
            objective_row.add_cell(Cell::new(&value.to_string()).style_spec("r"));
        }
        objective_row.add_cell(Cell::new(&tableau.objective_value().to_string()).style_spec("r"));
        rows.push(objective_row);

        TableauView { title, rows }
    }

    /// Prints the rendered table to stdout.
    pub fn printstd(&self) {
        println!("{}", self);
    }
}

fn column_names<N: Number>(tableau: &Tableau<N>) -> Vec<String> {
    let n = tableau.num_decision_variables();
    (0..n)
        .map(|i| format!("x{}", i))
        .chain(tableau.aux.iter().enumerate().map(|(j, aux)| match aux.kind {
            AuxKind::Slack => format!("s{}", j),
            AuxKind::Surplus => format!("e{}", j),
        }))
        .collect()
}

lazy_static! {
    /// Box-drawing table format shared by every rendered snapshot.
    pub static ref TABLEAU_TABLE_FORMAT: TableFormat = {
        let mut format = TableFormat::new();
        format.padding(0, 0);
        format.column_separator('┊');
        format.borders('┊');
        format.separators(&[LinePosition::Top], LineSeparator::new('─', '┬', '┌', '┐'));
        format.separators(&[LinePosition::Title], LineSeparator::new('═', '╪', '╞', '╡'));
        format.separators(&[LinePosition::Intern], LineSeparator::new('─', '┼', '├', '┤'));
        format.separators(&[LinePosition::Bottom], LineSeparator::new('─', '┴', '└', '┘'));
        format
    };
}

impl From<TableauView> for Table {
    fn from(view: TableauView) -> Table {
        let mut table = Table::new();
        table.set_format(*TABLEAU_TABLE_FORMAT);
        table.set_titles(view.title.clone());
        for row in view.rows.iter() {
            table.add_row(row.clone());
        }
        table
    }
}

impl From<TableauView> for serde_json::Value {
    fn from(view: TableauView) -> serde_json::Value {
        let cells = |row: &Row| row.iter().map(|cell| cell.get_content()).collect::<Vec<_>>();
        let mut table_json = vec![cells(&view.title)];
        table_json.extend(view.rows.iter().map(cells));
        json!(table_json)
    }
}

impl fmt::Display for TableauView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Table::from(self.clone()), f)
    }
}
