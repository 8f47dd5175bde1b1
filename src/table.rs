//! Fixed-width text tables for terminal output.
//!
//! Pure formatting: callers get a composed `String` back and decide
//! what to do with it.

use crate::flights::{Airport, Flight, TIME_FORMAT};
use crate::staff::Worker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// One table column: header title, cell width, cell alignment.
/// Headers are always centered regardless of the cell alignment.
pub struct Column {
    pub title: &'static str,
    pub width: usize,
    pub align: Align,
}

/// Render a bordered table, or `empty_message` alone when there are no
/// rows. Cells wider than the declared column width are emitted
/// unclipped.
pub fn render(columns: &[Column], rows: &[Vec<String>], empty_message: &str) -> String {
    if rows.is_empty() {
        return format!("{empty_message}\n");
    }

    let border = border_line(columns);
    let mut out = String::new();

    out.push_str(&border);
    out.push('\n');

    out.push('|');
    for column in columns {
        out.push_str(&pad(column.title, column.width, Align::Center));
        out.push('|');
    }
    out.push('\n');

    out.push_str(&border);
    out.push('\n');

    for row in rows {
        out.push('|');
        for (cell, column) in row.iter().zip(columns) {
            out.push_str(&pad(cell, column.width, column.align));
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&border);
    out.push('\n');

    out
}

fn border_line(columns: &[Column]) -> String {
    let mut line = String::from("+");
    for column in columns {
        line.push_str(&"-".repeat(column.width));
        line.push('+');
    }
    line
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_owned();
    }

    let fill = width - len;
    match align {
        Align::Left => format!("{text}{}", " ".repeat(fill)),
        Align::Right => format!("{}{text}", " ".repeat(fill)),
        Align::Center => {
            let left = fill / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}

const WORKER_COLUMNS: [Column; 4] = [
    Column {
        title: "#",
        width: 4,
        align: Align::Right,
    },
    Column {
        title: "Name",
        width: 30,
        align: Align::Left,
    },
    Column {
        title: "Post",
        width: 20,
        align: Align::Left,
    },
    Column {
        title: "Year",
        width: 8,
        align: Align::Right,
    },
];

const FLIGHT_COLUMNS: [Column; 5] = [
    Column {
        title: "Number",
        width: 10,
        align: Align::Left,
    },
    Column {
        title: "Departure",
        width: 20,
        align: Align::Left,
    },
    Column {
        title: "Arrival",
        width: 20,
        align: Align::Left,
    },
    Column {
        title: "Departure time",
        width: 16,
        align: Align::Left,
    },
    Column {
        title: "Arrival time",
        width: 16,
        align: Align::Left,
    },
];

const AIRPORT_COLUMNS: [Column; 3] = [
    Column {
        title: "Code",
        width: 6,
        align: Align::Left,
    },
    Column {
        title: "Name",
        width: 30,
        align: Align::Left,
    },
    Column {
        title: "City",
        width: 20,
        align: Align::Left,
    },
];

/// Worker table with a 1-based position column.
pub fn render_workers(workers: &[Worker]) -> String {
    let rows: Vec<Vec<String>> = workers
        .iter()
        .enumerate()
        .map(|(idx, w)| {
            vec![
                (idx + 1).to_string(),
                w.name.clone(),
                w.post.clone(),
                w.year.to_string(),
            ]
        })
        .collect();

    render(&WORKER_COLUMNS, &rows, "The worker list is empty.")
}

pub fn render_flights(flights: &[Flight]) -> String {
    let rows: Vec<Vec<String>> = flights
        .iter()
        .map(|f| {
            vec![
                f.number.clone(),
                f.departure_airport.clone(),
                f.arrival_airport.clone(),
                f.departure_time.format(TIME_FORMAT).to_string(),
                f.arrival_time.format(TIME_FORMAT).to_string(),
            ]
        })
        .collect();

    render(&FLIGHT_COLUMNS, &rows, "The flight list is empty.")
}

pub fn render_airports(airports: &[Airport]) -> String {
    let rows: Vec<Vec<String>> = airports
        .iter()
        .map(|a| vec![a.code.clone(), a.name.clone(), a.city.clone()])
        .collect();

    render(&AIRPORT_COLUMNS, &rows, "The airport list is empty.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rows_render_only_the_message() {
        let columns = [Column {
            title: "id",
            width: 4,
            align: Align::Right,
        }];
        let out = render(&columns, &[], "The worker list is empty.");
        assert_eq!(out, "The worker list is empty.\n");
    }

    #[test]
    fn renders_borders_header_and_aligned_cells() {
        let columns = [
            Column {
                title: "id",
                width: 4,
                align: Align::Right,
            },
            Column {
                title: "name",
                width: 6,
                align: Align::Left,
            },
        ];
        let rows = vec![vec!["1".to_string(), "bob".to_string()]];

        let out = render(&columns, &rows, "empty");
        let expected = "\
+----+------+
| id | name |
+----+------+
|   1|bob   |
+----+------+
";
        assert_eq!(out, expected);
    }

    #[test]
    fn centering_puts_surplus_space_on_the_right() {
        assert_eq!(pad("ab", 5, Align::Center), " ab  ");
    }

    #[test]
    fn overlong_cells_are_not_clipped() {
        assert_eq!(pad("overflow", 4, Align::Left), "overflow");
    }

    #[test]
    fn worker_table_numbers_rows_from_one() {
        let workers = vec![
            Worker {
                name: "Alice".to_string(),
                post: "engineer".to_string(),
                year: 2010,
            },
            Worker {
                name: "Bob".to_string(),
                post: "manager".to_string(),
                year: 2020,
            },
        ];

        let out = render_workers(&workers);
        assert!(out.contains("|   1|Alice"));
        assert!(out.contains("|   2|Bob"));
        assert!(out.contains("    2010|"));
    }
}
