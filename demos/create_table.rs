//! Creates a bare `employees` table for ad-hoc querying.
//!
//! Run with `cargo run --example create_table`.

use rusqlite::Connection;

fn main() -> rusqlite::Result<()> {
    let conn = Connection::open("mydatabase.db")?;

    conn.execute(
        "CREATE TABLE employees (
            id INTEGER PRIMARY KEY,
            name TEXT,
            salary REAL,
            department TEXT,
            position TEXT,
            hire_date TEXT
        )",
        [],
    )?;

    println!("Table employees created.");
    Ok(())
}
