//! Common test helpers: a recording fake database and a scripted console.

use std::collections::VecDeque;
use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use hoteldesk::console::Console;
use hoteldesk::db::{Database, SqlValue, Table};

/// One executed statement as recorded by [`FakeDb`].
#[derive(Debug, Clone)]
pub struct Recorded {
    pub sql: String,
    pub params: Vec<String>,
}

/// In-memory stand-in for the PostgreSQL session.
///
/// Records every statement, hands out canned tables for queries in FIFO
/// order (empty table when the queue runs dry), and counts close calls.
#[derive(Default)]
pub struct FakeDb {
    pub updates: Vec<Recorded>,
    pub queries: Vec<Recorded>,
    pub canned: VecDeque<Table>,
    pub closes: usize,
    pub fail_updates: bool,
    pub fail_queries: bool,
}

impl FakeDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_canned(tables: Vec<Table>) -> Self {
        Self {
            canned: tables.into(),
            ..Self::default()
        }
    }

    fn record(sql: &str, params: &[SqlValue]) -> Recorded {
        Recorded {
            sql: sql.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl Database for FakeDb {
    fn execute_update(&mut self, sql: &str, params: &[SqlValue]) -> Result<u64> {
        self.updates.push(Self::record(sql, params));
        if self.fail_updates {
            bail!("duplicate key value violates unique constraint");
        }
        Ok(1)
    }

    fn execute_query(&mut self, sql: &str, params: &[SqlValue]) -> Result<Table> {
        self.queries.push(Self::record(sql, params));
        if self.fail_queries {
            bail!("relation does not exist");
        }
        Ok(self.canned.pop_front().unwrap_or_default())
    }

    fn close(&mut self) -> Result<()> {
        self.closes += 1;
        Ok(())
    }
}

struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A console fed from `script` (one prompt answer per line) whose output is
/// captured in the returned buffer.
pub fn scripted_console(script: &str) -> (Console, Arc<Mutex<Vec<u8>>>) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let console = Console::new(
        Box::new(Cursor::new(script.as_bytes().to_vec())),
        Box::new(SharedWriter(buffer.clone())),
    );
    (console, buffer)
}

/// The captured console output as a string.
pub fn captured(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
}

/// A single-column table with the given rows, handy for canned results.
pub fn table(column: &str, rows: &[&str]) -> Table {
    Table {
        columns: vec![column.to_string()],
        rows: rows.iter().map(|r| vec![r.to_string()]).collect(),
    }
}
