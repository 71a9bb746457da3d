//! Database access: the statement-executor seam and its PostgreSQL backing.
//!
//! Handlers talk to [`Database`], never to the driver directly, so tests can
//! substitute a recording fake. The real implementation, [`PgSession`], holds
//! the single blocking connection for the process lifetime. All statements are
//! parameterized; user input never lands in SQL text.

use std::fmt;
use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use postgres::types::{ToSql, Type};
use postgres::{Client, Config, NoTls, Row};
use rust_decimal::Decimal;

/// A statement parameter.
///
/// Validated calendar dates travel as [`SqlValue::Date`]. Free-form text
/// destined for a `date` column stays [`SqlValue::Text`] with a `$n::date`
/// cast in the statement; every prepare declares its parameter types from the
/// values, so such a cast runs server-side instead of narrowing the parameter
/// itself to `date`.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Int(i32),
    BigInt(i64),
    Text(String),
    Bool(bool),
    Numeric(Decimal),
    Date(NaiveDate),
}

impl SqlValue {
    fn as_param(&self) -> &(dyn ToSql + Sync) {
        match self {
            SqlValue::Int(v) => v,
            SqlValue::BigInt(v) => v,
            SqlValue::Text(v) => v,
            SqlValue::Bool(v) => v,
            SqlValue::Numeric(v) => v,
            SqlValue::Date(v) => v,
        }
    }

    /// The wire type declared for this parameter when preparing.
    fn pg_type(&self) -> Type {
        match self {
            SqlValue::Int(_) => Type::INT4,
            SqlValue::BigInt(_) => Type::INT8,
            SqlValue::Text(_) => Type::TEXT,
            SqlValue::Bool(_) => Type::BOOL,
            SqlValue::Numeric(_) => Type::NUMERIC,
            SqlValue::Date(_) => Type::DATE,
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Int(v) => write!(f, "{}", v),
            SqlValue::BigInt(v) => write!(f, "{}", v),
            SqlValue::Text(v) => write!(f, "'{}'", v),
            SqlValue::Bool(v) => write!(f, "{}", v),
            SqlValue::Numeric(v) => write!(f, "{}", v),
            SqlValue::Date(v) => write!(f, "'{}/{}/{}'", v.month(), v.day(), v.year()),
        }
    }
}

/// A fully materialized query result with every cell already in textual form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// The single seam between operation handlers and the database.
pub trait Database {
    /// Execute a non-row-returning statement, returning the affected count.
    fn execute_update(&mut self, sql: &str, params: &[SqlValue]) -> Result<u64>;

    /// Execute a row-returning statement.
    fn execute_query(&mut self, sql: &str, params: &[SqlValue]) -> Result<Table>;

    /// Close the connection. Safe to call more than once.
    fn close(&mut self) -> Result<()>;
}

/// Print a result table tab-separated and return the number of rows.
///
/// The header line of column names is emitted only when at least one row
/// exists; an empty result prints nothing. Column and row order are exactly
/// what the database returned.
pub fn render_table(table: &Table, out: &mut dyn Write) -> io::Result<usize> {
    if table.rows.is_empty() {
        return Ok(0);
    }
    for name in &table.columns {
        write!(out, "{}\t", name)?;
    }
    writeln!(out)?;
    for row in &table.rows {
        for cell in row {
            write!(out, "{}\t", cell)?;
        }
        writeln!(out)?;
    }
    Ok(table.rows.len())
}

/// One blocking PostgreSQL connection, owned for the process lifetime.
pub struct PgSession {
    client: Option<Client>,
}

impl PgSession {
    /// Connect with an empty password, announcing the target URL.
    ///
    /// There is no retry: a failure here is fatal to the process.
    pub fn open(host: &str, port: u16, dbname: &str, user: &str) -> Result<Self> {
        println!("Connecting to database...");
        println!(
            "Connection URL: postgresql://{}@{}:{}/{}\n",
            user, host, port, dbname
        );
        let client = Config::new()
            .host(host)
            .port(port)
            .dbname(dbname)
            .user(user)
            .connect(NoTls)
            .with_context(|| {
                format!("unable to connect to database {} at {}:{}", dbname, host, port)
            })?;
        println!("Done");
        Ok(Self {
            client: Some(client),
        })
    }

    fn client(&mut self) -> Result<&mut Client> {
        self.client
            .as_mut()
            .context("database connection is closed")
    }
}

impl Database for PgSession {
    fn execute_update(&mut self, sql: &str, params: &[SqlValue]) -> Result<u64> {
        let client = self.client()?;
        let types: Vec<Type> = params.iter().map(SqlValue::pg_type).collect();
        let stmt = client.prepare_typed(sql, &types)?;
        let args: Vec<&(dyn ToSql + Sync)> = params.iter().map(SqlValue::as_param).collect();
        let affected = client.execute(&stmt, &args)?;
        Ok(affected)
    }

    fn execute_query(&mut self, sql: &str, params: &[SqlValue]) -> Result<Table> {
        let client = self.client()?;
        // Prepare first so column metadata is fetched once, even for zero rows.
        let types: Vec<Type> = params.iter().map(SqlValue::pg_type).collect();
        let stmt = client.prepare_typed(sql, &types)?;
        let columns: Vec<String> = stmt
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        let args: Vec<&(dyn ToSql + Sync)> = params.iter().map(SqlValue::as_param).collect();
        let rows = client.query(&stmt, &args)?;

        let mut out = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut cells = Vec::with_capacity(columns.len());
            for idx in 0..row.len() {
                cells.push(cell_text(row, idx)?);
            }
            out.push(cells);
        }
        Ok(Table { columns, rows: out })
    }

    fn close(&mut self) -> Result<()> {
        if let Some(client) = self.client.take() {
            client.close()?;
        }
        Ok(())
    }
}

/// Convert one cell to its textual representation; SQL NULL renders as `null`.
fn cell_text(row: &Row, idx: usize) -> Result<String> {
    let ty = row.columns()[idx].type_();
    let text = if *ty == Type::INT2 {
        display(row.try_get::<_, Option<i16>>(idx)?)
    } else if *ty == Type::INT4 {
        display(row.try_get::<_, Option<i32>>(idx)?)
    } else if *ty == Type::INT8 {
        display(row.try_get::<_, Option<i64>>(idx)?)
    } else if *ty == Type::FLOAT4 {
        display(row.try_get::<_, Option<f32>>(idx)?)
    } else if *ty == Type::FLOAT8 {
        display(row.try_get::<_, Option<f64>>(idx)?)
    } else if *ty == Type::NUMERIC {
        display(row.try_get::<_, Option<Decimal>>(idx)?)
    } else if *ty == Type::BOOL {
        display(row.try_get::<_, Option<bool>>(idx)?)
    } else if *ty == Type::DATE {
        display(row.try_get::<_, Option<NaiveDate>>(idx)?)
    } else if *ty == Type::TIMESTAMP {
        display(row.try_get::<_, Option<NaiveDateTime>>(idx)?)
    } else if *ty == Type::VARCHAR
        || *ty == Type::TEXT
        || *ty == Type::BPCHAR
        || *ty == Type::NAME
    {
        display(row.try_get::<_, Option<String>>(idx)?)
    } else {
        // best effort for anything outside the dispatch list
        row.try_get::<_, Option<String>>(idx)
            .map_or_else(|_| ty.name().to_string(), display)
    };
    Ok(text)
}

fn display<T: fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}
