//! Interactive console with injectable input and output.
//!
//! The real binary wires this to stdin/stdout; tests inject a scripted reader
//! and a capture buffer. Each prompt loops `prompt → parse → validate` until a
//! validator from [`crate::field`] accepts the line, printing the validator's
//! message before re-prompting. Only I/O failures (including end of input)
//! escape the loop.

use std::io::{self, BufRead, BufReader, Write};

use anyhow::{bail, Result};

use crate::db::{render_table, Table};
use crate::field::{self, CalendarDate};
use crate::ui;

pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl Console {
    /// Console over the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(
            Box::new(BufReader::new(io::stdin())),
            Box::new(io::stdout()),
        )
    }

    /// Console over arbitrary streams, for scripted tests.
    pub fn new(input: Box<dyn BufRead>, output: Box<dyn Write>) -> Self {
        Self { input, output }
    }

    /// The raw output stream, for callers that render directly.
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.output
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            bail!("end of input");
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Prompt until `parse` accepts the entered line.
    pub fn prompt<T>(&mut self, label: &str, parse: impl Fn(&str) -> Result<T>) -> Result<T> {
        loop {
            write!(self.output, "{}", label)?;
            self.output.flush()?;
            let raw = self.read_line()?;
            match parse(&raw) {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    /// Gather a calendar date from three prompts and echo the result.
    ///
    /// `what` names the date in the prompts, e.g. `"Repair date"` produces
    /// `Input Repair date year: ` and so on.
    pub fn prompt_date(&mut self, what: &str) -> Result<CalendarDate> {
        let year = self.prompt(&format!("Input {} year: ", what), field::year)?;
        let month = self.prompt(&format!("Input {} month: ", what), field::month)?;
        let day = self.prompt(&format!("Input {} day: ", what), |raw| {
            field::day(raw, month)
        })?;
        let date = CalendarDate { year, month, day };
        writeln!(self.output, "Your inputted date is: ")?;
        writeln!(self.output, "{}", date)?;
        Ok(date)
    }

    /// Ask a y/n question, re-prompting until one is given.
    pub fn confirm(&mut self, label: &str) -> Result<bool> {
        self.prompt(label, field::yes_no)
    }

    /// Print one line.
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print the dashed banner that frames an operation's output.
    pub fn banner(&mut self, title: &str) -> Result<()> {
        writeln!(self.output, "\n\n{}", ui::RULE)?;
        writeln!(self.output, "              {}", title)?;
        writeln!(self.output, "{}\n", ui::RULE)?;
        Ok(())
    }

    /// Print the closing rule of a banner frame.
    pub fn close_banner(&mut self) -> Result<()> {
        writeln!(self.output, "\n\n{}", ui::RULE)?;
        Ok(())
    }

    /// Render a query result to the console, returning the row count.
    pub fn render(&mut self, table: &Table) -> Result<usize> {
        let count = render_table(table, &mut *self.output)?;
        Ok(count)
    }
}
