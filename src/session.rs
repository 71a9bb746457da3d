//! The per-process session context threaded through every handler.

use crate::console::Console;
use crate::db::Database;

/// Owns the database handle and the console for the lifetime of the menu
/// loop. Handlers receive `&mut Session` instead of reaching for globals,
/// which is what makes them drivable with a fake connection and scripted
/// input.
pub struct Session<D: Database> {
    pub db: D,
    pub console: Console,
}

impl<D: Database> Session<D> {
    pub fn new(db: D, console: Console) -> Self {
        Self { db, console }
    }
}
