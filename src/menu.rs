//! The main menu loop: display, read a choice, dispatch, repeat until exit.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;

use crate::db::Database;
use crate::field;
use crate::ops;
use crate::session::Session;
use crate::ui;

/// The exit choice; everything below it dispatches to a handler.
pub const EXIT_CHOICE: i32 = 17;

/// Run the menu loop, then disconnect.
///
/// The connection is closed exactly once, whether the loop ended on the exit
/// choice or on a console failure such as end of input.
pub fn run_app<D: Database>(session: &mut Session<D>) -> Result<()> {
    let outcome = run(session);
    let out = session.console.out();
    write!(out, "Disconnecting from database...")?;
    out.flush()?;
    session.db.close()?;
    session.console.line("Done\n\nBye !")?;
    outcome
}

/// Run the interactive loop until the user selects exit.
///
/// Handler failures are reported and the loop continues; only console I/O
/// failures (such as end of input) end the loop early.
pub fn run<D: Database>(session: &mut Session<D>) -> Result<()> {
    loop {
        ui::main_menu(session.console.out())?;
        let choice = session
            .console
            .prompt("Please make your choice: ", field::int)?;
        if choice == EXIT_CHOICE {
            break;
        }
        match dispatch(session, choice) {
            Ok(true) => {}
            Ok(false) => session.console.line("Unrecognized choice!")?,
            Err(e) => session
                .console
                .line(&format!("{}", e).red().to_string())?,
        }
    }
    Ok(())
}

/// Dispatch one choice; `Ok(false)` means the number maps to no operation.
fn dispatch<D: Database>(session: &mut Session<D>, choice: i32) -> Result<bool> {
    match choice {
        1 => ops::add_customer(session)?,
        2 => ops::add_room(session)?,
        3 => ops::add_maintenance_company(session)?,
        4 => ops::add_repair(session)?,
        5 => ops::book_room(session)?,
        6 => ops::assign_housekeeping(session)?,
        7 => ops::repair_request(session)?,
        8 => ops::available_rooms(session)?,
        9 => ops::booked_rooms(session)?,
        10 => ops::bookings_for_week(session)?,
        11 => ops::top_room_prices(session)?,
        12 => ops::top_booking_prices(session)?,
        13 => ops::total_cost_for_customer(session)?,
        14 => ops::repairs_by_company(session)?,
        15 => ops::top_maintenance_companies(session)?,
        16 => ops::repairs_per_year(session)?,
        _ => return Ok(false),
    }
    Ok(true)
}
