//! Handlers that tie rooms to people: bookings, housekeeping assignments,
//! and repair requests.

use anyhow::Result;

use crate::db::{Database, SqlValue};
use crate::field;
use crate::session::Session;

/// Menu 5: book a room for a customer.
///
/// An existing booking for the (hotel, room, customer) triple is looked up
/// first; its rows are shown if any exist and nothing else happens. Only when
/// the triple is unbooked does the handler offer to create a booking.
pub fn book_room<D: Database>(session: &mut Session<D>) -> Result<()> {
    let customer = session
        .console
        .prompt("Please input Customer ID: ", field::int)?;
    let hotel = session
        .console
        .prompt("Please input Hotel ID: ", field::int)?;
    let room = session
        .console
        .prompt("Please input Room Number: ", field::int)?;

    let precheck = session.db.execute_query(
        "SELECT bID FROM Booking WHERE hotelID = $1 AND roomNo = $2 AND customer = $3",
        &[
            SqlValue::Int(hotel),
            SqlValue::Int(room),
            SqlValue::Int(customer),
        ],
    );
    let existing = match precheck {
        Ok(table) => session.console.render(&table)?,
        Err(e) => {
            session.console.line(&format!("Query failed: {}", e))?;
            return Ok(());
        }
    };
    if existing != 0 {
        return Ok(());
    }

    let create = session.console.confirm(
        "Your Booking does not yet exist. Would you like to create a new Booking?(y/n): ",
    )?;
    if !create {
        return Ok(());
    }

    let booking_id = session
        .console
        .prompt("Please input Booking Number: ", field::int)?;
    session.console.line("Booking Date is required!")?;
    let date = session.console.prompt_date("Booking date")?;
    let people = session.console.prompt(
        "Please input the number of People for the Booking: ",
        field::int,
    )?;
    let price = session
        .console
        .prompt("Please input the Price: ", field::price)?;

    let insert = "INSERT INTO Booking (bID, customer, hotelID, roomNo, bookingDate, noOfPeople, price) \
                  VALUES ($1, $2, $3, $4, $5, $6, $7)";
    let params = [
        SqlValue::Int(booking_id),
        SqlValue::Int(customer),
        SqlValue::Int(hotel),
        SqlValue::Int(room),
        SqlValue::Date(date.to_naive()?),
        SqlValue::Int(people),
        SqlValue::Numeric(price),
    ];
    match session.db.execute_update(insert, &params) {
        Ok(_) => {
            session.console.banner("Your Booking")?;
            let table = session.db.execute_query(
                "SELECT * FROM Booking WHERE bID = $1",
                &[SqlValue::Int(booking_id)],
            )?;
            session.console.render(&table)?;
            session.console.close_banner()?;
        }
        Err(e) => {
            session.console.line(&format!("Query failed: {}", e))?;
        }
    }
    Ok(())
}

/// Menu 6: assign a house-cleaning staff member to a room.
pub fn assign_housekeeping<D: Database>(session: &mut Session<D>) -> Result<()> {
    let staff = session
        .console
        .prompt("Please input Staff SSN: ", field::int)?;
    let hotel = session
        .console
        .prompt("Please input Hotel ID: ", field::int)?;
    let room = session
        .console
        .prompt("Please input Room number: ", field::int)?;

    let insert = "INSERT INTO Assigned (asgID, staffID, hotelID, roomNo) \
                  VALUES ((SELECT COUNT(*)+1 FROM Assigned), $1, $2, $3)";
    let params = [
        SqlValue::Int(staff),
        SqlValue::Int(hotel),
        SqlValue::Int(room),
    ];
    match session.db.execute_update(insert, &params) {
        Ok(_) => {
            session.console.banner("Assigned House Cleaning Staff")?;
            let table = session.db.execute_query(
                "SELECT * FROM Assigned WHERE staffID = $1",
                &[SqlValue::Int(staff)],
            )?;
            session.console.render(&table)?;
            session.console.close_banner()?;
        }
        Err(e) => {
            session.console.line(&format!("Query failed: {}", e))?;
        }
    }
    Ok(())
}

/// Menu 7: raise a repair request against an existing repair.
pub fn repair_request<D: Database>(session: &mut Session<D>) -> Result<()> {
    let request_id = session.console.prompt("Input Request ID: ", field::int)?;
    let manager = session.console.prompt("Input manager ID: ", field::int)?;
    let repair_id = session.console.prompt("Input Repair ID: ", field::int)?;
    let date = session.console.prompt_date("Request date")?;
    let description = session
        .console
        .prompt("Input request description: ", field::any)?;

    let insert = "INSERT INTO Request (reqID, managerID, repairID, requestDate, description) \
                  VALUES ($1, $2, $3, $4, $5)";
    let params = [
        SqlValue::Int(request_id),
        SqlValue::Int(manager),
        SqlValue::Int(repair_id),
        SqlValue::Date(date.to_naive()?),
        SqlValue::Text(description),
    ];
    match session.db.execute_update(insert, &params) {
        Ok(_) => {
            session.console.banner("Your New Repair Request")?;
            let table = session.db.execute_query(
                "SELECT * FROM Request WHERE reqID = $1",
                &[SqlValue::Int(request_id)],
            )?;
            session.console.render(&table)?;
            session.console.close_banner()?;
        }
        Err(e) => {
            session.console.line(&format!("Query failed: {}", e))?;
        }
    }
    Ok(())
}
