//! Handlers that create new rows: customers, rooms, maintenance companies,
//! and repairs.

use anyhow::Result;

use crate::db::{Database, SqlValue};
use crate::field;
use crate::session::Session;

/// Menu 1: add a customer and show the inserted row.
///
/// The customer id is a count-based sequence computed by the statement
/// itself, matching the rest of the schema's add operations.
pub fn add_customer<D: Database>(session: &mut Session<D>) -> Result<()> {
    let first = session.console.prompt("Customer First Name: ", |s| {
        field::non_empty(s, "Name cannot be empty!")
    })?;
    let last = session.console.prompt("Customer Last Name: ", |s| {
        field::non_empty(s, "Name cannot be empty!")
    })?;
    let address = session.console.prompt("Customer Address: ", |s| {
        field::non_empty(s, "Please put your address!")
    })?;
    let phone = session
        .console
        .prompt("Customer Phone Number (1234567890): ", field::phone)?;
    let dob = session.console.prompt(
        "Customer Date of Birth Yr-Mnth-Day (e.g. 2008-11-11): ",
        field::any,
    )?;
    let gender = session
        .console
        .prompt("Customer Gender (Male, Female): ", field::any)?;

    let insert = "INSERT INTO Customer (customerID, fName, lName, Address, phNo, DOB, gender) \
                  VALUES ((SELECT COUNT(*)+1 FROM Customer), $1, $2, $3, $4, $5::date, $6)";
    let params = [
        SqlValue::Text(first.clone()),
        SqlValue::Text(last),
        SqlValue::Text(address),
        SqlValue::Text(phone),
        SqlValue::Text(dob),
        SqlValue::Text(gender),
    ];
    match session.db.execute_update(insert, &params) {
        Ok(_) => {
            session.console.banner("Your New Customer")?;
            let table = session.db.execute_query(
                "SELECT * FROM Customer WHERE fName = $1",
                &[SqlValue::Text(first)],
            )?;
            session.console.render(&table)?;
            session.console.close_banner()?;
        }
        Err(_) => {
            session.console.line(
                "Please check that the date is valid and gender is either Male or Female.",
            )?;
        }
    }
    Ok(())
}

/// Menu 2: add a room and list the hotel's rooms.
pub fn add_room<D: Database>(session: &mut Session<D>) -> Result<()> {
    let hotel = session.console.prompt("Enter hotel ID: ", field::int)?;
    let room = session.console.prompt("Enter room number: ", field::int)?;
    let room_type = session.console.prompt("Enter room type: ", |s| {
        field::non_empty(s, "Room type cannot be empty!")
    })?;

    let insert = "INSERT INTO Room (hotelID, roomNo, roomType) VALUES ($1, $2, $3)";
    let params = [
        SqlValue::Int(hotel),
        SqlValue::Int(room),
        SqlValue::Text(room_type),
    ];
    match session.db.execute_update(insert, &params) {
        Ok(_) => {
            session.console.banner("Your New Room")?;
            let table = session.db.execute_query(
                "SELECT * FROM Room WHERE hotelID = $1 ORDER BY roomNo",
                &[SqlValue::Int(hotel)],
            )?;
            session.console.render(&table)?;
            session.console.close_banner()?;
        }
        Err(_) => {
            session.console.line("There already exists a room there!")?;
        }
    }
    Ok(())
}

/// Menu 3: add a maintenance company.
pub fn add_maintenance_company<D: Database>(session: &mut Session<D>) -> Result<()> {
    let cmp_id = session.console.prompt("Input Company ID: ", field::int)?;
    let name = session.console.prompt("Input Company Name: ", |s| {
        field::bounded(s, 50, "Company name cannot be longer than 50 characters")
    })?;
    let address = session
        .console
        .prompt("Input Company Address: ", field::any)?;
    let certified = session
        .console
        .confirm("Is this company certified? (y/n): ")?;

    let insert = "INSERT INTO MaintenanceCompany (cmpID, name, address, isCertified) \
                  VALUES ($1, $2, $3, $4)";
    let params = [
        SqlValue::Int(cmp_id),
        SqlValue::Text(name),
        SqlValue::Text(address),
        SqlValue::Bool(certified),
    ];
    match session.db.execute_update(insert, &params) {
        Ok(_) => {
            session.console.banner("Your New Maintenance Company")?;
            let table = session.db.execute_query(
                "SELECT * FROM MaintenanceCompany WHERE cmpID = $1",
                &[SqlValue::Int(cmp_id)],
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

/// Menu 4: add a repair performed by a maintenance company on a room.
pub fn add_repair<D: Database>(session: &mut Session<D>) -> Result<()> {
    let repair_id = session.console.prompt("Input repair ID: ", field::int)?;
    let hotel = session.console.prompt("Input hotel ID: ", field::int)?;
    let room = session.console.prompt("Input room number: ", field::int)?;
    let company = session
        .console
        .prompt("Input maintenance company ID: ", field::int)?;
    let date = session.console.prompt_date("Repair date")?;
    let description = session
        .console
        .prompt("Input repair description: ", field::any)?;
    let repair_type = session.console.prompt("Input repair type: ", |s| {
        field::bounded(s, 30, "Repair type cannot be longer than 30 characters.")
    })?;

    let insert = "INSERT INTO Repair (rID, hotelID, roomNo, mCompany, repairDate, description, repairType) \
                  VALUES ($1, $2, $3, $4, $5, $6, $7)";
    let params = [
        SqlValue::Int(repair_id),
        SqlValue::Int(hotel),
        SqlValue::Int(room),
        SqlValue::Int(company),
        SqlValue::Date(date.to_naive()?),
        SqlValue::Text(description),
        SqlValue::Text(repair_type),
    ];
    match session.db.execute_update(insert, &params) {
        Ok(_) => {
            session.console.banner("Your New Repair")?;
            let table = session.db.execute_query(
                "SELECT * FROM Repair WHERE rID = $1",
                &[SqlValue::Int(repair_id)],
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
