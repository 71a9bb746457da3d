//! The nine read-only reporting operations (menu entries 8 through 16).
//!
//! Each gathers its filters, then runs one fixed query under a titled banner.
//! Query failures are reported inside the frame and control returns to the
//! menu.

use anyhow::Result;

use crate::db::{Database, SqlValue};
use crate::field;
use crate::session::Session;

/// Run one report: banner, query, rows, closing rule.
fn report<D: Database>(
    session: &mut Session<D>,
    title: &str,
    sql: &str,
    params: &[SqlValue],
) -> Result<()> {
    session.console.banner(title)?;
    match session.db.execute_query(sql, params) {
        Ok(table) => {
            session.console.render(&table)?;
        }
        Err(e) => {
            session.console.line(&format!("Query failed: {}", e))?;
        }
    }
    session.console.close_banner()?;
    Ok(())
}

/// Menu 8: rooms of a hotel not taken by any booking.
pub fn available_rooms<D: Database>(session: &mut Session<D>) -> Result<()> {
    let hotel = session
        .console
        .prompt("Please input hotel ID: ", field::int)?;
    report(
        session,
        "Available Rooms",
        "SELECT (SELECT COUNT(*) FROM Room R WHERE R.hotelID = $1) \
         - (SELECT COUNT(*) FROM Booking B WHERE B.hotelID = $1) AS availableRooms",
        &[SqlValue::Int(hotel)],
    )
}

/// Menu 9: count of booked rooms for a hotel.
pub fn booked_rooms<D: Database>(session: &mut Session<D>) -> Result<()> {
    let hotel = session
        .console
        .prompt("Please input hotel ID: ", field::int)?;
    report(
        session,
        "Booked Rooms",
        "SELECT COUNT(B.roomNo) AS reservedRooms FROM Booking B WHERE B.hotelID = $1",
        &[SqlValue::Int(hotel)],
    )
}

/// Menu 10: bookings in the week starting at the given date (inclusive).
pub fn bookings_for_week<D: Database>(session: &mut Session<D>) -> Result<()> {
    let hotel = session
        .console
        .prompt("Please input hotel ID: ", field::int)?;
    let date = session.console.prompt_date("Booking date")?;
    report(
        session,
        "Bookings",
        "SELECT B.roomNo AS bookedRooms FROM Booking B \
         WHERE B.hotelID = $1 AND B.bookingDate BETWEEN $2 AND $2 + 6",
        &[SqlValue::Int(hotel), SqlValue::Date(date.to_naive()?)],
    )
}

/// Menu 11: top k booking prices inside a date range, highest first.
pub fn top_room_prices<D: Database>(session: &mut Session<D>) -> Result<()> {
    let k = session
        .console
        .prompt("Please input number of prices to show: ", field::int)?;
    let start = session.console.prompt_date("start date")?;
    let end = session.console.prompt_date("end date")?;
    report(
        session,
        "Highest Prices",
        "SELECT B.price AS highestPrices FROM Booking B \
         WHERE B.bookingDate BETWEEN $1 AND $2 \
         ORDER BY B.price DESC LIMIT $3",
        &[
            SqlValue::Date(start.to_naive()?),
            SqlValue::Date(end.to_naive()?),
            SqlValue::BigInt(i64::from(k)),
        ],
    )
}

/// Menu 12: top k booking prices paid by one customer.
pub fn top_booking_prices<D: Database>(session: &mut Session<D>) -> Result<()> {
    let customer = session
        .console
        .prompt("Please input customer ID: ", field::int)?;
    let k = session
        .console
        .prompt("Please input number of prices to show: ", field::int)?;
    report(
        session,
        "Customer's Highest Booking Prices",
        "SELECT B.price AS customerPrices FROM Booking B, Customer C \
         WHERE C.customerID = $1 AND C.customerID = B.customer \
         ORDER BY B.price DESC LIMIT $2",
        &[SqlValue::Int(customer), SqlValue::BigInt(i64::from(k))],
    )
}

/// Menu 13: total booking cost for a customer at a hotel over a date range.
pub fn total_cost_for_customer<D: Database>(session: &mut Session<D>) -> Result<()> {
    let hotel = session
        .console
        .prompt("Please input hotel ID: ", field::int)?;
    let customer = session
        .console
        .prompt("Please input customer ID: ", field::int)?;
    let start = session.console.prompt_date("start date")?;
    let end = session.console.prompt_date("end date")?;
    report(
        session,
        "Customer Total Cost",
        "SELECT SUM(B.price) AS totalCost FROM Booking B \
         WHERE B.hotelID = $1 AND B.customer = $2 \
         AND B.bookingDate BETWEEN $3 AND $4",
        &[
            SqlValue::Int(hotel),
            SqlValue::Int(customer),
            SqlValue::Date(start.to_naive()?),
            SqlValue::Date(end.to_naive()?),
        ],
    )
}

/// Menu 14: every repair done by the named maintenance company.
pub fn repairs_by_company<D: Database>(session: &mut Session<D>) -> Result<()> {
    let name = session
        .console
        .prompt("Please input maintenance company name: ", |s| {
            field::non_empty(s, "Company name cannot be empty!")
        })?;
    report(
        session,
        "Repairs Made",
        "SELECT R.rID, R.repairType, R.hotelID, R.roomNo \
         FROM Repair R, MaintenanceCompany M \
         WHERE M.name = $1 AND R.mCompany = M.cmpID",
        &[SqlValue::Text(name)],
    )
}

/// Menu 15: top k maintenance companies by repair count, descending.
pub fn top_maintenance_companies<D: Database>(session: &mut Session<D>) -> Result<()> {
    let k = session
        .console
        .prompt("Please input number of companies to show: ", field::int)?;
    report(
        session,
        "Top Maintenance Companies",
        "SELECT M.name, COUNT(R.rID) AS repairCount \
         FROM MaintenanceCompany M, Repair R \
         WHERE R.mCompany = M.cmpID \
         GROUP BY M.name ORDER BY repairCount DESC LIMIT $1",
        &[SqlValue::BigInt(i64::from(k))],
    )
}

/// Menu 16: repair counts per year for one room.
pub fn repairs_per_year<D: Database>(session: &mut Session<D>) -> Result<()> {
    let hotel = session
        .console
        .prompt("Please input hotel ID: ", field::int)?;
    let room = session
        .console
        .prompt("Please input room number: ", field::int)?;
    report(
        session,
        "Repairs Per Year",
        "SELECT EXTRACT(YEAR FROM R.repairDate) AS year, COUNT(R.rID) AS repairCount \
         FROM Repair R WHERE R.hotelID = $1 AND R.roomNo = $2 \
         GROUP BY EXTRACT(YEAR FROM R.repairDate) ORDER BY year",
        &[SqlValue::Int(hotel), SqlValue::Int(room)],
    )
}
