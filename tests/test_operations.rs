//! End-to-end handler tests over a fake database and scripted console.

mod common;

use common::{captured, scripted_console, table, FakeDb};
use hoteldesk::ops;
use hoteldesk::session::Session;

#[test]
fn test_add_customer_inserts_and_shows_row() {
    let (console, buffer) = scripted_console(
        "John\nDoe\n1 Main St\n555-1234567\n5551234567\n2000-01-02\nMale\n",
    );
    let db = FakeDb::with_canned(vec![table("fname", &["John"])]);
    let mut session = Session::new(db, console);

    ops::add_customer(&mut session).unwrap();

    assert_eq!(session.db.updates.len(), 1);
    let insert = &session.db.updates[0];
    assert!(insert.sql.contains("INSERT INTO Customer"));
    assert!(insert.sql.contains("(SELECT COUNT(*)+1 FROM Customer)"));
    // free-text DOB rides a text parameter cast server-side
    assert!(insert.sql.contains("$5::date"));
    assert_eq!(insert.params[0], "'John'");
    assert_eq!(insert.params[3], "'5551234567'");

    assert_eq!(session.db.queries.len(), 1);
    assert!(session.db.queries[0].sql.contains("WHERE fName = $1"));

    let output = captured(&buffer);
    // the hyphenated number was too long and got re-prompted
    assert!(output.contains("Make sure you put in a 10 digit phone number!"));
    assert!(output.contains("Your New Customer"));
    assert!(output.contains("fname\t"));
}

#[test]
fn test_add_customer_reports_insert_failure() {
    let (console, buffer) =
        scripted_console("John\nDoe\n1 Main St\n5551234567\nnot-a-date\nMale\n");
    let mut db = FakeDb::new();
    db.fail_updates = true;
    let mut session = Session::new(db, console);

    ops::add_customer(&mut session).unwrap();

    // no follow-up select after a failed insert
    assert!(session.db.queries.is_empty());
    assert!(captured(&buffer)
        .contains("Please check that the date is valid and gender is either Male or Female."));
}

#[test]
fn test_add_room_lists_hotel_rooms() {
    let (console, buffer) = scripted_console("1\n101\nSuite\n");
    let db = FakeDb::with_canned(vec![table("roomno", &["101"])]);
    let mut session = Session::new(db, console);

    ops::add_room(&mut session).unwrap();

    let insert = &session.db.updates[0];
    assert!(insert.sql.contains("INSERT INTO Room"));
    assert_eq!(insert.params, vec!["1", "101", "'Suite'"]);
    assert!(session.db.queries[0].sql.contains("ORDER BY roomNo"));
    assert!(captured(&buffer).contains("Your New Room"));
}

#[test]
fn test_add_room_duplicate_message() {
    let (console, buffer) = scripted_console("1\n101\nSuite\n");
    let mut db = FakeDb::new();
    db.fail_updates = true;
    let mut session = Session::new(db, console);

    ops::add_room(&mut session).unwrap();

    assert!(captured(&buffer).contains("There already exists a room there!"));
}

#[test]
fn test_add_maintenance_company_binds_certified_flag() {
    let (console, buffer) = scripted_console("7\nAcme Repairs\n12 Depot Road\ny\n");
    let db = FakeDb::with_canned(vec![table("cmpid", &["7"])]);
    let mut session = Session::new(db, console);

    ops::add_maintenance_company(&mut session).unwrap();

    let insert = &session.db.updates[0];
    assert!(insert.sql.contains("INSERT INTO MaintenanceCompany"));
    assert_eq!(insert.params, vec!["7", "'Acme Repairs'", "'12 Depot Road'", "true"]);
    assert!(captured(&buffer).contains("Your New Maintenance Company"));
}

#[test]
fn test_add_maintenance_company_rejects_long_name() {
    let long_name = "x".repeat(51);
    let script = format!("7\n{}\nAcme\n12 Depot Road\nn\n", long_name);
    let (console, buffer) = scripted_console(&script);
    let mut session = Session::new(FakeDb::new(), console);

    ops::add_maintenance_company(&mut session).unwrap();

    assert_eq!(session.db.updates[0].params[1], "'Acme'");
    assert!(captured(&buffer).contains("Company name cannot be longer than 50 characters"));
}

#[test]
fn test_add_repair_formats_date_and_caps_february() {
    let (console, buffer) =
        scripted_console("3\n1\n101\n7\n2021\n2\n29\n28\nLeaky faucet\nplumbing\n");
    let db = FakeDb::with_canned(vec![table("rid", &["3"])]);
    let mut session = Session::new(db, console);

    ops::add_repair(&mut session).unwrap();

    let insert = &session.db.updates[0];
    assert!(insert.sql.contains("INSERT INTO Repair"));
    // the date is a real date parameter, no server-side cast needed
    assert!(!insert.sql.contains("::date"));
    assert_eq!(insert.params[4], "'2/28/2021'");
    assert_eq!(insert.params[6], "'plumbing'");

    let output = captured(&buffer);
    // the 29th was refused even though 2021 is not what matters: Feb caps at 28
    assert!(output.contains("Please input valid date."));
    assert!(output.contains("Your inputted date is: \n2/28/2021"));
}

#[test]
fn test_book_room_shows_existing_booking_and_stops() {
    let (console, buffer) = scripted_console("9\n1\n101\n");
    let db = FakeDb::with_canned(vec![table("bid", &["42"])]);
    let mut session = Session::new(db, console);

    ops::book_room(&mut session).unwrap();

    assert!(session.db.updates.is_empty());
    assert_eq!(session.db.queries.len(), 1);
    assert!(session.db.queries[0]
        .sql
        .contains("WHERE hotelID = $1 AND roomNo = $2 AND customer = $3"));
    let output = captured(&buffer);
    assert!(output.contains("bid\t"));
    assert!(!output.contains("Would you like to create a new Booking?"));
}

#[test]
fn test_book_room_declined_creates_nothing() {
    let (console, _buffer) = scripted_console("9\n1\n101\nn\n");
    let mut session = Session::new(FakeDb::new(), console);

    ops::book_room(&mut session).unwrap();

    assert!(session.db.updates.is_empty());
}

#[test]
fn test_book_room_full_flow() {
    let (console, buffer) = scripted_console("9\n1\n101\ny\n55\n2021\n7\n4\n2\n120.50\n");
    let db = FakeDb::with_canned(vec![
        table("bid", &[]),        // pre-check: no existing booking
        table("bid", &["55"]),    // follow-up select
    ]);
    let mut session = Session::new(db, console);

    ops::book_room(&mut session).unwrap();

    let insert = &session.db.updates[0];
    assert!(insert.sql.contains("INSERT INTO Booking"));
    assert_eq!(
        insert.params,
        vec!["55", "9", "1", "101", "'7/4/2021'", "2", "120.50"]
    );

    let output = captured(&buffer);
    assert!(output.contains("Booking Date is required!"));
    assert!(output.contains("Your Booking"));
}

#[test]
fn test_assign_housekeeping_uses_count_sequence() {
    let (console, buffer) = scripted_console("123456789\n1\n101\n");
    let db = FakeDb::with_canned(vec![table("staffid", &["123456789"])]);
    let mut session = Session::new(db, console);

    ops::assign_housekeeping(&mut session).unwrap();

    let insert = &session.db.updates[0];
    assert!(insert.sql.contains("INSERT INTO Assigned"));
    assert!(insert.sql.contains("(SELECT COUNT(*)+1 FROM Assigned)"));
    assert_eq!(insert.params, vec!["123456789", "1", "101"]);
    assert!(captured(&buffer).contains("Assigned House Cleaning Staff"));
}

#[test]
fn test_repair_request_inserts_request() {
    let (console, buffer) = scripted_console("11\n22\n33\n2020\n12\n31\nBroken window\n");
    let db = FakeDb::with_canned(vec![table("reqid", &["11"])]);
    let mut session = Session::new(db, console);

    ops::repair_request(&mut session).unwrap();

    let insert = &session.db.updates[0];
    assert!(insert.sql.contains("INSERT INTO Request"));
    assert_eq!(
        insert.params,
        vec!["11", "22", "33", "'12/31/2020'", "'Broken window'"]
    );
    assert!(captured(&buffer).contains("Your New Repair Request"));
}
