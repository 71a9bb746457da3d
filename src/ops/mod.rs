//! Operation handlers, one per menu entry.
//!
//! Every handler follows the same template: gather fields through the
//! session's console, execute one parameterized statement, and frame any
//! query output with the dashed banner. A handler that hits a database error
//! reports it and returns control to the menu; it never ends the process.

pub mod add;
pub mod booking;
pub mod reports;

pub use add::{add_customer, add_maintenance_company, add_repair, add_room};
pub use booking::{assign_housekeeping, book_room, repair_request};
pub use reports::{
    available_rooms, booked_rooms, bookings_for_week, repairs_by_company, repairs_per_year,
    top_booking_prices, top_maintenance_companies, top_room_prices, total_cost_for_customer,
};
