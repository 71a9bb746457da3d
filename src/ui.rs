//! Console framing: greeting, menu text, and the shared banner rule.

use std::io::{self, Write};

use colored::Colorize;

/// The dashed rule used by every banner frame.
pub const RULE: &str = "----------------------------------------------";

const MENU_ENTRIES: &[&str] = &[
    "1. Add new customer",
    "2. Add new room",
    "3. Add new maintenance company",
    "4. Add new repair",
    "5. Add new Booking",
    "6. Assign house cleaning staff to a room",
    "7. Raise a repair request",
    "8. Get number of available rooms",
    "9. Get number of booked rooms",
    "10. Get hotel bookings for a week",
    "11. Get top k rooms with highest price for a date range",
    "12. Get top k highest booking price for a customer",
    "13. Get customer total cost occurred for a given date range",
    "14. List the repairs made by maintenance company",
    "15. Get top k maintenance companies based on repair count",
    "16. Get number of repairs occurred per year for a given hotel room",
    "17. < EXIT",
];

/// Startup greeting, printed once before the first menu.
pub fn greeting(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n\n{}", RULE)?;
    writeln!(out, "        {}", "Hotel Management Client".bold())?;
    writeln!(out, "{}\n", RULE)?;
    Ok(())
}

/// The fixed 17-entry main menu.
pub fn main_menu(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "MAIN MENU".bold())?;
    writeln!(out, "---------")?;
    for entry in MENU_ENTRIES {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}
