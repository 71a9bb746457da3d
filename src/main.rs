//! Entry point: parse arguments, connect, run the menu loop, disconnect.

use std::io;
use std::process;

use clap::Parser;

use hoteldesk::cli::Cli;
use hoteldesk::console::Console;
use hoteldesk::db::PgSession;
use hoteldesk::session::Session;
use hoteldesk::{menu, ui};

fn main() {
    let cli = Cli::parse();

    let mut stdout = io::stdout();
    if let Err(e) = ui::greeting(&mut stdout) {
        eprintln!("{}", e);
        process::exit(1);
    }

    let db = match PgSession::open(&cli.host, cli.port, &cli.dbname, &cli.user) {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Error - Unable to connect to database: {:#}", e);
            eprintln!("Make sure postgres is running on {}:{}", cli.host, cli.port);
            process::exit(1);
        }
    };

    let mut session = Session::new(db, Console::stdio());
    if let Err(e) = menu::run_app(&mut session) {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}
