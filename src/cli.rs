//! CLI argument definitions for hoteldesk.

use clap::Parser;

#[derive(Parser)]
#[command(name = "hoteldesk")]
#[command(version)]
#[command(about = "Menu-driven console client for a hotel management database", long_about = None)]
pub struct Cli {
    /// Name of the database to connect to
    pub dbname: String,

    /// Port the database server listens on
    pub port: u16,

    /// Database user name (the login password is always empty)
    pub user: String,

    /// Database server host
    #[arg(long, default_value = "localhost")]
    pub host: String,
}
