//! CLI module - Command-line interface for the golf client.
//!
//! Provides commands for:
//! - `login` / `register` / `logout` / `whoami` - Account and session
//! - `dashboard` - Role dashboards
//! - `courses` / `course` / `conditions` - Course catalogue
//! - `bookings` / `book-tee-time` / `cancel-booking` - Bookings
//! - `range` - Driving-range sessions
//! - `admin` - Administration

pub mod args;

pub use args::{Cli, Commands};
