// Hotel Reservations - Core Library
// Exposes the ledger and the shell for the TUI, the demo runner and tests

pub mod dates;
pub mod entities;
pub mod config;
pub mod ledger;
pub mod booking;
pub mod shell;

// Re-export commonly used types
pub use dates::{days_between, normalize_date, parse_date, DATE_FORMAT};
pub use entities::{
    Client, ClientId,
    Room,
    Reservation, ReservationId, ReservationStatus,
};
pub use config::{HotelConfig, RoomSeed};
pub use ledger::ReservationLedger;
pub use booking::{book_stay, confirmation_message, BookingConfirmation, BookingError, BookingRequest};
pub use shell::{FormField, Shell};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
