// Domain Records
//
// Plain data holders. Reservations own copies of their client and room,
// so removing either from the ledger never rewrites booking history.

pub mod client;
pub mod room;
pub mod reservation;

pub use client::{Client, ClientId};
pub use room::Room;
pub use reservation::{Reservation, ReservationId, ReservationStatus};
