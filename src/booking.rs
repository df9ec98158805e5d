// 🛎️ Booking - turn a filled-in form into a confirmed reservation
//
// Order of checks:
// 1. room number parses
// 2. room exists
// 3. stay is at least one night
// Only after all three pass is anything written to the ledger.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::dates::{days_between, normalize_date};
use crate::entities::Reservation;
use crate::ledger::ReservationLedger;

/// Raw form input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub room_number: String,
    pub check_in: String,
    pub check_out: String,
}

/// Every variant is an invalid-input outcome: the ledger is unchanged and
/// the display string goes to the message area.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingError {
    #[error("Please fill in the fields correctly.")]
    InvalidRoomNumber(String),

    #[error("Error: room number {0} not found.")]
    RoomNotFound(i64),

    #[error("Error: the check-out date must be after the check-in date.")]
    InvalidStay {
        check_in: String,
        check_out: String,
    },
}

#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub reservation: Reservation,

    /// Human-readable summary for the message area
    pub message: String,
}

/// Run the booking flow against the ledger.
///
/// Every successful call registers a new client, even when the same
/// name/email booked before.
pub fn book_stay(
    ledger: &mut ReservationLedger,
    request: &BookingRequest,
    currency_symbol: &str,
) -> Result<BookingConfirmation, BookingError> {
    // Any integer is a valid entry; one with no room behind it (negative,
    // too large for a room number) is reported as not found.
    let room_number: i64 = request
        .room_number
        .trim()
        .parse()
        .map_err(|_| BookingError::InvalidRoomNumber(request.room_number.clone()))?;

    let check_in = normalize_date(&request.check_in);
    let check_out = normalize_date(&request.check_out);

    let found = u32::try_from(room_number)
        .ok()
        .and_then(|number| ledger.find_room(number));

    let room = match found {
        Some(room) => room.clone(),
        None => {
            warn!(room_number, "booking rejected: room not found");
            return Err(BookingError::RoomNotFound(room_number));
        }
    };

    let days = days_between(&check_in, &check_out);
    if days <= 0 {
        warn!(%check_in, %check_out, "booking rejected: non-positive stay");
        return Err(BookingError::InvalidStay { check_in, check_out });
    }

    let total = room.price_for(days);

    let client = ledger.register_client(
        request.name.clone(),
        request.email.clone(),
        request.phone.clone(),
    );
    let reservation = ledger.book(&client, &room, check_in, check_out, days, total);

    let message = confirmation_message(&reservation, currency_symbol);
    info!(reservation_id = %reservation.id, "booking confirmed");

    Ok(BookingConfirmation {
        reservation,
        message,
    })
}

/// Two-line summary: room, dates, total and nights
pub fn confirmation_message(reservation: &Reservation, currency_symbol: &str) -> String {
    format!(
        "Reservation confirmed! Room {}, {}, from {} to {}.\nTotal due: {}{:.2} for {} nights.",
        reservation.room.number,
        reservation.room.room_type,
        reservation.check_in,
        reservation.check_out,
        currency_symbol,
        reservation.total,
        reservation.days
    )
}

// ============================================================================
// TESTS
// ============================================================================
