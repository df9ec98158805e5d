// 🧾 Reservation Entity - a booked stay
//
// A reservation carries its own copies of the client and the room as they
// were when it was booked. Deleting the client afterwards does not touch
// them, so the reservation list keeps showing the guest's name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::client::Client;
use super::room::Room;

// ============================================================================
// IDENTITY
// ============================================================================

/// Opaque reservation identity. Two reservations with identical fields
/// still have different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReservationId(pub Uuid);

impl ReservationId {
    pub fn new() -> Self {
        ReservationId(Uuid::new_v4())
    }
}

impl Default for ReservationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// STATUS
// ============================================================================

/// Cancelling deletes the reservation, so `Confirmed` is the only state
/// a stored reservation can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationStatus {
    Confirmed,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "Confirmed",
        }
    }
}

// ============================================================================
// RESERVATION
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,

    /// Snapshot of the guest at booking time
    pub client: Client,

    /// Snapshot of the room at booking time
    pub room: Room,

    /// Normalized `DD/MM/YYYY`
    pub check_in: String,
    pub check_out: String,

    /// Nights and total are fixed at booking time and never recomputed
    pub days: i64,
    pub total: f64,

    pub status: ReservationStatus,

    /// When the reservation entered the ledger
    pub booked_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(
        client: Client,
        room: Room,
        check_in: String,
        check_out: String,
        days: i64,
        total: f64,
    ) -> Self {
        Reservation {
            id: ReservationId::new(),
            client,
            room,
            check_in,
            check_out,
            days,
            total,
            status: ReservationStatus::Confirmed,
            booked_at: Utc::now(),
        }
    }

    /// One line for the reservation list
    pub fn display_line(&self, currency_symbol: &str) -> String {
        format!(
            "Client: {} - Room {} ({}) - Check-in: {} - Check-out: {} - Status: {} - Total: {}{:.2}",
            self.client.name,
            self.room.number,
            self.room.room_type,
            self.check_in,
            self.check_out,
            self.status.as_str(),
            currency_symbol,
            self.total
        )
    }
}
