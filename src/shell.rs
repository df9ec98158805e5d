// 🖥️ Application Shell - form state, message area, rendered listings
//
// Everything a front end needs, with no terminal types. The TUI only
// draws what this hands back and forwards key presses to it.

use tracing::debug;

use crate::booking::{book_stay, BookingRequest};
use crate::config::HotelConfig;
use crate::entities::{ClientId, ReservationId};
use crate::ledger::ReservationLedger;

// ============================================================================
// FORM FIELDS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    RoomNumber,
    CheckIn,
    CheckOut,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::RoomNumber,
        FormField::CheckIn,
        FormField::CheckOut,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Client name",
            FormField::Email => "Client email",
            FormField::Phone => "Client phone",
            FormField::RoomNumber => "Room number (1, 2, 3)",
            FormField::CheckIn => "Check-in (DD/MM/YYYY)",
            FormField::CheckOut => "Check-out (DD/MM/YYYY)",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Phone,
            FormField::Phone => FormField::RoomNumber,
            FormField::RoomNumber => FormField::CheckIn,
            FormField::CheckIn => FormField::CheckOut,
            FormField::CheckOut => FormField::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            FormField::Name => FormField::CheckOut,
            FormField::Email => FormField::Name,
            FormField::Phone => FormField::Email,
            FormField::RoomNumber => FormField::Phone,
            FormField::CheckIn => FormField::RoomNumber,
            FormField::CheckOut => FormField::CheckIn,
        }
    }

    pub fn value<'a>(&self, form: &'a BookingRequest) -> &'a str {
        match self {
            FormField::Name => &form.name,
            FormField::Email => &form.email,
            FormField::Phone => &form.phone,
            FormField::RoomNumber => &form.room_number,
            FormField::CheckIn => &form.check_in,
            FormField::CheckOut => &form.check_out,
        }
    }

    pub fn value_mut<'a>(&self, form: &'a mut BookingRequest) -> &'a mut String {
        match self {
            FormField::Name => &mut form.name,
            FormField::Email => &mut form.email,
            FormField::Phone => &mut form.phone,
            FormField::RoomNumber => &mut form.room_number,
            FormField::CheckIn => &mut form.check_in,
            FormField::CheckOut => &mut form.check_out,
        }
    }
}

// ============================================================================
// SHELL
// ============================================================================

#[derive(Debug)]
pub struct Shell {
    ledger: ReservationLedger,
    config: HotelConfig,
    pub form: BookingRequest,
    message: String,

    /// Whether the message area holds a booking confirmation (vs an error)
    confirmed: bool,
}

impl Shell {
    /// Fresh shell with the configured rooms seeded
    pub fn new(config: HotelConfig) -> Self {
        let ledger = ReservationLedger::with_rooms(&config.rooms);
        Shell {
            ledger,
            config,
            form: BookingRequest::default(),
            message: String::new(),
            confirmed: false,
        }
    }

    pub fn ledger(&self) -> &ReservationLedger {
        &self.ledger
    }

    pub fn config(&self) -> &HotelConfig {
        &self.config
    }

    /// Current contents of the message area
    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when the last booking attempt succeeded
    pub fn message_is_confirmation(&self) -> bool {
        self.confirmed
    }

    /// Book from the current form. Outcome (confirmation or error) lands
    /// in the message area; returns whether a reservation was made.
    ///
    /// The form is kept as typed so a rejected entry can be corrected.
    pub fn submit_booking(&mut self) -> bool {
        match book_stay(&mut self.ledger, &self.form, &self.config.currency_symbol) {
            Ok(confirmation) => {
                self.message = confirmation.message;
                self.confirmed = true;
                true
            }
            Err(err) => {
                self.message = err.to_string();
                self.confirmed = false;
                false
            }
        }
    }

    /// Per-row delete on the reservation list. Absent ids are ignored.
    pub fn cancel_reservation(&mut self, id: ReservationId) {
        match self.ledger.find_reservation(id) {
            Some(reservation) => debug!(
                reservation_id = %id,
                client = %reservation.client.name,
                room_number = reservation.room.number,
                "cancelling reservation row"
            ),
            None => {
                debug!(reservation_id = %id, "reservation already gone");
                return;
            }
        }
        self.ledger.cancel(id);
    }

    /// Per-row delete on the client list. Absent ids are ignored.
    pub fn delete_client(&mut self, id: ClientId) {
        if self.ledger.delete_client(id).is_none() {
            debug!(client_id = %id, "client already gone");
        }
    }

    pub fn room_catalog(&self) -> Vec<String> {
        self.ledger
            .list_rooms()
            .iter()
            .map(|room| room.catalog_line(&self.config.currency_symbol))
            .collect()
    }

    pub fn reservation_rows(&self) -> Vec<(ReservationId, String)> {
        self.ledger
            .list_reservations()
            .iter()
            .map(|r| (r.id, r.display_line(&self.config.currency_symbol)))
            .collect()
    }

    pub fn client_rows(&self) -> Vec<(ClientId, String)> {
        self.ledger
            .list_clients()
            .iter()
            .map(|c| (c.id, c.display_line()))
            .collect()
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(HotelConfig::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================
