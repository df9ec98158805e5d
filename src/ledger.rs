// 📒 Reservation Ledger - in-memory clients, rooms and reservations
//
// The ledger is an owned value with no UI types. Removal goes through
// stable ids (ClientId / ReservationId), never field equality, so two
// identical-looking entries can't be confused.

use tracing::{debug, info};

use crate::config::RoomSeed;
use crate::entities::{Client, ClientId, Reservation, ReservationId, Room};

#[derive(Debug, Clone)]
pub struct ReservationLedger {
    clients: Vec<Client>,
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,

    /// Next client id. Only ever incremented, so ids are not reused after a delete.
    next_client_id: u32,
}

impl ReservationLedger {
    /// Empty ledger, no rooms
    pub fn new() -> Self {
        ReservationLedger {
            clients: Vec::new(),
            rooms: Vec::new(),
            reservations: Vec::new(),
            next_client_id: 1,
        }
    }

    /// Ledger with the given room catalog registered in order
    pub fn with_rooms(seeds: &[RoomSeed]) -> Self {
        let mut ledger = Self::new();
        for seed in seeds {
            ledger.register_room(seed.number, seed.room_type.clone(), seed.price, seed.available);
        }
        ledger
    }

    // ========================================================================
    // CLIENTS
    // ========================================================================

    pub fn register_client(&mut self, name: String, email: String, phone: String) -> Client {
        let id = ClientId(self.next_client_id);
        self.next_client_id += 1;

        let client = Client::new(id, name, email, phone);
        self.clients.push(client.clone());

        info!(client_id = %id, "registered client");
        client
    }

    pub fn list_clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn find_client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Remove a client. Reservations keep their own copy of the client.
    ///
    /// Returns `None` (and changes nothing) when the id is not present.
    pub fn delete_client(&mut self, id: ClientId) -> Option<Client> {
        let Some(index) = self.clients.iter().position(|c| c.id == id) else {
            debug!(client_id = %id, "delete requested for unknown client");
            return None;
        };

        let removed = self.clients.remove(index);
        info!(client_id = %id, "deleted client");
        Some(removed)
    }

    // ========================================================================
    // ROOMS
    // ========================================================================

    /// Append a room verbatim. Duplicate numbers are accepted.
    pub fn register_room(&mut self, number: u32, room_type: String, price: f64, available: bool) -> Room {
        let room = Room::new(number, room_type, price, available);
        self.rooms.push(room.clone());

        debug!(room_number = number, room_type = %room.room_type, "registered room");
        room
    }

    pub fn list_rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// First room with this number, in registration order
    pub fn find_room(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }

    // ========================================================================
    // RESERVATIONS
    // ========================================================================

    /// Record a confirmed reservation.
    ///
    /// `days` and `total` are stored as given. The room's availability flag
    /// is left alone and no overlap check is made.
    pub fn book(
        &mut self,
        client: &Client,
        room: &Room,
        check_in: String,
        check_out: String,
        days: i64,
        total: f64,
    ) -> Reservation {
        let reservation = Reservation::new(client.clone(), room.clone(), check_in, check_out, days, total);
        self.reservations.push(reservation.clone());

        info!(
            reservation_id = %reservation.id,
            client_id = %client.id,
            room_number = room.number,
            days,
            total,
            "booked reservation"
        );
        reservation
    }

    /// Reservations in booking order
    pub fn list_reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn find_reservation(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    /// Remove exactly the reservation with this id.
    ///
    /// Returns `None` (and changes nothing) when the id is not present.
    pub fn cancel(&mut self, id: ReservationId) -> Option<Reservation> {
        let Some(index) = self.reservations.iter().position(|r| r.id == id) else {
            debug!(reservation_id = %id, "cancel requested for unknown reservation");
            return None;
        };

        let removed = self.reservations.remove(index);
        info!(reservation_id = %id, "cancelled reservation");
        Some(removed)
    }
}

impl Default for ReservationLedger {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HotelConfig;

    fn seeded_ledger() -> ReservationLedger {
        ReservationLedger::with_rooms(&HotelConfig::default().rooms)
    }

    fn register(ledger: &mut ReservationLedger, name: &str) -> Client {
        ledger.register_client(
            name.to_string(),
            format!("{}@example.com", name.to_lowercase()),
            "555-0100".to_string(),
        )
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = ReservationLedger::new();

        assert!(ledger.list_clients().is_empty());
        assert!(ledger.list_rooms().is_empty());
        assert!(ledger.list_reservations().is_empty());
    }

    #[test]
    fn test_with_rooms_registers_in_order() {
        let ledger = seeded_ledger();

        let numbers: Vec<u32> = ledger.list_rooms().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(ledger.find_room(3).map(|r| r.room_type.as_str()), Some("Suite"));
        assert!(ledger.find_room(99).is_none());
    }

    #[test]
    fn test_client_ids_are_sequential() {
        let mut ledger = ReservationLedger::new();

        let ids: Vec<u32> = ["Ana", "Bruno", "Carla"]
            .iter()
            .map(|name| register(&mut ledger, name).id.0)
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(ledger.list_clients().len(), 3);
    }

    #[test]
    fn test_client_ids_not_reused_after_delete() {
        let mut ledger = ReservationLedger::new();
        register(&mut ledger, "Ana");
        register(&mut ledger, "Bruno");
        let carla = register(&mut ledger, "Carla");

        ledger.delete_client(carla.id);
        let daniel = register(&mut ledger, "Daniel");

        assert_eq!(daniel.id, ClientId(4));
        let ids: Vec<u32> = ledger.list_clients().iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn test_duplicate_clients_are_allowed() {
        let mut ledger = ReservationLedger::new();
        let first = register(&mut ledger, "Ana");
        let second = register(&mut ledger, "Ana");

        assert_ne!(first.id, second.id);
        assert_eq!(first.email, second.email);
        assert_eq!(ledger.list_clients().len(), 2);
    }

    #[test]
    fn test_duplicate_room_numbers_first_match_wins() {
        let mut ledger = seeded_ledger();
        ledger.register_room(2, "Penthouse".to_string(), 900.0, false);

        assert_eq!(ledger.list_rooms().len(), 4);
        assert_eq!(ledger.find_room(2).map(|r| r.room_type.as_str()), Some("Double"));
    }

    #[test]
    fn test_book_records_confirmed_reservation() {
        let mut ledger = seeded_ledger();
        let client = register(&mut ledger, "Ana");
        let room = ledger.find_room(2).cloned().unwrap();

        let reservation = ledger.book(&client, &room, "01/01/2024".to_string(), "03/01/2024".to_string(), 2, 300.0);

        assert_eq!(ledger.list_reservations().len(), 1);
        assert_eq!(ledger.list_reservations()[0].id, reservation.id);
        assert_eq!(reservation.client.name, "Ana");
        assert_eq!(reservation.room.number, 2);
    }

    #[test]
    fn test_book_does_not_touch_room_availability() {
        let mut ledger = seeded_ledger();
        let client = register(&mut ledger, "Ana");
        let room = ledger.find_room(1).cloned().unwrap();

        ledger.book(&client, &room, "01/01/2024".to_string(), "02/01/2024".to_string(), 1, 100.0);
        ledger.book(&client, &room, "01/01/2024".to_string(), "02/01/2024".to_string(), 1, 100.0);

        assert!(ledger.find_room(1).unwrap().available);
        assert_eq!(ledger.list_reservations().len(), 2);
    }

    #[test]
    fn test_book_stores_values_as_given() {
        let mut ledger = seeded_ledger();
        let client = register(&mut ledger, "Ana");
        let room = ledger.find_room(1).cloned().unwrap();

        let reservation = ledger.book(&client, &room, "x".to_string(), "y".to_string(), 7, 1.5);

        assert_eq!(reservation.days, 7);
        assert_eq!(reservation.total, 1.5);
    }

    #[test]
    fn test_cancel_removes_only_that_identity() {
        let mut ledger = seeded_ledger();
        let client = register(&mut ledger, "Ana");
        let room = ledger.find_room(2).cloned().unwrap();

        let first = ledger.book(&client, &room, "01/01/2024".to_string(), "03/01/2024".to_string(), 2, 300.0);
        let second = ledger.book(&client, &room, "01/01/2024".to_string(), "03/01/2024".to_string(), 2, 300.0);
        let third = ledger.book(&client, &room, "05/01/2024".to_string(), "06/01/2024".to_string(), 1, 150.0);

        let removed = ledger.cancel(second.id);

        assert_eq!(removed.map(|r| r.id), Some(second.id));
        let remaining: Vec<ReservationId> = ledger.list_reservations().iter().map(|r| r.id).collect();
        assert_eq!(remaining, vec![first.id, third.id]);
    }

    #[test]
    fn test_find_reservation_by_id() {
        let mut ledger = seeded_ledger();
        let client = register(&mut ledger, "Ana");
        let room = ledger.find_room(2).cloned().unwrap();
        let first = ledger.book(&client, &room, "01/01/2024".to_string(), "03/01/2024".to_string(), 2, 300.0);
        let second = ledger.book(&client, &room, "01/01/2024".to_string(), "03/01/2024".to_string(), 2, 300.0);

        assert_eq!(ledger.find_reservation(second.id).map(|r| r.id), Some(second.id));
        assert_eq!(ledger.find_reservation(first.id).map(|r| r.id), Some(first.id));

        ledger.cancel(first.id);
        assert!(ledger.find_reservation(first.id).is_none());
        assert!(ledger.find_reservation(second.id).is_some());
    }

    #[test]
    fn test_cancel_unknown_is_noop() {
        let mut ledger = seeded_ledger();
        let client = register(&mut ledger, "Ana");
        let room = ledger.find_room(2).cloned().unwrap();
        let reservation = ledger.book(&client, &room, "01/01/2024".to_string(), "03/01/2024".to_string(), 2, 300.0);

        assert!(ledger.cancel(ReservationId::new()).is_none());
        assert!(ledger.cancel(reservation.id).is_some());
        assert!(ledger.cancel(reservation.id).is_none());
        assert!(ledger.list_reservations().is_empty());
    }

    #[test]
    fn test_delete_client_does_not_cascade() {
        let mut ledger = seeded_ledger();
        let client = register(&mut ledger, "Ana");
        let room = ledger.find_room(3).cloned().unwrap();
        ledger.book(&client, &room, "01/01/2024".to_string(), "04/01/2024".to_string(), 3, 600.0);

        assert!(ledger.delete_client(client.id).is_some());

        assert!(ledger.list_clients().is_empty());
        let kept = &ledger.list_reservations()[0];
        assert_eq!(kept.client.name, "Ana");
        assert_eq!(kept.client.email, "ana@example.com");
        assert_eq!(kept.client.phone, "555-0100");
    }

    #[test]
    fn test_delete_unknown_client_is_noop() {
        let mut ledger = ReservationLedger::new();
        register(&mut ledger, "Ana");

        assert!(ledger.delete_client(ClientId(42)).is_none());
        assert_eq!(ledger.list_clients().len(), 1);
        assert!(ledger.find_client(ClientId(1)).is_some());
    }
}
