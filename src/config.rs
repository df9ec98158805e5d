// ⚙️ Configuration - room catalog seed, currency symbol, log filter
//
// Built in code; there is no config file. The serde derives keep the
// shape loadable if a front end ever wants to supply one.

use serde::{Deserialize, Serialize};

use crate::entities::Room;

/// One room to seed the ledger with at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSeed {
    pub number: u32,
    pub room_type: String,
    pub price: f64,
    #[serde(default = "default_true")]
    pub available: bool,
}

impl RoomSeed {
    pub fn new(number: u32, room_type: &str, price: f64) -> Self {
        RoomSeed {
            number,
            room_type: room_type.to_string(),
            price,
            available: true,
        }
    }

    pub fn to_room(&self) -> Room {
        Room::new(self.number, self.room_type.clone(), self.price, self.available)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelConfig {
    /// Printed verbatim in front of every amount
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Room catalog registered when the ledger is created
    #[serde(default = "default_rooms")]
    pub rooms: Vec<RoomSeed>,

    /// `tracing_subscriber::EnvFilter` directive, e.g. "info" or "hotel_reservations=debug"
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

const fn default_true() -> bool {
    true
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

fn default_rooms() -> Vec<RoomSeed> {
    vec![
        RoomSeed::new(1, "Single", 100.0),
        RoomSeed::new(2, "Double", 150.0),
        RoomSeed::new(3, "Suite", 200.0),
    ]
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            rooms: default_rooms(),
            log_filter: default_log_filter(),
        }
    }
}
