// 🛏️ Room Entity - one entry of the room catalog
//
// The availability flag is configuration, not occupancy: booking a room
// never flips it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Room number (expected unique, not enforced)
    pub number: u32,

    /// Free-text category: "Single", "Double", "Suite", ...
    pub room_type: String,

    /// Nightly price
    pub price: f64,

    pub available: bool,
}

impl Room {
    pub fn new(number: u32, room_type: String, price: f64, available: bool) -> Self {
        Room {
            number,
            room_type,
            price,
            available,
        }
    }

    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Unavailable"
        }
    }

    /// Total for a stay of `days` nights
    pub fn price_for(&self, days: i64) -> f64 {
        days as f64 * self.price
    }

    /// One line for the room catalog: `2 - Double - Available - R$150.00`
    ///
    /// The price always gets two decimals (`R$100.00`, not `R$100.0`) so the
    /// catalog matches the totals shown elsewhere.
    pub fn catalog_line(&self, currency_symbol: &str) -> String {
        format!(
            "{} - {} - {} - {}{:.2}",
            self.number,
            self.room_type,
            self.availability_label(),
            currency_symbol,
            self.price
        )
    }
}
