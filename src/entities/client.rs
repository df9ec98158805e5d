// 👤 Client Entity - a guest as typed into the booking form
//
// Every accepted booking registers a brand-new client, even for a repeat
// name/email. Nothing here is validated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential client number, starting at 1 and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClientId(pub u32);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Client {
    pub fn new(id: ClientId, name: String, email: String, phone: String) -> Self {
        Client {
            id,
            name,
            email,
            phone,
        }
    }

    /// One line for the client list: `Client 1: Ana - ana@mail.com - 555-0101`
    pub fn display_line(&self) -> String {
        format!(
            "Client {}: {} - {} - {}",
            self.id, self.name, self.email, self.phone
        )
    }
}
