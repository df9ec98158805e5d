// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use serde::Serialize;
use std::env;
use tracing_subscriber::EnvFilter;

use hotel_reservations::{BookingRequest, Client, ClientId, HotelConfig, Reservation, Room, Shell};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = HotelConfig::default();

    if args.len() > 1 && args[1] == "demo" {
        // Scripted session, plain stdout
        run_demo(config)?;
    } else {
        // UI mode (default)
        run_ui_mode(config)?;
    }

    Ok(())
}

/// Logs go to stderr. Only installed outside the TUI so nothing is
/// written over the alternate screen.
fn init_logging(filter: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))
}

/// Everything the ledger holds, for the JSON dump at the end of the demo
#[derive(Serialize)]
struct LedgerSnapshot<'a> {
    rooms: &'a [Room],
    clients: &'a [Client],
    reservations: &'a [Reservation],
}

fn demo_request(name: &str, email: &str, room: &str, check_in: &str, check_out: &str) -> BookingRequest {
    BookingRequest {
        name: name.to_string(),
        email: email.to_string(),
        phone: "555-0100".to_string(),
        room_number: room.to_string(),
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
    }
}

fn print_listings(shell: &Shell) {
    println!("\n📋 Reservations:");
    for (_, line) in shell.reservation_rows() {
        println!("   {}", line);
    }
    println!("\n👥 Clients:");
    for (_, line) in shell.client_rows() {
        println!("   {}", line);
    }
}

fn run_demo(config: HotelConfig) -> Result<()> {
    init_logging(&config.log_filter)?;

    println!("🏨 Hotel Reservations v{} - demo session", hotel_reservations::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut shell = Shell::new(config);

    println!("\n🛏️  Room catalog:");
    for line in shell.room_catalog() {
        println!("   {}", line);
    }

    let requests = [
        demo_request("Ana Souza", "ana@example.com", "2", "01012024", "03012024"),
        demo_request("Bruno Lima", "bruno@example.com", "99", "01/01/2024", "03/01/2024"),
        demo_request("Carla Dias", "carla@example.com", "1", "05/01/2024", "02/01/2024"),
        demo_request("Bruno Lima", "bruno@example.com", "3", "10/02/2024", "15/02/2024"),
        demo_request("Ana Souza", "ana@example.com", "1", "20/03/2024", "21/03/2024"),
    ];

    for request in requests {
        shell.form = request;
        let booked = shell.submit_booking();
        let icon = if booked { "✅" } else { "❌" };
        println!("\n{} {}", icon, shell.message());
    }

    print_listings(&shell);

    println!("\n🗑️  Deleting client 1 and cancelling the second reservation...");
    shell.delete_client(ClientId(1));
    if let Some((id, _)) = shell.reservation_rows().get(1).cloned() {
        shell.cancel_reservation(id);
    }

    print_listings(&shell);

    let ledger = shell.ledger();
    let snapshot = LedgerSnapshot {
        rooms: ledger.list_rooms(),
        clients: ledger.list_clients(),
        reservations: ledger.list_reservations(),
    };

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: HotelConfig) -> Result<()> {
    let mut app = ui::App::new(Shell::new(config));
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: HotelConfig) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or run the scripted session: cargo run -- demo");
    std::process::exit(1);
}
