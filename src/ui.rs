use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hotel_reservations::{FormField, Shell};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Rooms,
    Booking,
    Reservations,
    Clients,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Rooms => Page::Booking,
            Page::Booking => Page::Reservations,
            Page::Reservations => Page::Clients,
            Page::Clients => Page::Rooms,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Rooms => Page::Clients,
            Page::Booking => Page::Rooms,
            Page::Reservations => Page::Booking,
            Page::Clients => Page::Reservations,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Rooms => "Rooms",
            Page::Booking => "New Booking",
            Page::Reservations => "Reservations",
            Page::Clients => "Clients",
        }
    }
}

pub struct App {
    pub shell: Shell,
    pub current_page: Page,
    pub focused_field: FormField,
    pub reservations_state: TableState,
    pub clients_state: TableState,
}

impl App {
    pub fn new(shell: Shell) -> Self {
        Self {
            shell,
            current_page: Page::Rooms,
            focused_field: FormField::Name,
            reservations_state: TableState::default(),
            clients_state: TableState::default(),
        }
    }

    pub fn next_page(&mut self) {
        self.current_page = self.current_page.next();
        self.clamp_selection();
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.previous();
        self.clamp_selection();
    }

    /// Rows on the current list page (0 for the non-list pages)
    fn row_count(&self) -> usize {
        match self.current_page {
            Page::Reservations => self.shell.ledger().list_reservations().len(),
            Page::Clients => self.shell.ledger().list_clients().len(),
            Page::Rooms | Page::Booking => 0,
        }
    }

    fn list_state(&mut self) -> Option<&mut TableState> {
        match self.current_page {
            Page::Reservations => Some(&mut self.reservations_state),
            Page::Clients => Some(&mut self.clients_state),
            Page::Rooms | Page::Booking => None,
        }
    }

    /// Keep the selection on an existing row after the list changed
    fn clamp_selection(&mut self) {
        let len = self.row_count();
        if let Some(state) = self.list_state() {
            let selected = match (state.selected(), len) {
                (_, 0) => None,
                (Some(i), _) => Some(i.min(len - 1)),
                (None, _) => Some(0),
            };
            state.select(selected);
        }
    }

    pub fn next(&mut self) {
        let len = self.row_count();
        if len == 0 {
            return;
        }
        if let Some(state) = self.list_state() {
            let i = match state.selected() {
                Some(i) if i + 1 < len => i + 1,
                _ => 0,
            };
            state.select(Some(i));
        }
    }

    pub fn previous(&mut self) {
        let len = self.row_count();
        if len == 0 {
            return;
        }
        if let Some(state) = self.list_state() {
            let i = match state.selected() {
                Some(0) | None => len - 1,
                Some(i) => i - 1,
            };
            state.select(Some(i));
        }
    }

    /// Per-row delete: cancels the selected reservation or deletes the
    /// selected client, depending on the page.
    pub fn delete_selected(&mut self) {
        match self.current_page {
            Page::Reservations => {
                let id = self
                    .reservations_state
                    .selected()
                    .and_then(|i| self.shell.ledger().list_reservations().get(i))
                    .map(|r| r.id);
                if let Some(id) = id {
                    self.shell.cancel_reservation(id);
                }
            }
            Page::Clients => {
                let id = self
                    .clients_state
                    .selected()
                    .and_then(|i| self.shell.ledger().list_clients().get(i))
                    .map(|c| c.id);
                if let Some(id) = id {
                    self.shell.delete_client(id);
                }
            }
            Page::Rooms | Page::Booking => {}
        }
        self.clamp_selection();
    }

    pub fn submit_booking(&mut self) {
        self.shell.submit_booking();
    }

    /// Apply one key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.previous_page();
                } else {
                    self.next_page();
                }
                return false;
            }
            KeyCode::BackTab => {
                self.previous_page();
                return false;
            }
            _ => {}
        }

        if self.current_page == Page::Booking {
            // Form editing: every printable key is text
            match key.code {
                KeyCode::Char(c) => self.focused_field.value_mut(&mut self.shell.form).push(c),
                KeyCode::Backspace => {
                    self.focused_field.value_mut(&mut self.shell.form).pop();
                }
                KeyCode::Down => self.focused_field = self.focused_field.next(),
                KeyCode::Up => self.focused_field = self.focused_field.previous(),
                KeyCode::Enter => self.submit_booking(),
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Home => {
                if self.row_count() > 0 {
                    if let Some(state) = self.list_state() {
                        state.select(Some(0));
                    }
                }
            }
            KeyCode::End => {
                let len = self.row_count();
                if len > 0 {
                    if let Some(state) = self.list_state() {
                        state.select(Some(len - 1));
                    }
                }
            }
            _ => {}
        }
        false
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(4), // Message area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Rooms => render_rooms(f, chunks[1], app),
        Page::Booking => render_booking_form(f, chunks[1], app),
        Page::Reservations => render_reservations(f, chunks[1], app),
        Page::Clients => render_clients(f, chunks[1], app),
    }

    render_message(f, chunks[2], app);
    render_status_bar(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = [Page::Rooms, Page::Booking, Page::Reservations, Page::Clients];

    let mut tab_spans = vec![];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(page.title().to_string(), style));
    }

    let ledger = app.shell.ledger();
    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Reservations: {}", ledger.list_reservations().len()),
        Style::default().fg(Color::Green),
    ));
    tab_spans.push(Span::raw("  "));
    tab_spans.push(Span::styled(
        format!("Clients: {}", ledger.list_clients().len()),
        Style::default().fg(Color::White),
    ));

    let header = Paragraph::new(vec![Line::from(tab_spans)])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(header, area);
}

fn header_row(titles: &[&'static str]) -> Row<'static> {
    let cells = titles.iter().map(|h| {
        Cell::from(*h).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    });

    Row::new(cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1)
}

fn render_rooms(f: &mut Frame, area: Rect, app: &App) {
    let symbol = &app.shell.config().currency_symbol;

    let rows = app.shell.ledger().list_rooms().iter().map(|room| {
        let color = if room.available { Color::Green } else { Color::Red };

        Row::new(vec![
            Cell::from(room.number.to_string()),
            Cell::from(truncate(&room.room_type, 20)),
            Cell::from(room.availability_label()).style(Style::default().fg(color)),
            Cell::from(format!("{}{:.2}", symbol, room.price)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(22),
            Constraint::Length(14),
            Constraint::Length(14),
        ],
    )
    .header(header_row(&["Number", "Type", "Availability", "Price"]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Room Catalog "),
    );

    f.render_widget(table, area);
}

fn render_booking_form(f: &mut Frame, area: Rect, app: &App) {
    let mut content = vec![Line::from("")];

    for field in FormField::ALL {
        let focused = field == app.focused_field;
        let marker = if focused {
            Span::styled("→ ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            Span::raw("  ")
        };
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let mut value = field.value(&app.shell.form).to_string();
        if focused {
            value.push('_');
        }

        content.push(Line::from(vec![
            Span::raw("  "),
            marker,
            Span::styled(format!("{:<24}", field.label()), label_style),
            Span::raw(value),
        ]));
        content.push(Line::from(""));
    }

    content.push(Line::from(vec![Span::styled(
        "  ↑/↓ move between fields, Enter books the stay",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )]));

    let form = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" New Booking "),
    );

    f.render_widget(form, area);
}

fn render_reservations(f: &mut Frame, area: Rect, app: &mut App) {
    let symbol = app.shell.config().currency_symbol.clone();

    let rows = app.shell.ledger().list_reservations().iter().map(|r| {
        Row::new(vec![
            Cell::from(truncate(&r.client.name, 24)),
            Cell::from(format!("{} ({})", r.room.number, truncate(&r.room.room_type, 12))),
            Cell::from(r.check_in.clone()),
            Cell::from(r.check_out.clone()),
            Cell::from(r.status.as_str()).style(Style::default().fg(Color::Green)),
            Cell::from(format!("{}{:.2}", symbol, r.total)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(26),
            Constraint::Length(18),
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(14),
        ],
    )
    .header(header_row(&["Client", "Room", "Check-in", "Check-out", "Status", "Total"]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Reservations "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.reservations_state);
}

fn render_clients(f: &mut Frame, area: Rect, app: &mut App) {
    let rows = app.shell.ledger().list_clients().iter().map(|c| {
        Row::new(vec![
            Cell::from(c.id.to_string()),
            Cell::from(truncate(&c.name, 24)),
            Cell::from(truncate(&c.email, 30)),
            Cell::from(truncate(&c.phone, 18)),
        ])
        .height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(26),
            Constraint::Length(32),
            Constraint::Length(20),
        ],
    )
    .header(header_row(&["Id", "Name", "Email", "Phone"]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Clients "),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.clients_state);
}

fn render_message(f: &mut Frame, area: Rect, app: &App) {
    let message = app.shell.message();
    let color = if app.shell.message_is_confirmation() {
        Color::Green
    } else {
        Color::Red
    };

    let lines: Vec<Line> = message
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(color))))
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Result "),
    );

    f.render_widget(paragraph, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Page | "),
    ];

    match app.current_page {
        Page::Booking => {
            status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Field | "));
            status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Book | "));
        }
        Page::Reservations | Page::Clients => {
            status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Nav | "));
            status_spans.push(Span::styled("d", Style::default().fg(Color::Yellow)));
            status_spans.push(Span::raw(" Delete | "));
            status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
            status_spans.push(Span::raw(" Quit | "));
        }
        Page::Rooms => {
            status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
            status_spans.push(Span::raw(" Quit | "));
        }
    }

    status_spans.push(Span::styled("Esc", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_reservations::HotelConfig;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn book_via_form(app: &mut App, name: &str, room: &str, check_in: &str, check_out: &str) {
        app.current_page = Page::Booking;
        app.shell.form = Default::default();
        app.focused_field = FormField::Name;

        type_text(app, name);
        press(app, KeyCode::Down);
        press(app, KeyCode::Down);
        press(app, KeyCode::Down);
        type_text(app, room);
        press(app, KeyCode::Down);
        type_text(app, check_in);
        press(app, KeyCode::Down);
        type_text(app, check_out);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_page_cycle() {
        let mut app = App::new(Shell::new(HotelConfig::default()));

        assert_eq!(app.current_page, Page::Rooms);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_page, Page::Booking);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.current_page, Page::Clients);
    }

    #[test]
    fn test_q_is_text_on_booking_page() {
        let mut app = App::new(Shell::default());
        app.current_page = Page::Booking;

        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.shell.form.name, "q");

        app.current_page = Page::Rooms;
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_form_booking_and_row_delete() {
        let mut app = App::new(Shell::default());

        book_via_form(&mut app, "Ana", "2", "01012024", "03012024");
        book_via_form(&mut app, "Bruno", "1", "01012024", "02012024");

        assert_eq!(app.shell.ledger().list_reservations().len(), 2);
        assert!(app.shell.message().starts_with("Reservation confirmed! Room 1"));
        assert!(app.shell.message_is_confirmation());

        app.current_page = Page::Reservations;
        app.reservations_state.select(None);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));

        let remaining = app.shell.ledger().list_reservations();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].client.name, "Ana");
        assert_eq!(app.reservations_state.selected(), Some(0));
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut app = App::new(Shell::default());
        app.current_page = Page::Booking;
        app.focused_field = FormField::RoomNumber;

        type_text(&mut app, "23");
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.shell.form.room_number, "2");
    }

    #[test]
    fn test_delete_on_empty_list_is_noop() {
        let mut app = App::new(Shell::default());
        app.current_page = Page::Clients;

        press(&mut app, KeyCode::Char('d'));

        assert!(app.shell.ledger().list_clients().is_empty());
        assert_eq!(app.clients_state.selected(), None);
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Suite", 10), "Suite");
        assert_eq!(truncate("Presidencial São Paulo", 10), "Preside...");
    }
}
