// 🖥️ Terminal UI - person table, detail/appointment panel, command box
//
// ┌ header: counts ──────────────────────────────────────────────┐
// │ persons table              │ details | appointments | help    │
// ├ result box ──────────────────────────────────────────────────┤
// ├ command input ───────────────────────────────────────────────┤
// └ status bar ──────────────────────────────────────────────────┘

use advisor_book::appointment::format_date_time;
use advisor_book::commands::HELP_MESSAGE;
use advisor_book::model::{ModelEvent, PersonComparator, PersonPredicate, SubscriptionId};
use advisor_book::{LogicManager, Person};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::cell::Cell as FlagCell;
use std::io;
use std::rc::Rc;

const PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidePanel {
    Details,
    Appointments,
}

impl SidePanel {
    pub fn toggle(&self) -> Self {
        match self {
            SidePanel::Details => SidePanel::Appointments,
            SidePanel::Appointments => SidePanel::Details,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SidePanel::Details => " Client Details ",
            SidePanel::Appointments => " Upcoming Appointments ",
        }
    }
}

pub struct App {
    pub logic: LogicManager,
    pub state: TableState,
    pub input: String,
    pub feedback: String,
    pub feedback_is_error: bool,
    pub side_panel: SidePanel,
    pub show_help: bool,
    pub should_quit: bool,
    views_changed: Rc<FlagCell<bool>>,
    subscription: SubscriptionId,
}

impl App {
    pub fn new(mut logic: LogicManager) -> Self {
        let views_changed = Rc::new(FlagCell::new(false));
        let flag = Rc::clone(&views_changed);
        let subscription = logic
            .model_mut()
            .subscribe(Box::new(move |_event: &ModelEvent| flag.set(true)));

        let mut state = TableState::default();
        if !logic.filtered_person_list().is_empty() {
            state.select(Some(0));
        }

        Self {
            logic,
            state,
            input: String::new(),
            feedback: "Welcome! Type 'help' to see every command.".to_string(),
            feedback_is_error: false,
            side_panel: SidePanel::Details,
            show_help: false,
            should_quit: false,
            views_changed,
            subscription,
        }
    }

    pub fn persons(&self) -> &[Person] {
        self.logic.filtered_person_list()
    }

    pub fn selected_person(&self) -> Option<&Person> {
        self.state.selected().and_then(|i| self.persons().get(i))
    }

    /// Run whatever is in the command box
    pub fn submit(&mut self) {
        let text = std::mem::take(&mut self.input);
        if text.trim().is_empty() {
            return;
        }

        match self.logic.execute(&text) {
            Ok(result) => {
                self.feedback = result.feedback_to_user;
                self.feedback_is_error = false;
                self.show_help = result.show_help;
                self.should_quit = result.exit;
            }
            Err(err) => {
                // keep the text so the user can fix it
                self.input = text;
                self.feedback = err.to_string();
                self.feedback_is_error = true;
            }
        }

        if self.views_changed.replace(false) {
            self.clamp_selection();
        }
    }

    /// Keep the selection inside the (possibly shrunk) filtered list
    pub fn clamp_selection(&mut self) {
        let len = self.persons().len();
        let selected = match self.state.selected() {
            _ if len == 0 => None,
            Some(i) if i >= len => Some(len - 1),
            Some(i) => Some(i),
            None => Some(0),
        };
        self.state.select(selected);
    }

    pub fn toggle_side_panel(&mut self) {
        self.show_help = false;
        self.side_panel = self.side_panel.toggle();
    }

    pub fn next(&mut self) {
        let len = self.persons().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.persons().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn page_down(&mut self) {
        let len = self.persons().len();
        if len == 0 {
            return;
        }
        let i = self
            .state
            .selected()
            .map(|i| (i + PAGE_SIZE).min(len - 1))
            .unwrap_or(0);
        self.state.select(Some(i));
    }

    pub fn page_up(&mut self) {
        let i = self
            .state
            .selected()
            .map(|i| i.saturating_sub(PAGE_SIZE))
            .unwrap_or(0);
        self.state.select(Some(i));
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.logic.model_mut().unsubscribe(self.subscription);
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

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Enter => app.submit(),
                KeyCode::Tab => app.toggle_side_panel(),
                KeyCode::Down => app.next(),
                KeyCode::Up => app.previous(),
                KeyCode::PageDown => app.page_down(),
                KeyCode::PageUp => app.page_up(),
                KeyCode::Backspace => {
                    app.input.pop();
                }
                KeyCode::Char(c) => app.input.push(c),
                _ => {}
            }
        }
    }
    Ok(())
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Persons + side panel
            Constraint::Length(5), // Result box
            Constraint::Length(3), // Command input
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_table(f, content_chunks[0], app);
    if app.show_help {
        render_help(f, content_chunks[1]);
    } else {
        match app.side_panel {
            SidePanel::Details => render_detail_panel(f, content_chunks[1], app),
            SidePanel::Appointments => render_appointments(f, content_chunks[1], app),
        }
    }

    render_result_box(f, chunks[2], app);
    render_input(f, chunks[3], app);
    render_status_bar(f, chunks[4], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let model = app.logic.model();
    let filter = match model.predicate() {
        PersonPredicate::ShowAll => "all".to_string(),
        PersonPredicate::NameContainsKeywords(keywords) => keywords.join(" "),
    };

    let spans = vec![
        Span::styled(
            "Advisor Book",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Clients: {}", model.address_book().len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Shown: {} ({})", app.persons().len(), filter),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Appointments: {}", app.logic.appointment_list().len()),
            Style::default().fg(Color::Magenta),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Sorted by {}", model.comparator()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let header = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["#", "Name", "Phone", "Email", "Plans", "Tags", "Appointment"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows: Vec<Row> = app
        .persons()
        .iter()
        .enumerate()
        .map(|(i, person)| {
            let plans = join_labels(person.financial_plans().iter().map(|p| p.as_str()));
            let tags = join_labels(person.tags().iter().map(|t| t.as_str()));
            let appointment = person
                .appointment()
                .appointment()
                .map(|a| format_date_time(&a.date_time()))
                .unwrap_or_default();

            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(truncate(person.name().as_str(), 24)),
                Cell::from(person.phone().as_str().to_string()),
                Cell::from(truncate(person.email().as_str(), 26)),
                Cell::from(truncate(&plans, 20)).style(Style::default().fg(Color::Green)),
                Cell::from(truncate(&tags, 16)).style(Style::default().fg(Color::Cyan)),
                Cell::from(appointment).style(Style::default().fg(Color::Magenta)),
            ])
            .height(1)
        })
        .collect();

    let title = match app.logic.model().comparator() {
        PersonComparator::Insertion => " Clients ".to_string(),
        comparator => format!(" Clients (by {}) ", comparator),
    };

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(25),
            Constraint::Length(12),
            Constraint::Length(27),
            Constraint::Length(21),
            Constraint::Length(17),
            Constraint::Length(17),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title),
    )
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn label(text: &str) -> Span<'_> {
    Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(app.side_panel.title());

    let person = match app.selected_person() {
        Some(p) => p,
        None => {
            f.render_widget(Paragraph::new("No client selected").block(block), area);
            return;
        }
    };

    let next_of_kin = match (person.next_of_kin_name(), person.next_of_kin_phone()) {
        (Some(name), Some(phone)) => format!("{} ({})", name, phone),
        (Some(name), None) => name.to_string(),
        (None, Some(phone)) => phone.to_string(),
        (None, None) => "-".to_string(),
    };

    let content = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                person.name().as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
        ]),
        Line::from(""),
        Line::from(vec![label("  Phone: "), Span::raw(person.phone().as_str())]),
        Line::from(vec![label("  Email: "), Span::raw(person.email().as_str())]),
        Line::from(vec![label("  Address: "), Span::raw(person.address().as_str())]),
        Line::from(vec![label("  Next-of-kin: "), Span::raw(next_of_kin)]),
        Line::from(""),
        Line::from(vec![
            label("  Financial plans: "),
            Span::styled(
                join_labels(person.financial_plans().iter().map(|p| p.as_str())),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            label("  Tags: "),
            Span::styled(
                join_labels(person.tags().iter().map(|t| t.as_str())),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            label("  Appointment: "),
            Span::styled(
                person.appointment().to_string(),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(""),
        Line::from("  ─────────────────────────────────────"),
        Line::from(vec![label("  Remark: ")]),
        Line::from(vec![Span::styled(
            format!("  {}", person.remark().map(|r| r.as_str()).unwrap_or("-")),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]),
    ];

    let panel = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}

fn render_appointments(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = if app.logic.appointment_list().is_empty() {
        vec![Line::from(""), Line::from("  No appointments scheduled")]
    } else {
        app.logic
            .appointment_list()
            .iter()
            .map(|scheduled| {
                Line::from(vec![
                    Span::styled(
                        format!("  {}  ", format_date_time(&scheduled.appointment.date_time())),
                        Style::default().fg(Color::Magenta),
                    ),
                    Span::styled(
                        scheduled.appointment.name().as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" · "),
                    Span::styled(
                        scheduled.person.name().as_str(),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            })
            .collect()
    };

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(app.side_panel.title()),
    );
    f.render_widget(panel, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(HELP_MESSAGE)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(help, area);
}

fn render_result_box(f: &mut Frame, area: Rect, app: &App) {
    let color = if app.feedback_is_error {
        Color::Red
    } else {
        Color::White
    };

    let result = Paragraph::new(app.feedback.as_str())
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL).title(" Result "))
        .wrap(Wrap { trim: false });
    f.render_widget(result, area);
}

fn render_input(f: &mut Frame, area: Rect, app: &App) {
    let border = if app.feedback_is_error {
        Color::Red
    } else {
        Color::Yellow
    };

    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Yellow)),
        Span::raw(app.input.as_str()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Command "),
    );
    f.render_widget(input, area);

    // cursor after the prompt and text
    let cursor_x = area.x + 3 + app.input.chars().count() as u16;
    f.set_cursor(cursor_x.min(area.right().saturating_sub(2)), area.y + 1);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.state.selected().map(|i| i + 1).unwrap_or(0);
    let total = app.persons().len();

    let status_spans = vec![
        Span::styled(
            format!(" Row: {}/{} ", selected, total),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" | "),
        Span::styled(
            app.logic.address_book_file_path().display().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(" | "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Run | "),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Details/Appointments | "),
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(" Nav | "),
        Span::styled("PgUp/PgDn", Style::default().fg(Color::Yellow)),
        Span::raw(" Fast | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ];

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn join_labels<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels.collect::<Vec<_>>().join(", ")
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
    use advisor_book::model::UserPrefs;
    use advisor_book::sample::sample_address_book;
    use advisor_book::{AddressBook, AddressBookStorage, ModelManager};
    use std::path::Path;

    struct NullStorage;

    impl AddressBookStorage for NullStorage {
        fn file_path(&self) -> &Path {
            Path::new("test.json")
        }

        fn read(&self) -> Result<Option<AddressBook>> {
            Ok(None)
        }

        fn save(&self, _book: &AddressBook) -> Result<()> {
            Ok(())
        }
    }

    fn sample_app() -> App {
        let model = ModelManager::new(sample_address_book().unwrap(), UserPrefs::default());
        App::new(LogicManager::new(model, Box::new(NullStorage)))
    }

    #[test]
    fn test_selection_clamped_after_filter() {
        let mut app = sample_app();
        app.state.select(Some(5));

        app.input = "find Yeoh".to_string();
        app.submit();

        assert_eq!(app.persons().len(), 1);
        assert_eq!(app.state.selected(), Some(0));
        assert!(!app.feedback_is_error);
    }

    #[test]
    fn test_failed_command_keeps_input() {
        let mut app = sample_app();
        app.input = "delete 99".to_string();
        app.submit();

        assert!(app.feedback_is_error);
        assert_eq!(app.input, "delete 99");
    }

    #[test]
    fn test_exit_and_help() {
        let mut app = sample_app();
        app.input = "help".to_string();
        app.submit();
        assert!(app.show_help);

        app.input = "exit".to_string();
        app.submit();
        assert!(app.should_quit);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = sample_app();
        app.previous();
        assert_eq!(app.state.selected(), Some(5));
        app.next();
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer name", 10), "a much ...");
    }
}
