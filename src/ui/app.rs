use std::mem;

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Bar, BarChart, BarGroup, Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph,
    Row, Table as GridTable, TableState, Wrap,
};
use ratatui::Frame;
use tracing::{info, warn};

use crate::db::{fetch_table, insert_customer, run_insight, Database, Insight, InsightSeries};
use crate::errors::DbResult;
use crate::models::{Table, TableData};

use super::forms::{CustomerField, CustomerForm};
use super::helpers::{
    bar_width, centered_rect, column_widths, field_cursor, selector_line, surface_error,
};
use super::screens::{AddDataScreen, InsightsScreen, TableView};

const APP_TITLE: &str = "Zomato Data Insights";
/// Height of the title banner.
const TITLE_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Width of the sidebar menu.
const MENU_WIDTH: u16 = 20;
/// Rows skipped by PageUp/PageDown in the data grid.
const PAGE_ROWS: isize = 10;

/// Sidebar entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    ViewData,
    AddData,
    UpdateData,
    DeleteData,
    Insights,
}

impl MenuItem {
    const ALL: [MenuItem; 5] = [
        MenuItem::ViewData,
        MenuItem::AddData,
        MenuItem::UpdateData,
        MenuItem::DeleteData,
        MenuItem::Insights,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuItem::ViewData => "View Data",
            MenuItem::AddData => "Add Data",
            MenuItem::UpdateData => "Update Data",
            MenuItem::DeleteData => "Delete Data",
            MenuItem::Insights => "Insights",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|item| *item == self).unwrap_or(0)
    }
}

/// Content shown to the right of the menu.
enum Screen {
    ViewData(TableView),
    AddData(AddDataScreen),
    /// Menu entries that exist without any behavior behind them.
    Notice(MenuItem),
    Insights(InsightsScreen),
}

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Menu,
    Content,
}

/// Fine-grained modes layered over the current screen.
enum Mode {
    Normal,
    AddingCustomer(CustomerForm),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI. Owns the database
/// handle for the lifetime of the UI; [`App::into_database`] hands it back
/// for closing.
pub struct App {
    db: Database,
    menu: MenuItem,
    focus: Focus,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
    today: NaiveDate,
}

impl App {
    /// Build the UI state and load the first view. `today` seeds the
    /// signup date of the customer form.
    pub fn new(db: Database, today: NaiveDate) -> Self {
        let mut app = Self {
            db,
            menu: MenuItem::ViewData,
            focus: Focus::Menu,
            screen: Screen::Notice(MenuItem::ViewData),
            mode: Mode::Normal,
            status: None,
            today,
        };
        app.open_menu(MenuItem::ViewData);
        if let Some(reason) = app.db.connect_error().map(str::to_string) {
            app.set_status(reason, StatusKind::Error);
        }
        app
    }

    /// Show an informational footer message.
    pub fn report_info(&mut self, text: impl Into<String>) {
        self.set_status(text, StatusKind::Info);
    }

    /// Show an error footer message.
    pub fn report_error(&mut self, text: impl Into<String>) {
        self.set_status(text, StatusKind::Error);
    }

    pub fn is_connected(&self) -> bool {
        self.db.is_connected()
    }

    /// Current footer message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    pub fn into_database(self) -> Database {
        self.db
    }

    /// Process one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::AddingCustomer(form) => self.handle_add_customer(code, form)?,
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        if code == KeyCode::Char('q') {
            *exit = true;
            return Ok(Mode::Normal);
        }

        if !self.db.is_connected() {
            if code == KeyCode::Esc {
                *exit = true;
            }
            return Ok(Mode::Normal);
        }

        match self.focus {
            Focus::Menu => {
                match code {
                    KeyCode::Esc => *exit = true,
                    KeyCode::Up => self.move_menu(-1),
                    KeyCode::Down => self.move_menu(1),
                    KeyCode::Enter | KeyCode::Right | KeyCode::Tab => {
                        self.focus = Focus::Content;
                    }
                    _ => {}
                }
                Ok(Mode::Normal)
            }
            Focus::Content => self.handle_content_key(code),
        }
    }

    fn handle_content_key(&mut self, code: KeyCode) -> Result<Mode> {
        match code {
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
                self.focus = Focus::Menu;
                return Ok(Mode::Normal);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.refresh();
                return Ok(Mode::Normal);
            }
            KeyCode::Left => {
                self.cycle_selector(-1);
                return Ok(Mode::Normal);
            }
            KeyCode::Right => {
                self.cycle_selector(1);
                return Ok(Mode::Normal);
            }
            _ => {}
        }

        if let Screen::AddData(screen) = &self.screen {
            if matches!(code, KeyCode::Enter | KeyCode::Char('+')) {
                let (supports_form, table) = (screen.supports_form(), screen.table);
                if supports_form {
                    self.clear_status();
                    return Ok(Mode::AddingCustomer(CustomerForm::new(self.today)));
                }
                self.set_status(
                    format!("Adding {table} records is not available."),
                    StatusKind::Error,
                );
            }
            return Ok(Mode::Normal);
        }

        if let Screen::ViewData(view) = &mut self.screen {
            match code {
                KeyCode::Up => view.move_selection(-1),
                KeyCode::Down => view.move_selection(1),
                KeyCode::PageUp => view.move_selection(-PAGE_ROWS),
                KeyCode::PageDown => view.move_selection(PAGE_ROWS),
                KeyCode::Home => view.select_first(),
                KeyCode::End => view.select_last(),
                _ => {}
            }
        }

        Ok(Mode::Normal)
    }

    fn handle_add_customer(&mut self, code: KeyCode, mut form: CustomerForm) -> Result<Mode> {
        let mut keep_open = true;
        match code {
            KeyCode::Esc => {
                self.set_status("Add customer cancelled.", StatusKind::Info);
                keep_open = false;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match self.save_new_customer(&form) {
                Ok(_) => keep_open = false,
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }

        if keep_open {
            Ok(Mode::AddingCustomer(form))
        } else {
            Ok(Mode::Normal)
        }
    }

    fn save_new_customer(&mut self, form: &CustomerForm) -> Result<()> {
        let customer = form.parse_inputs()?;
        let id = insert_customer(&self.db, &customer)?;
        info!(customer_id = id, "customer added from form");
        self.set_status("Customer added successfully!", StatusKind::Info);
        Ok(())
    }

    fn move_menu(&mut self, offset: isize) {
        let last = MenuItem::ALL.len() as isize - 1;
        let idx = (self.menu.index() as isize + offset).clamp(0, last) as usize;
        let item = MenuItem::ALL[idx];
        if item != self.menu {
            self.clear_status();
            self.open_menu(item);
        }
    }

    fn open_menu(&mut self, item: MenuItem) {
        self.menu = item;
        match item {
            MenuItem::ViewData => self.open_table(Table::Customers),
            MenuItem::AddData => {
                self.screen = Screen::AddData(AddDataScreen {
                    table: Table::Customers,
                })
            }
            MenuItem::UpdateData | MenuItem::DeleteData => self.screen = Screen::Notice(item),
            MenuItem::Insights => self.open_insight(Insight::PeakOrderingHours),
        }
    }

    fn open_table(&mut self, table: Table) {
        let result = fetch_table(&self.db, table);
        let data = self.load_or_report(result).unwrap_or_default();
        self.screen = Screen::ViewData(TableView::new(table, data));
    }

    fn open_insight(&mut self, insight: Insight) {
        let result = run_insight(&self.db, insight);
        let series = self
            .load_or_report(result)
            .unwrap_or_else(|| InsightSeries::empty(insight));
        self.screen = Screen::Insights(InsightsScreen { series });
    }

    /// Step the table or insight selector of the current screen.
    fn cycle_selector(&mut self, offset: isize) {
        match &self.screen {
            Screen::ViewData(view) => {
                let table = view.table.cycle(offset);
                self.clear_status();
                self.open_table(table);
            }
            Screen::AddData(screen) => {
                let table = screen.table.cycle(offset);
                self.clear_status();
                self.screen = Screen::AddData(AddDataScreen { table });
            }
            Screen::Insights(screen) => {
                let insight = screen.insight().cycle(offset);
                self.clear_status();
                self.open_insight(insight);
            }
            Screen::Notice(_) => {}
        }
    }

    /// Re-run the query behind the current view.
    fn refresh(&mut self) {
        match &self.screen {
            Screen::ViewData(view) => {
                let table = view.table;
                let result = fetch_table(&self.db, table);
                let loaded = self.load_or_report(result);
                let reloaded = loaded.is_some();
                if let Screen::ViewData(view) = &mut self.screen {
                    view.set_data(loaded.unwrap_or_else(TableData::default));
                }
                if reloaded {
                    self.set_status(format!("Reloaded {table}."), StatusKind::Info);
                }
            }
            Screen::Insights(screen) => {
                let insight = screen.insight();
                self.open_insight(insight);
            }
            Screen::AddData(_) | Screen::Notice(_) => {}
        }
    }

    /// Turn a failed query into a footer error. Callers substitute an empty
    /// result so the view still renders.
    fn load_or_report<T>(&mut self, result: DbResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(error = %err, "query failed");
                self.set_status(err.to_string(), StatusKind::Error);
                None
            }
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_title(frame, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(0)])
            .split(chunks[1]);

        self.draw_menu(frame, body[0]);

        if !self.db.is_connected() {
            self.draw_disconnected(frame, body[1]);
        } else {
            match &self.screen {
                Screen::ViewData(view) => self.draw_table_view(frame, body[1], view),
                Screen::AddData(screen) => self.draw_add_data(frame, body[1], screen),
                Screen::Notice(item) => self.draw_notice(frame, body[1], *item),
                Screen::Insights(screen) => self.draw_insights(frame, body[1], screen),
            }
        }

        self.draw_footer(frame, chunks[2]);

        if let Mode::AddingCustomer(form) = &self.mode {
            self.draw_customer_form(frame, area, form);
        }
    }

    fn pane_block(&self, title: String, focused: bool) -> Block<'static> {
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style)
    }

    fn content_focused(&self) -> bool {
        self.focus == Focus::Content && matches!(self.mode, Mode::Normal)
    }

    fn draw_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Span::styled(
            APP_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, area);
    }

    fn draw_menu(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = MenuItem::ALL
            .iter()
            .map(|item| ListItem::new(item.label()))
            .collect();
        let list = List::new(items)
            .block(self.pane_block("Menu".to_string(), self.focus == Focus::Menu))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default();
        state.select(Some(self.menu.index()));
        frame.render_stateful_widget(list, area, &mut state);
    }

    /// Split a content pane into the selector strip and the body below it.
    fn split_selector(&self, area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }

    fn draw_table_view(&self, frame: &mut Frame, area: Rect, view: &TableView) {
        let (selector_area, grid_area) = self.split_selector(area);
        let selector = Paragraph::new(selector_line(
            "Select Table",
            view.table.name(),
            self.content_focused(),
        ))
        .block(self.pane_block("View Data".to_string(), self.content_focused()));
        frame.render_widget(selector, selector_area);

        let title = format!("{} • {} rows", view.table, view.data.len());
        if view.data.columns.is_empty() {
            let message = Paragraph::new("No data to display.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(title));
            frame.render_widget(message, grid_area);
            return;
        }

        let header = Row::new(view.data.columns.iter().map(|c| Cell::from(c.clone()))).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let rows = view
            .data
            .rows
            .iter()
            .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.clone()))));

        let grid = GridTable::new(rows, column_widths(&view.data))
            .header(header)
            .column_spacing(2)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .block(Block::default().borders(Borders::ALL).title(title));

        let mut state = TableState::default().with_selected(Some(view.selected));
        frame.render_stateful_widget(grid, grid_area, &mut state);
    }

    fn draw_add_data(&self, frame: &mut Frame, area: Rect, screen: &AddDataScreen) {
        let (selector_area, body_area) = self.split_selector(area);
        let selector = Paragraph::new(selector_line(
            "Select Table",
            screen.table.name(),
            self.content_focused(),
        ))
        .block(self.pane_block("Add New Records".to_string(), self.content_focused()));
        frame.render_widget(selector, selector_area);

        let text = if screen.supports_form() {
            "Press Enter to open the customer form."
        } else {
            "Adding records to this table is not available."
        };
        let body = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(body, body_area);
    }

    fn draw_notice(&self, frame: &mut Frame, area: Rect, item: MenuItem) {
        let message = Paragraph::new(format!("{} is not available yet.", item.label()))
            .alignment(Alignment::Center)
            .block(self.pane_block(item.label().to_string(), self.content_focused()));
        frame.render_widget(message, area);
    }

    fn draw_insights(&self, frame: &mut Frame, area: Rect, screen: &InsightsScreen) {
        let (selector_area, chart_area) = self.split_selector(area);
        let selector = Paragraph::new(selector_line(
            "Choose Insight",
            screen.insight().title(),
            self.content_focused(),
        ))
        .block(self.pane_block("Data Insights".to_string(), self.content_focused()));
        frame.render_widget(selector, selector_area);

        let series = &screen.series;
        let block = Block::default().borders(Borders::ALL).title(format!(
            "{} by {}",
            series.value_column, series.label_column
        ));

        if series.points.is_empty() {
            let message = Paragraph::new("No data to chart.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, chart_area);
            return;
        }

        let bars: Vec<Bar> = series
            .points
            .iter()
            .map(|point| {
                Bar::default()
                    .value(point.value.max(0.0).round() as u64)
                    .text_value(format_bar_value(point.value))
                    .label(Line::from(point.label.clone()))
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width(chart_area.width.saturating_sub(2), bars.len()))
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
        frame.render_widget(chart, chart_area);
    }

    fn draw_disconnected(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Database connection is not established. Please check your database settings.",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Database: {}", self.db.path().display())),
        ];
        if let Some(reason) = self.db.connect_error() {
            lines.push(Line::from(format!("Reason: {reason}")));
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Connection"));
        frame.render_widget(paragraph, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        if matches!(self.mode, Mode::AddingCustomer(_)) {
            return Line::from(vec![
                Span::styled("[Tab/↑↓]", key_style),
                Span::raw(" Field   "),
                Span::styled("[Space]", key_style),
                Span::raw(" Toggle premium   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Add Customer   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]);
        }

        if !self.db.is_connected() {
            return Line::from(vec![Span::styled("[q]", key_style), Span::raw(" Quit")]);
        }

        match (self.focus, &self.screen) {
            (Focus::Menu, _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Menu   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Open   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Focus::Content, Screen::ViewData(_)) => Line::from(vec![
                Span::styled("[←→]", key_style),
                Span::raw(" Table   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Rows   "),
                Span::styled("[r]", key_style),
                Span::raw(" Reload   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Menu"),
            ]),
            (Focus::Content, Screen::AddData(_)) => Line::from(vec![
                Span::styled("[←→]", key_style),
                Span::raw(" Table   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Open form   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Menu"),
            ]),
            (Focus::Content, Screen::Insights(_)) => Line::from(vec![
                Span::styled("[←→]", key_style),
                Span::raw(" Insight   "),
                Span::styled("[r]", key_style),
                Span::raw(" Reload   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Menu"),
            ]),
            (Focus::Content, Screen::Notice(_)) => {
                Line::from(vec![Span::styled("[Esc]", key_style), Span::raw(" Menu")])
            }
        }
    }

    fn draw_customer_form(&self, frame: &mut Frame, area: Rect, form: &CustomerForm) {
        let popup_area = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Add Customer").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let mut lines: Vec<Line> = CustomerField::ALL
            .iter()
            .map(|field| form.build_line(*field))
            .collect();
        lines.push(Line::from(""));

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to add • Tab to switch fields • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, inner);

        if form.active != CustomerField::IsPremium {
            frame.set_cursor_position(field_cursor(
                inner,
                form.active.label(),
                form.value_len(form.active),
                form.active.row(),
            ));
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Counts print as integers, averages with one decimal.
fn format_bar_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::db::{count_rows, init_schema};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn connected_app() -> App {
        let db = Database::open_in_memory().expect("db");
        init_schema(&db).expect("schema");
        App::new(db, today())
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            app.handle_key(*code).expect("key");
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key(KeyCode::Char(ch)).expect("key");
        }
    }

    fn status_text(app: &App) -> &str {
        app.status().unwrap_or("")
    }

    #[test]
    fn disconnected_database_renders_empty_grid_with_error() {
        let db = Database::disconnected(Path::new("zomato.sqlite"), "connection refused");
        let app = App::new(db, today());

        match &app.screen {
            Screen::ViewData(view) => assert!(view.data.is_empty()),
            _ => panic!("expected the data grid"),
        }
        let status = app.status.as_ref().expect("status");
        assert!(matches!(status.kind, StatusKind::Error));
        assert!(status.text.contains("connection refused"));
    }

    #[test]
    fn disconnected_app_only_quits() {
        let db = Database::disconnected(Path::new("zomato.sqlite"), "down");
        let mut app = App::new(db, today());
        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.menu, MenuItem::ViewData);
        assert_eq!(app.focus, Focus::Menu);
        assert!(app.handle_key(KeyCode::Char('q')).expect("key"));
    }

    #[test]
    fn adding_customer_through_form_inserts_one_row() {
        let mut app = connected_app();
        press(&mut app, &[KeyCode::Down]);
        assert_eq!(app.menu, MenuItem::AddData);

        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert!(matches!(app.mode, Mode::AddingCustomer(_)));

        type_text(&mut app, "Meera Iyer");
        press(&mut app, &[KeyCode::Tab]);
        type_text(&mut app, "meera@example.com");
        press(&mut app, &[KeyCode::Enter]);

        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(status_text(&app), "Customer added successfully!");
        assert_eq!(count_rows(&app.db, Table::Customers).expect("count"), 1);

        let (total_orders, average_rating): (i64, f64) = app
            .db
            .connection()
            .expect("conn")
            .query_row(
                "SELECT total_orders, average_rating FROM Customers",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .expect("row");
        assert_eq!(total_orders, 0);
        assert_eq!(average_rating, 0.0);
    }

    #[test]
    fn invalid_form_stays_open_with_error() {
        let mut app = connected_app();
        press(&mut app, &[KeyCode::Down, KeyCode::Enter, KeyCode::Enter, KeyCode::Enter]);

        match &app.mode {
            Mode::AddingCustomer(form) => {
                assert_eq!(form.error.as_deref(), Some("Customer name is required."))
            }
            Mode::Normal => panic!("form should stay open"),
        }
        assert_eq!(count_rows(&app.db, Table::Customers).expect("count"), 0);

        press(&mut app, &[KeyCode::Esc]);
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(status_text(&app), "Add customer cancelled.");
    }

    #[test]
    fn other_tables_have_no_form() {
        let mut app = connected_app();
        press(&mut app, &[KeyCode::Down, KeyCode::Enter, KeyCode::Right, KeyCode::Enter]);
        assert!(matches!(app.mode, Mode::Normal));
        assert_eq!(status_text(&app), "Adding Restaurants records is not available.");
    }

    #[test]
    fn update_and_delete_are_placeholders() {
        let mut app = connected_app();
        press(&mut app, &[KeyCode::Down, KeyCode::Down]);
        assert!(matches!(app.screen, Screen::Notice(MenuItem::UpdateData)));
        press(&mut app, &[KeyCode::Down]);
        assert!(matches!(app.screen, Screen::Notice(MenuItem::DeleteData)));
    }

    #[test]
    fn arrows_switch_tables_and_insights() {
        let mut app = connected_app();
        press(&mut app, &[KeyCode::Enter, KeyCode::Right]);
        match &app.screen {
            Screen::ViewData(view) => assert_eq!(view.table, Table::Restaurants),
            _ => panic!("expected the data grid"),
        }

        press(&mut app, &[KeyCode::Esc]);
        for _ in 0..4 {
            press(&mut app, &[KeyCode::Down]);
        }
        assert_eq!(app.menu, MenuItem::Insights);
        press(&mut app, &[KeyCode::Enter, KeyCode::Left]);
        match &app.screen {
            Screen::Insights(screen) => assert_eq!(screen.insight(), Insight::DeliveryTimes),
            _ => panic!("expected the insights chart"),
        }
    }

    #[test]
    fn reload_picks_up_new_rows() {
        let mut app = connected_app();
        app.db
            .execute("INSERT INTO Customers (name) VALUES ('Late Arrival')", [])
            .expect("insert");
        press(&mut app, &[KeyCode::Enter, KeyCode::Char('r')]);

        match &app.screen {
            Screen::ViewData(view) => assert_eq!(view.data.len(), 1),
            _ => panic!("expected the data grid"),
        }
        assert_eq!(status_text(&app), "Reloaded Customers.");
    }

    #[test]
    fn every_screen_draws() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).expect("terminal");
        let mut app = connected_app();
        app.db
            .execute(
                "INSERT INTO Restaurants (name, cuisine_type) VALUES ('R', 'Indian')",
                [],
            )
            .expect("restaurant");

        for step in 0..MenuItem::ALL.len() {
            if step > 0 {
                press(&mut app, &[KeyCode::Down]);
            }
            terminal.draw(|frame| app.draw(frame)).expect("draw");
        }

        press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Up, KeyCode::Enter, KeyCode::Enter]);
        assert!(matches!(app.mode, Mode::AddingCustomer(_)));
        terminal.draw(|frame| app.draw(frame)).expect("draw form");

        let offline = App::new(Database::disconnected(Path::new("x.sqlite"), "down"), today());
        terminal.draw(|frame| offline.draw(frame)).expect("draw offline");
    }
}
