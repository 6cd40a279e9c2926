//! REMEDIA Health Assistant — interactive Ratatui TUI
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  [Tab] Symptom Check  |  Refill Dashboard  |  Pharmacy Prices       │
//!   ├─── main panel ──────────────────────────────────────────────────────┤
//!   │  screen-specific content                                            │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  Alerts (most recent first)                                         │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘
//!
//! The symptom screen reveals its ranked predictions on a timer tick; that
//! animation is the UI's own pacing and nothing in the engines waits for
//! it. The refill dashboard recomputes every projection from the simulated
//! clock on each refresh, so scrubbing the clock forward shows supplies
//! draining in real time.

use std::{
    io,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use chrono::{DateTime, Utc};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};

use remedia_contracts::{
    alert::{AlertSeverity, HealthAlert},
    analysis::{AnalysisResult, RiskLevel},
    error::RemediaResult,
    prescription::SupplyStatus,
};
use remedia_core::{
    traits::{AlertSink, Clock},
    RefillMonitor, SymptomChecker,
};
use remedia_refill::RefillProjector;
use remedia_reference::{sample_feed, StaticCatalog, DEMO_USER};
use remedia_triage::SymptomMatcher;

// ── Shared-handle collaborators ───────────────────────────────────────────────

/// Alert sink that appends into a shared buffer the App also holds.
///
/// Thin newtype in the spirit of keeping an inspectable handle after the
/// orchestrator takes ownership of the Box.
struct SharedAlertSink(Arc<Mutex<Vec<HealthAlert>>>);

impl AlertSink for SharedAlertSink {
    fn notify(&self, alert: &HealthAlert) -> RemediaResult<()> {
        self.0.lock().expect("alert buffer lock poisoned").push(alert.clone());
        Ok(())
    }
}

/// A clock offset by a shared, scrubable day count.
///
/// The dashboard's +/- keys adjust the offset; every refresh reads it
/// fresh, so projections always reflect the simulated "today".
struct OffsetClock(Arc<Mutex<i64>>);

impl Clock for OffsetClock {
    fn now(&self) -> DateTime<Utc> {
        let days = *self.0.lock().expect("clock offset lock poisoned");
        Utc::now() + chrono::Duration::days(days)
    }
}

// ── Domain types ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    SymptomCheck,
    RefillDashboard,
    PharmacyPrices,
}

impl Screen {
    fn name(self) -> &'static str {
        match self {
            Screen::SymptomCheck => "Symptom Check",
            Screen::RefillDashboard => "Refill Dashboard",
            Screen::PharmacyPrices => "Pharmacy Prices",
        }
    }

    fn next(self) -> Self {
        match self {
            Screen::SymptomCheck => Screen::RefillDashboard,
            Screen::RefillDashboard => Screen::PharmacyPrices,
            Screen::PharmacyPrices => Screen::SymptomCheck,
        }
    }
}

/// Outcome of the last symptom analysis run.
enum AnalysisOutcome {
    NoMatch,
    Matched(AnalysisResult),
}

/// Medicines browsable on the pharmacy screen.
const MEDICINES: &[&str] = &[
    "Paracetamol",
    "Ibuprofen",
    "Cetirizine",
    "Metformin",
    "Amoxicillin",
    "Omeprazole",
];

// ── App state ─────────────────────────────────────────────────────────────────

struct App {
    screen: Screen,

    // Symptom check.
    input: String,
    outcome: Option<AnalysisOutcome>,
    checker: SymptomChecker,

    // Animated display: how many prediction rows are currently revealed.
    animation_step: usize,
    last_tick: Instant,
    animating: bool,

    // Refill dashboard.
    monitor: RefillMonitor,
    clock_offset: Arc<Mutex<i64>>,
    statuses: Vec<SupplyStatus>,

    // Pharmacy prices.
    medicine_idx: usize,

    // Alerts delivered by either orchestrator, newest last.
    alerts: Arc<Mutex<Vec<HealthAlert>>>,
    last_error: Option<String>,
}

impl App {
    fn new() -> Self {
        let alerts: Arc<Mutex<Vec<HealthAlert>>> = Arc::new(Mutex::new(Vec::new()));
        let clock_offset: Arc<Mutex<i64>> = Arc::new(Mutex::new(0));

        let checker = SymptomChecker::new(
            Box::new(StaticCatalog::builtin()),
            Box::new(SymptomMatcher::new()),
            Box::new(SharedAlertSink(Arc::clone(&alerts))),
        );

        let monitor = RefillMonitor::new(
            Box::new(sample_feed(Utc::now())),
            Box::new(RefillProjector::new()),
            Box::new(OffsetClock(Arc::clone(&clock_offset))),
            Box::new(SharedAlertSink(Arc::clone(&alerts))),
        );

        Self {
            screen: Screen::SymptomCheck,
            input: "runny nose, sore throat and a cough".to_string(),
            outcome: None,
            checker,
            animation_step: 0,
            last_tick: Instant::now(),
            animating: false,
            monitor,
            clock_offset,
            statuses: Vec::new(),
            medicine_idx: 0,
            alerts,
            last_error: None,
        }
    }

    /// Advance animation by one step (called every ~150 ms when animating).
    fn tick_animation(&mut self) {
        let total = match &self.outcome {
            Some(AnalysisOutcome::Matched(result)) => result.predictions.len(),
            _ => 0,
        };
        if self.animating && self.animation_step < total {
            self.animation_step += 1;
            if self.animation_step >= total {
                self.animating = false;
            }
        } else {
            self.animating = false;
        }
    }

    /// Run the symptom matcher over the current input and start the reveal.
    fn run_analysis(&mut self) {
        self.last_error = None;
        match self.checker.check(&self.input) {
            Ok(Some(result)) => {
                self.outcome = Some(AnalysisOutcome::Matched(result));
                self.animation_step = 0;
                self.last_tick = Instant::now();
                self.animating = true;
            }
            Ok(None) => {
                self.outcome = Some(AnalysisOutcome::NoMatch);
                self.animating = false;
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                self.animating = false;
            }
        }
    }

    /// Recompute every refill projection against the simulated clock.
    fn refresh_refill(&mut self) {
        self.last_error = None;
        match self.monitor.refresh(DEMO_USER) {
            Ok(statuses) => self.statuses = statuses,
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    fn shift_clock(&mut self, days: i64) {
        {
            let mut offset = self.clock_offset.lock().expect("clock offset lock poisoned");
            *offset = (*offset + days).max(0);
        }
        self.refresh_refill();
    }

    fn clock_offset_days(&self) -> i64 {
        *self.clock_offset.lock().expect("clock offset lock poisoned")
    }

    fn recent_alerts(&self, count: usize) -> Vec<HealthAlert> {
        let alerts = self.alerts.lock().expect("alert buffer lock poisoned");
        alerts.iter().rev().take(count).cloned().collect()
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn ui(f: &mut Frame, app: &App) {
    let full = f.area();

    // Split into: header, main panel, alerts, footer.
    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(12),   // screen content
            Constraint::Length(6), // alerts
            Constraint::Length(3), // footer
        ])
        .split(full);

    render_header(f, outer_chunks[0], app);

    match app.screen {
        Screen::SymptomCheck => render_symptom_check(f, outer_chunks[1], app),
        Screen::RefillDashboard => render_refill_dashboard(f, outer_chunks[1], app),
        Screen::PharmacyPrices => render_pharmacy_prices(f, outer_chunks[1], app),
    }

    render_alerts(f, outer_chunks[2], app);
    render_footer(f, outer_chunks[3], app);
}

fn render_header(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans: Vec<Span> = vec![Span::styled("REMEDIA Health Assistant    ", title_style)];

    for screen in [
        Screen::SymptomCheck,
        Screen::RefillDashboard,
        Screen::PharmacyPrices,
    ] {
        let style = if app.screen == screen {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", screen.name()), style));
        spans.push(Span::raw("  "));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

fn risk_color(risk: RiskLevel) -> Color {
    match risk {
        RiskLevel::High => Color::Red,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::Low => Color::Green,
    }
}

fn render_symptom_check(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(area);

    // ── Input line ────────────────────────────────────────────────────────────
    let input_line = Line::from(vec![
        Span::raw(app.input.as_str()),
        Span::styled("▏", Style::default().fg(Color::Cyan)),
    ]);
    let input = Paragraph::new(input_line).block(
        Block::default()
            .title(" Describe your symptoms ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(input, chunks[0]);

    // ── Result panel ──────────────────────────────────────────────────────────
    let block = Block::default()
        .title(" Analysis ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines: Vec<Line> = Vec::new();

    match &app.outcome {
        None => {
            lines.push(Line::from(Span::styled(
                "  Press [Enter] to analyze.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        Some(AnalysisOutcome::NoMatch) => {
            lines.push(Line::from(Span::styled(
                "  Nothing in the catalog matched that description.",
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::from(Span::styled(
                "  Please describe your symptoms in a little more detail.",
                Style::default().fg(Color::Gray),
            )));
        }
        Some(AnalysisOutcome::Matched(result)) => {
            let state = if app.animating {
                "analyzing..."
            } else {
                "complete"
            };
            lines.push(Line::from(Span::styled(
                format!("  State: {}", state),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));

            // Reveal prediction rows one tick at a time.
            let visible = app.animation_step.min(result.predictions.len());
            for prediction in result.predictions.iter().take(visible) {
                let bar_len = (prediction.probability_percent as usize) / 5;
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:>3}% ", prediction.probability_percent),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("█".repeat(bar_len), Style::default().fg(Color::Cyan)),
                    Span::raw(format!(" {}", prediction.disease_name)),
                ]));
            }

            if !app.animating {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled("  Risk tier:  ", Style::default().fg(Color::Gray)),
                    Span::styled(
                        result.risk_level.to_string(),
                        Style::default()
                            .fg(risk_color(result.risk_level))
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
                for advice in &result.care_advice {
                    lines.push(Line::from(vec![
                        Span::styled("    - ", Style::default().fg(Color::DarkGray)),
                        Span::raw(advice.as_str()),
                    ]));
                }
                lines.push(Line::from(Span::styled(
                    format!("  {}", result.consultation),
                    Style::default().fg(Color::Gray),
                )));
                if let Some(emergency) = &result.emergency {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        format!("  {}", emergency),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )));
                }
            }
        }
    }

    if let Some(error) = &app.last_error {
        lines.push(Line::from(Span::styled(
            format!("  Error: {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    let panel = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(panel, chunks[1]);
}

fn render_refill_dashboard(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let offset = app.clock_offset_days();
    let title = format!(" Refill Dashboard — today +{} day(s) ", offset);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut items: Vec<ListItem> = Vec::new();

    if app.statuses.is_empty() {
        items.push(ListItem::new(Span::styled(
            "  No projections yet — press [r] to refresh",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        items.push(ListItem::new(Line::from(Span::styled(
            format!(
                "  {:<14} {:>9} {:>8}  {:<22} {}",
                "Medicine", "Left(d)", "Percent", "Supply", "Status"
            ),
            Style::default().fg(Color::DarkGray),
        ))));
        items.push(ListItem::new(""));

        for status in &app.statuses {
            let p = &status.projection;
            let bar_len = (p.percent_remaining / 5.0).round() as usize;
            let bar_color = if p.is_low { Color::Red } else { Color::Green };
            let (status_label, status_color) = if p.is_low {
                ("LOW", Color::Red)
            } else {
                ("ok", Color::Green)
            };

            let line = Line::from(vec![
                Span::raw(format!("  {:<14}", status.prescription.medicine_name)),
                Span::raw(format!(" {:>9}", p.days_remaining)),
                Span::raw(format!(" {:>7.0}%  ", p.percent_remaining)),
                Span::styled(
                    format!("{:<22}", "█".repeat(bar_len.min(20))),
                    Style::default().fg(bar_color),
                ),
                Span::styled(
                    status_label,
                    Style::default().fg(status_color).add_modifier(Modifier::BOLD),
                ),
            ]);
            items.push(ListItem::new(line));
        }

        items.push(ListItem::new(""));
        items.push(ListItem::new(Span::styled(
            "  Projections are recomputed in full on every refresh.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    if let Some(error) = &app.last_error {
        items.push(ListItem::new(Span::styled(
            format!("  Error: {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

fn render_pharmacy_prices(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    // ── Medicine selector ─────────────────────────────────────────────────────
    let mut med_items: Vec<ListItem> = Vec::new();
    for (i, name) in MEDICINES.iter().enumerate() {
        let style = if i == app.medicine_idx {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        med_items.push(ListItem::new(Span::styled(format!("  {}", name), style)));
    }
    let med_list = List::new(med_items).block(
        Block::default()
            .title(" Medicines ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(med_list, chunks[0]);

    // ── Offers ────────────────────────────────────────────────────────────────
    let selected = MEDICINES[app.medicine_idx.min(MEDICINES.len() - 1)];
    let offers = remedia_reference::offers_for(selected);
    let best = remedia_reference::best_offer(&offers).cloned();

    let mut lines: Vec<Line> = Vec::new();
    if offers.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No pharmacy lists this medicine.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for offer in &offers {
            let is_best = best.as_ref() == Some(offer);
            let price = format!("${}.{:02}", offer.price_cents / 100, offer.price_cents % 100);
            let stock_span = if offer.in_stock {
                Span::styled("in stock", Style::default().fg(Color::Green))
            } else {
                Span::styled("OUT OF STOCK", Style::default().fg(Color::Red))
            };
            let mut spans = vec![
                Span::raw(format!("  {:<22} {:>7}  ", offer.pharmacy, price)),
                stock_span,
            ];
            if is_best {
                spans.push(Span::styled(
                    "  ◂ best offer",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    let offers_panel = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Offers — {} ", selected))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(offers_panel, chunks[1]);
}

fn render_alerts(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let recent = app.recent_alerts(4);

    let mut items: Vec<ListItem> = Vec::new();
    if recent.is_empty() {
        items.push(ListItem::new(Span::styled(
            "  No alerts yet",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for alert in &recent {
            let severity_color = match alert.severity {
                AlertSeverity::Urgent => Color::Red,
                AlertSeverity::Warning => Color::Yellow,
                AlertSeverity::Info => Color::Gray,
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!("  [{}] ", alert.severity),
                    Style::default().fg(severity_color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{}: ", alert.title),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    truncate(&alert.body, 90),
                    Style::default().fg(Color::Gray),
                ),
            ])));
        }
    }

    let list = List::new(items).block(
        Block::default()
            .title(" Alerts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(list, area);
}

fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let mut spans: Vec<Span> = vec![
        Span::styled(" [Tab] ", Style::default().fg(Color::Cyan)),
        Span::raw("Next screen  "),
    ];

    match app.screen {
        Screen::SymptomCheck => {
            spans.push(Span::styled("[Enter] ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw("Analyze  "));
            spans.push(Span::raw("type to edit input  "));
        }
        Screen::RefillDashboard => {
            spans.push(Span::styled("[r] ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw("Refresh  "));
            spans.push(Span::styled("[+/-] ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw("Scrub simulated day  "));
            spans.push(Span::styled("[q] ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw("Quit  "));
        }
        Screen::PharmacyPrices => {
            spans.push(Span::styled("[↑/↓] ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw("Select medicine  "));
            spans.push(Span::styled("[q] ", Style::default().fg(Color::Cyan)));
            spans.push(Span::raw("Quit  "));
        }
    }

    spans.push(Span::styled("[Esc] ", Style::default().fg(Color::Cyan)));
    spans.push(Span::raw("Quit"));

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

// ── Utility helpers ───────────────────────────────────────────────────────────

/// Truncate a string to at most `max` chars, appending "…" if truncated.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Best-effort terminal restore on panic.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    // The dashboard starts populated.
    app.refresh_refill();

    // Animation tick interval: 150 ms.
    const TICK_MS: u64 = 150;

    loop {
        terminal.draw(|f| ui(f, &app))?;

        // When animating, poll on short ticks so the reveal feels smooth;
        // when idle, a longer timeout avoids burning CPU.
        let timeout = if app.animating {
            let elapsed = app.last_tick.elapsed();
            Duration::from_millis(TICK_MS).saturating_sub(elapsed)
        } else {
            Duration::from_millis(200)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Ctrl-C and Esc quit from any screen.
                if key.code == KeyCode::Esc
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL))
                {
                    break;
                }

                match (app.screen, key.code) {
                    // Screen cycling works everywhere.
                    (_, KeyCode::Tab) => {
                        app.screen = app.screen.next();
                        app.last_error = None;
                        if app.screen == Screen::RefillDashboard {
                            app.refresh_refill();
                        }
                    }

                    // ── Symptom check: line editing + run ────────────────────
                    (Screen::SymptomCheck, KeyCode::Enter) => app.run_analysis(),
                    (Screen::SymptomCheck, KeyCode::Backspace) => {
                        app.input.pop();
                    }
                    (Screen::SymptomCheck, KeyCode::Char(c)) => {
                        app.input.push(c);
                    }

                    // ── Refill dashboard ─────────────────────────────────────
                    (Screen::RefillDashboard, KeyCode::Char('q')) => break,
                    (Screen::RefillDashboard, KeyCode::Char('r')) => app.refresh_refill(),
                    (Screen::RefillDashboard, KeyCode::Char('+'))
                    | (Screen::RefillDashboard, KeyCode::Char('='))
                    | (Screen::RefillDashboard, KeyCode::Right) => app.shift_clock(1),
                    (Screen::RefillDashboard, KeyCode::Char('-'))
                    | (Screen::RefillDashboard, KeyCode::Left) => app.shift_clock(-1),

                    // ── Pharmacy prices ──────────────────────────────────────
                    (Screen::PharmacyPrices, KeyCode::Char('q')) => break,
                    (Screen::PharmacyPrices, KeyCode::Up) => {
                        app.medicine_idx = app.medicine_idx.saturating_sub(1);
                    }
                    (Screen::PharmacyPrices, KeyCode::Down) => {
                        app.medicine_idx = (app.medicine_idx + 1).min(MEDICINES.len() - 1);
                    }

                    _ => {}
                }
            }
        }

        // Advance animation on each tick.
        if app.animating && app.last_tick.elapsed() >= Duration::from_millis(TICK_MS) {
            app.tick_animation();
            app.last_tick = Instant::now();
        }
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}
