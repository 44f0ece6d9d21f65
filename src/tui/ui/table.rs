use crate::game::{Phase, PlayerStatus, DEAL_CARDS, DRAW_EXTRAS};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_lines_count: u16 = 2;
    // Add borders (2 rows) to get total block height
    let header_height = header_lines_count + 2;
    let status_lines: u16 = 2;
    let status_height: u16 = status_lines + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Length(5),             // focused hand
            Constraint::Min(3),                // seats
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    // Header (multi-line for readability)
    let phase_label = match app.game.phase() {
        Phase::Draw => "Draw",
        Phase::Betting => "Betting",
        Phase::Showdown => "Showdown",
    };
    let mut header_lines: Vec<Line> = Vec::new();
    header_lines.push(Line::from(format!(
        "Pot: ${}  Phase: {}  BTN P{}",
        app.game.pot(),
        phase_label,
        app.game.dealer() + 1,
    )));
    header_lines.push(Line::from(format!(
        "Acting: P{}   Focus: P{}",
        app.game.current() + 1,
        app.focus + 1
    )));
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("draw-poker").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Focused player's hand (5 slots; extras highlighted during the draw)
    let hand_block = Block::default()
        .title(format!("P{} Hand", app.focus + 1))
        .borders(Borders::ALL);
    let hand_area = chunks[1];
    let hand_inner = inner(hand_area);
    let hand_cards =
        app.game.players().get(app.focus).map(|p| p.cards()).unwrap_or(&[]);
    let card_width = hand_inner.width.saturating_sub(2) / 5;
    let hand_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(card_width),
            Constraint::Length(card_width),
            Constraint::Length(card_width),
            Constraint::Length(card_width),
            Constraint::Length(card_width),
        ])
        .split(hand_inner);
    f.render_widget(hand_block, hand_area);
    let extras_live = matches!(app.game.phase(), Phase::Draw) && app.focus == app.game.current();
    for i in 0..DEAL_CARDS + DRAW_EXTRAS {
        let highlight = extras_live && i >= DEAL_CARDS;
        render_card_widget(
            f,
            hand_chunks[i],
            hand_cards.get(i).copied(),
            if highlight { Some(Color::Yellow) } else { None },
        );
    }

    // Seats ring layout approximation (top row and bottom row mimic circle)
    let seats_area = chunks[2];
    let rows = 2u16;
    let total = app.game.players().len();
    let top_cols: u16 = ((total + 1) / 2) as u16; // ceil
    let bottom_cols: u16 = (total as u16).saturating_sub(top_cols); // floor
    let row_height = seats_area.height.saturating_sub(2) / rows;
    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Length(row_height)).collect::<Vec<_>>())
        .split(inner(seats_area));
    for r in 0..rows as usize {
        let cols_this: u16 = if r == 0 { top_cols } else { bottom_cols };
        if cols_this == 0 {
            continue;
        }
        let col_width = seats_area.width.saturating_sub(2) / cols_this.max(1);
        let col_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..cols_this).map(|_| Constraint::Length(col_width)).collect::<Vec<_>>())
            .split(row_chunks[r]);
        for c in 0..cols_this as usize {
            // Map index to approximate ring:
            // Top row left-to-right: players 0..top_cols-1; bottom row right-to-left: remaining
            let idx = if r == 0 { c } else { total.saturating_sub(1) - c };
            if let Some(p) = app.game.players().get(idx) {
                let seat_area = col_chunks[c];
                render_player_card(f, seat_area, app, idx, p);
            }
        }
    }

    // Status bar: split horizontally for info vs keys, render two lines of content
    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(status_inner);

    let mut left_info = if !app.round_started {
        vec![
            Line::from("Round not started. Press Space to deal."),
            Line::from("Actions disabled until deal."),
        ]
    } else {
        match app.game.phase() {
            Phase::Showdown => vec![
                Line::from("Round over. Press Space for a new round."),
                Line::from("Actions disabled at showdown."),
            ],
            Phase::Draw => vec![Line::from(format!(
                "P{} draws: 1-3 swap one extra, K keep all",
                app.game.current() + 1
            ))],
            Phase::Betting => {
                let stack = app
                    .game
                    .players()
                    .get(app.game.current())
                    .map(|p| p.stack())
                    .unwrap_or(0);
                vec![Line::from(format!(
                    "P{} bets: B to enter an amount (0..={stack})",
                    app.game.current() + 1
                ))]
            }
        }
    };

    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let right_keys = vec![Line::from(""), Line::from("? help • H history • M menu")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if app.amount_entry_active() {
        draw_amount_entry(f, app);
    }
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries {
            let amount = entry.amount.map(|v| format!(" {v}")).unwrap_or_default();
            let line = format!(
                "P{} {}{} [{:?}]",
                entry.seat + 1,
                entry.verb.label(),
                amount,
                entry.phase
            );
            lines.push(Line::from(line));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn render_player_card(
    f: &mut Frame,
    seat_area: Rect,
    app: &AppState,
    idx: usize,
    p: &crate::game::Player,
) {
    let mut title = format!("P{}", idx + 1);
    if idx == app.focus {
        title.push_str(" [Focus]");
    }
    if idx == app.game.dealer() {
        title.push_str(" [BTN]");
    }
    if idx == app.game.current() {
        title.push_str(" [Act]");
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    let status = match p.status() {
        PlayerStatus::Active => "Active",
        PlayerStatus::Busted => "Busted",
    };
    let dim = Style::default().add_modifier(Modifier::DIM);
    let make_line = |label: &str, value: Option<String>| -> Line {
        if let Some(v) = value {
            Line::from(format!("{label}{v}"))
        } else {
            Line::from(vec![Span::raw(label.to_string()), Span::styled("--", dim)])
        }
    };
    let last_value = p.last_action().map(|s| s.to_string());
    let category_value = if matches!(app.game.phase(), Phase::Showdown) {
        app.game.showdown_categories().get(idx).and_then(|c| *c).map(|c| c.label().to_string())
    } else {
        None
    };
    let mut lines: Vec<Line> = Vec::with_capacity(5);
    lines.push(Line::from(format!("Stack: ${}", p.stack())));
    lines.push(Line::from(format!("Bet: {}", p.bet())));
    lines.push(Line::from(format!("Status: {status}")));
    lines.push(make_line("Last: ", last_value));
    lines.push(make_line("Hand: ", category_value));
    if matches!(p.status(), PlayerStatus::Busted) {
        block = block.border_style(Style::default().fg(Color::DarkGray));
    } else if matches!(app.game.phase(), Phase::Showdown) && app.game.winners().contains(&idx) {
        block = block.border_style(Style::default().fg(Color::Green));
    } else if idx == app.game.current() && idx == app.focus {
        block = block.border_style(Style::default().fg(Color::Magenta));
    } else if idx == app.game.current() {
        block = block.border_style(Style::default().fg(Color::Yellow));
    } else if idx == app.focus {
        block = block.border_style(Style::default().fg(Color::Cyan));
    }
    f.render_widget(block, seat_area);
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(para, inner(seat_area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space: deal / new round"),
        Line::from("- 1-3: swap one of the drawn extras"),
        Line::from("- K: keep all three extras"),
        Line::from("- B: bet amount entry"),
        Line::from("- H: history"),
        Line::from(""),
        Line::from(Span::styled("Amount Entry:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- 0-9: edit amount"),
        Line::from("- Backspace: delete digit"),
        Line::from("- + / -: adjust by bet step"),
        Line::from("- Enter: submit"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from("- Q: quit (menu)"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_amount_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 30, f.area());
    let max = app
        .game
        .players()
        .get(app.game.current())
        .map(|p| p.stack())
        .unwrap_or(0);
    let current = app.amount_entry_text().unwrap_or("");
    let lines = vec![
        Line::from(format!("Current: {current}")),
        Line::from(format!("Max: {max} (0 checks)")),
        Line::from("Digits to edit, Backspace to delete"),
        Line::from("+/- in bet steps, Enter submit, Esc cancel"),
    ];
    let block = Block::default().title("Bet Amount").borders(Borders::ALL);
    let inner_area = inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, chunks[0]);
    let error = app.amount_entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    let error_para = Paragraph::new(error_line).alignment(Alignment::Center);
    f.render_widget(error_para, chunks[1]);
}

fn render_card_widget(
    f: &mut Frame,
    area: Rect,
    card: Option<crate::cards::Card>,
    border: Option<Color>,
) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = if let Some(c) = card {
        let style = match c.suit() {
            crate::cards::Suit::Hearts | crate::cards::Suit::Diamonds => {
                Style::default().fg(Color::Red)
            }
            _ => Style::default().fg(Color::White),
        };
        let text = format!("{}{}", c.rank().to_char(), c.suit().glyph());
        Line::from(Span::styled(text, style))
    } else {
        Line::from("[  ]")
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
