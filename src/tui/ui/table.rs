use crate::cards::Card;
use crate::table::{Phase, Seat};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Min(8),    // seats
            Constraint::Length(5), // status bar
        ])
        .split(size);

    draw_header(f, chunks[0], app);
    draw_seats(f, chunks[1], app);
    draw_status(f, chunks[2], app);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Waiting => "Waiting",
        Phase::Drawing => "Drawing",
        Phase::Showdown => "Showdown",
        Phase::GameOver => "Game over",
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let table = &app.table;
    let winning = table
        .outcome()
        .and_then(|o| o.winning)
        .map(|c| c.name().to_string())
        .unwrap_or_else(|| "--".to_string());
    let lines = vec![
        Line::from(format!(
            "Round {}   Phase: {}   Deck: {} cards",
            table.round(),
            phase_label(table.phase()),
            table.cards_remaining()
        )),
        Line::from(format!(
            "Replacements per round: {}   Winning hand: {}",
            table.config().max_replacements,
            winning
        )),
    ];
    let header =
        Paragraph::new(lines).block(Block::default().title("draw-poker").borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_seats(f: &mut Frame, area: Rect, app: &AppState) {
    let total = app.table.num_players();
    let top = total.div_ceil(2);
    let bottom = total - top;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(area);

    for (idx, rect) in columns(rows[0], top).into_iter().enumerate() {
        render_seat(f, rect, app, idx);
    }
    if bottom > 0 {
        for (c, rect) in columns(rows[1], bottom).into_iter().enumerate() {
            render_seat(f, rect, app, top + c);
        }
    }
}

fn render_seat(f: &mut Frame, area: Rect, app: &AppState, idx: usize) {
    let table = &app.table;
    let Some(seat) = table.seats().get(idx) else {
        return;
    };
    let drawing = matches!(table.phase(), Phase::Drawing);
    let resolved = matches!(table.phase(), Phase::Showdown | Phase::GameOver);
    let is_winner = resolved && table.outcome().is_some_and(|o| o.is_winner(idx));
    let is_out = table.eliminated().contains(&idx);

    let mut title = seat.name().to_string();
    if drawing && idx == table.current() {
        title.push_str(" [Act]");
    }
    if is_winner {
        title.push_str(" [WIN]");
    }
    if is_out {
        title.push_str(" [OUT]");
    }
    let border = if is_out {
        Style::default().fg(Color::LightRed)
    } else if is_winner {
        Style::default().fg(Color::Green)
    } else if drawing && idx == table.current() {
        Style::default().fg(Color::Yellow)
    } else if drawing && seat.stood() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let block = Block::default().title(title).borders(Borders::ALL).border_style(border);
    f.render_widget(block, area);

    let dim = Style::default().add_modifier(Modifier::DIM);
    let value_or_dash = |label: &str, value: Option<String>| -> Line {
        match value {
            Some(v) => Line::from(format!("{label}{v}")),
            None => Line::from(vec![Span::raw(label.to_string()), Span::styled("--", dim)]),
        }
    };
    let chips = table.chips(idx);
    let chips_style = if chips <= 0 { Style::default().fg(Color::Red) } else { Style::default() };
    let category =
        if resolved { table.showdown_category(idx).map(|c| c.name().to_string()) } else { None };
    let lines = vec![
        Line::from(vec![Span::raw("Chips: "), Span::styled(chips.to_string(), chips_style)]),
        Line::from(format!("Swaps left: {}", table.replacements_left(idx))),
        value_or_dash("Last: ", seat.last_action().map(str::to_string)),
        value_or_dash("Hand: ", category),
    ];

    let seat_inner = inner(area);
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(seat_inner);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), split[0]);
    render_hand(f, split[1], app, idx, seat);
}

fn render_hand(f: &mut Frame, area: Rect, app: &AppState, idx: usize, seat: &Seat) {
    let Some(hand) = seat.hand() else {
        return;
    };
    let revealed = app.reveals(idx);
    let acting = matches!(app.table.phase(), Phase::Drawing) && idx == app.table.current();
    for (position, rect) in columns(area, hand.len()).into_iter().enumerate() {
        let card = if revealed { hand.get(position) } else { None };
        let label = if acting { Some(position + 1) } else { None };
        render_card_widget(f, rect, card, label);
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, label: Option<usize>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(n) = label {
        block = block.title(n.to_string()).border_style(Style::default().fg(Color::Cyan));
    }
    let content = match card {
        Some(c) => {
            let color = if c.suit().is_red() { Color::Red } else { Color::White };
            Line::from(Span::styled(c.to_string(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled("??", Style::default().add_modifier(Modifier::DIM))),
    };
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner(area));
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner(area));

    let table = &app.table;
    let mut left = match table.phase() {
        Phase::Waiting => vec![Line::from("No round dealt yet. Press Space to deal.")],
        Phase::Drawing => {
            let current = table.current();
            vec![
                Line::from(format!(
                    "P{} to act: {} swap(s) left",
                    current + 1,
                    table.replacements_left(current)
                )),
                Line::from("1-5 replace a card • S/Enter stand"),
            ]
        }
        Phase::Showdown => {
            let winners = table
                .outcome()
                .map(|o| o.winners.iter().map(|w| format!("P{}", w + 1)).collect::<Vec<_>>())
                .unwrap_or_default();
            vec![
                Line::from(format!("Round won by {}", winners.join(", "))),
                Line::from("Press Space for the next round."),
            ]
        }
        Phase::GameOver => {
            let out = table.eliminated().iter().map(|s| format!("P{}", s + 1)).collect::<Vec<_>>();
            vec![
                Line::from(Span::styled(
                    format!("Game over: {} out of chips", out.join(", ")),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from("Press M to start a new session."),
            ]
        }
    };
    if let Some(err) = app.action_error() {
        left.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let right = vec![Line::from(""), Line::from("? help • H history • M menu • Q quit")];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries =
        app.table.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries {
            let detail = entry.detail.map(|d| format!(" {d}")).unwrap_or_default();
            lines.push(Line::from(format!(
                "#{} P{} {}{}",
                entry.round,
                entry.seat + 1,
                entry.verb.label(),
                detail
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space: deal the next round"),
        Line::from("- 1-5: replace that card of the acting hand"),
        Line::from("- S / Enter: stand and pass the turn"),
        Line::from("- H: history"),
        Line::from(""),
        Line::from(Span::styled("Scoring:", bold)),
        Line::from("- Best hand category wins, equal categories share the win"),
        Line::from("- Winners gain chips, everyone else pays"),
        Line::from("- The game ends when a player has no chips left"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: start a new session"),
        Line::from("- Esc: back to the table"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}
