//! TUI rendering with ratatui

use super::app::{App, InputMode, LISTED_CANDIDATES, MessageStyle, Row};
use crate::core::{Mark, WORD_LEN, Word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE ASSIST - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_suggestions(f, app, chunks[1]);
}

fn tile_style(mark: Mark) -> Style {
    let bg = match mark {
        Mark::Exact => Color::Green,
        Mark::Present => Color::Yellow,
        Mark::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn row_line(row: &Row) -> Line<'static> {
    let mut spans: Vec<Span> = row
        .guess
        .chars()
        .iter()
        .zip(row.marks.iter())
        .map(|(&letter, &mark)| Span::styled(format!(" {} ", letter as char), tile_style(mark)))
        .collect();
    spans.push(Span::styled(
        format!("  {} left", row.remaining),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app.rows.iter().map(row_line).collect();

    if let Some(guess) = app.pending {
        let spans: Vec<Span> = guess
            .chars()
            .iter()
            .map(|&letter| {
                Span::styled(
                    format!(" {} ", letter as char),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                )
            })
            .collect();
        lines.push(Line::from(spans));
    }

    if lines.is_empty() {
        lines.push(Line::from(" ·  ·  ·  ·  · "));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = match &app.suggestion {
        Some(suggestion) => suggestion
            .picks()
            .iter()
            .enumerate()
            .map(|(i, pick)| {
                let style = if i == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>2}. {}", i + 1, pick.word), style),
                    Span::styled(
                        format!(" {:.3}", pick.score),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect(),
        None => vec![ListItem::new("No suggestion available")],
    };

    let title = match &app.suggestion {
        Some(suggestion) if suggestion.is_endgame() => " Suggestions (endgame) ",
        _ => " Suggestions ",
    };

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Pruning gauge
            Constraint::Min(4),    // Candidates
            Constraint::Length(8), // Constraints
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_pruning(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_constraints(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_pruning(f: &mut Frame, app: &App, area: Rect) {
    let ratio = app.pruned_fraction().clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(Block::default().title(" Ruled Out ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!(
            "{:.1}% | {} of {} answers remain",
            ratio * 100.0,
            app.remaining.size(),
            app.solver.answers().size()
        ));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let count = app.remaining.size();

    let content = if count == 0 {
        vec![Line::styled(
            "No candidates fit the board",
            Style::default().fg(Color::Red),
        )]
    } else if count <= LISTED_CANDIDATES {
        let words: Vec<&str> = app.remaining.words().iter().map(Word::text).collect();
        vec![Line::from(words.join("  "))]
    } else {
        vec![Line::from(format!("{count} candidates remaining"))]
    };

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(paragraph, area);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let board = &app.board;

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Pattern:  "),
            Span::styled(
                board.pattern().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Present:  "),
            Span::styled(
                board.confirmed_present().to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw("Excluded: "),
            Span::styled(
                board.excluded().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    for i in 0..WORD_LEN {
        let candidates = board.position_candidates(i);
        let text = if candidates == board.global_alphabet() {
            "any".to_string()
        } else {
            candidates.to_string()
        };
        lines.push(Line::from(format!("  {}: {text}", i + 1)));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Constraints ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Guess => (
            " Word played (Enter alone = suggestion) ",
            Color::Cyan,
        ),
        InputMode::Marks => (
            " Tiles (G=green Y=yellow -=gray, or emojis) | TAB to retype word ",
            Color::Yellow,
        ),
        InputMode::Solved => (" Solved! | Ctrl-N new game ", Color::Green),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let average = if app.stats.games_won > 0 {
        app.stats.total_guesses as f64 / app.stats.games_won as f64
    } else {
        0.0
    };
    let mode = if app.solver.hard_mode() { "hard" } else { "normal" };
    let stats = Paragraph::new(format!(
        "Mode: {mode} | Solved: {} | Avg: {average:.2}",
        app.stats.games_won
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Esc/Ctrl-C: Quit | Ctrl-U: Undo | Ctrl-N: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Marks;
    use crate::solver::{CandidateStore, Solver};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn draws_without_panicking() {
        let words = CandidateStore::from_words(["crane", "crate", "grate", "slate"]);
        let mut app = App::new(Solver::new(&words, &words), 3);
        app.rows.push(Row {
            guess: Word::new("crane").unwrap(),
            marks: Marks::parse("GGG-G").unwrap(),
            remaining: 1,
        });

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Constraints"));
        assert!(text.contains("Ruled Out"));
    }

    #[test]
    fn row_line_has_one_span_per_tile_plus_count() {
        let row = Row {
            guess: Word::new("crane").unwrap(),
            marks: Marks::parse("GY---").unwrap(),
            remaining: 7,
        };
        let line = row_line(&row);

        assert_eq!(line.spans.len(), WORD_LEN + 1);
        assert_eq!(line.spans[0].style.bg, Some(Color::Green));
        assert_eq!(line.spans[1].style.bg, Some(Color::Yellow));
        assert_eq!(line.spans[2].style.bg, Some(Color::DarkGray));
    }
}
