use std::io::{self, stdout};

use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
    widgets::*,
};
use uttt::{describe_status, to_global, Engine, Player, Position, GRID_SIZE};

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let mut app = App::new();

    let mut should_quit = false;
    while !should_quit {
        terminal.draw(|frame| app.ui(frame))?;
        should_quit = handle_events(&mut app)?;
    }

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn handle_events(app: &mut App) -> io::Result<bool> {
    if event::poll(std::time::Duration::from_millis(16))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == event::KeyEventKind::Press {
                return Ok(app.handle_key(key.code));
            }
        }
    }
    Ok(false)
}

struct App {
    engine: Engine,
    /// Sub-board number (1-9) typed as the first half of a move.
    pending: Option<usize>,
    message: Option<String>,
}

impl App {
    fn new() -> Self {
        Self {
            engine: Engine::new(),
            pending: None,
            message: None,
        }
    }

    /// Returns whether the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('u') => {
                self.pending = None;
                self.message = Some(match self.engine.undo() {
                    Some(record) => format!("Undid move by player {}", record.player),
                    None => String::from("No moves to undo"),
                });
            }
            KeyCode::Backspace => {
                self.pending = None;
                self.message = None;
            }
            KeyCode::Char(c) => {
                if let Some(digit @ 1..=9) = c.to_digit(10) {
                    self.enter_number(digit as usize);
                }
            }
            _ => {}
        }
        false
    }

    fn enter_number(&mut self, number: usize) {
        if self.engine.status().is_finished() {
            self.message = Some(String::from("The game is over, press u to undo or q to quit"));
            return;
        }
        let Some(sub_board) = self.pending.take() else {
            self.pending = Some(number);
            self.message = None;
            return;
        };
        let Some(pos) = to_global(sub_board, number) else {
            return;
        };
        self.message = match self.engine.play(pos) {
            Ok(_) => None,
            Err(err) => Some(format!("Invalid move: {}", err)),
        };
    }

    fn ui(&self, frame: &mut Frame) {
        let main_layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(BOARD_WIDGET_HEIGHT),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ],
        )
        .split(frame.size());
        let top_layout = Layout::new(
            Direction::Horizontal,
            [
                Constraint::Length(BOARD_WIDGET_WIDTH),
                Constraint::Length(META_WIDGET_WIDTH),
                Constraint::Min(0),
            ],
        )
        .split(main_layout[0]);

        frame.render_widget(
            BoardWidget {
                engine: &self.engine,
                pending: self.pending,
            },
            top_layout[0],
        );
        frame.render_widget(MetaWidget { engine: &self.engine }, top_layout[1]);

        let status = Paragraph::new(describe_status(&self.engine))
            .block(Block::new().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, main_layout[1]);

        let input_text = match (&self.message, self.pending) {
            (Some(message), _) => Span::styled(message.clone(), Style::new().fg(Color::Yellow)),
            (None, Some(sub_board)) => {
                Span::raw(format!("Sub-board {}, now choose a cell", sub_board))
            }
            (None, None) => Span::raw("Choose a sub-board"),
        };
        let input = Paragraph::new(Line::from(input_text))
            .block(Block::new().borders(Borders::ALL).title("Input"));
        frame.render_widget(input, main_layout[2]);

        let help = Paragraph::new(
            "1-9: sub-board, then cell   u: undo   Backspace: clear   q/Esc: quit",
        )
        .style(Style::new().fg(Color::DarkGray));
        frame.render_widget(help, main_layout[3]);
    }
}

const CELL_WIDTH: u16 = 3;
// Nine cells, two separators and the border
const BOARD_WIDGET_WIDTH: u16 = CELL_WIDTH * 9 + 2 + 2;
const BOARD_WIDGET_HEIGHT: u16 = 9 + 2 + 2;
const META_WIDGET_WIDTH: u16 = CELL_WIDTH * 3 + 2;

fn player_style(player: Player) -> Style {
    match player {
        Player::X => Style::new().fg(Color::Cyan).bold(),
        Player::O => Style::new().fg(Color::Red).bold(),
    }
}

struct BoardWidget<'a> {
    engine: &'a Engine,
    pending: Option<usize>,
}

impl BoardWidget<'_> {
    fn is_playable(&self, sub_index: usize) -> bool {
        if self.engine.status().is_finished() {
            return false;
        }
        match self.engine.forced_board() {
            Some(forced) => forced == sub_index,
            None => !self.engine.sub_boards()[sub_index].is_closed(),
        }
    }

    fn cell_span(&self, pos: Position) -> Span<'static> {
        let sub_index = pos.sub_index();
        let mut style = match self.engine.get(pos) {
            Some(player) => player_style(player),
            None => Style::new().fg(Color::Gray),
        };
        if self.pending == Some(sub_index + 1) {
            style = style.bg(Color::Yellow);
        } else if self.is_playable(sub_index) {
            style = style.bg(Color::DarkGray);
        }
        let text = match self.engine.get(pos) {
            Some(player) => format!(" {} ", player),
            None => format!(" {} ", pos.cell_index() + 1),
        };
        Span::styled(text, style)
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = "─".repeat(CELL_WIDTH as usize * 3);
        let mut lines = Vec::new();
        for row in 0..GRID_SIZE {
            if row == 3 || row == 6 {
                lines.push(Line::from(format!("{0}┼{0}┼{0}", separator)));
            }
            let mut spans = Vec::new();
            for col in 0..GRID_SIZE {
                if col == 3 || col == 6 {
                    spans.push(Span::raw("│"));
                }
                spans.push(self.cell_span(Position::new(row, col)));
            }
            lines.push(Line::from(spans));
        }
        Paragraph::new(lines)
            .block(Block::new().borders(Borders::ALL).title("Board"))
            .render(area, buf);
    }
}

/// Who won which sub-board.
struct MetaWidget<'a> {
    engine: &'a Engine,
}

impl Widget for MetaWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = (0..3)
            .map(|meta_row| {
                let spans: Vec<Span> = (0..3)
                    .map(|meta_col| {
                        let sub_index = meta_row * 3 + meta_col;
                        let sub_board = &self.engine.sub_boards()[sub_index];
                        match sub_board.winner() {
                            Some(player) => Span::styled(format!(" {} ", player), player_style(player)),
                            None if sub_board.is_full() => Span::raw(" # "),
                            None => Span::raw(" · "),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        Paragraph::new(lines)
            .block(Block::new().borders(Borders::ALL).title("Meta"))
            .render(area, buf);
    }
}
