//! ゲームパネル画面

use super::{render_help, rounded};
use crate::games::chess::{BOARD_SIZE, ChessSnapshot};
use crate::games::grid_chase::{Cell, GridSnapshot};
use crate::games::hangman::{Hangman, KEYBOARD};
use crate::games::{GameHub, GameKind};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Stylize,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};

pub fn render(f: &mut Frame, hub: &GameHub, cursor: (usize, usize)) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // タブ
            Constraint::Length(3), // ステータス
            Constraint::Min(10),   // ゲーム本体
            Constraint::Length(2), // 操作説明
        ])
        .split(f.area());

    render_tabs(f, chunks[0], hub.active());

    match hub.active() {
        GameKind::Chess => {
            let snap = hub.chess().snapshot();
            render_status(f, chunks[1], &snap.status);
            render_chess(f, chunks[2], &snap, cursor);
            render_help(f, chunks[3], "Flechas: mover | Enter/Espacio: elegir | r: reiniciar | Tab/1-3: juego | Esc: cerrar");
        }
        GameKind::Hangman => {
            let hangman = hub.hangman();
            render_status(f, chunks[1], &hangman.status());
            render_hangman(f, chunks[2], hangman);
            render_help(f, chunks[3], "Letras: adivinar | Enter: nueva palabra al terminar | Tab: juego | Esc: cerrar");
        }
        GameKind::GridChase => {
            let snap = hub.grid().snapshot();
            render_status(f, chunks[1], &snap.status);
            render_grid(f, chunks[2], &snap);
            render_help(f, chunks[3], "Flechas: dirección | r: reiniciar | Tab/1-3: juego | Esc: cerrar");
        }
    }
}

fn render_tabs(f: &mut Frame, area: Rect, active: GameKind) {
    let titles: Vec<String> = GameKind::all().iter().map(|k| k.to_string()).collect();
    let selected = GameKind::all().iter().position(|k| *k == active).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .block(rounded(" Juegos con AKI "))
        .select(selected)
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).bold());
    f.render_widget(tabs, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str) {
    let widget = Paragraph::new(Line::from(status.to_string()).yellow())
        .block(rounded(" Estado "))
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn render_chess(f: &mut Frame, area: Rect, snap: &ChessSnapshot, cursor: (usize, usize)) {
    let mut lines = Vec::with_capacity(BOARD_SIZE + 1);
    for (row, squares) in snap.board.rows().iter().enumerate() {
        let mut spans = vec![Span::raw(format!("{} ", BOARD_SIZE - row)).fg(Color::DarkGray)];
        for (col, square) in squares.iter().enumerate() {
            let light = (row + col) % 2 == 0;
            let mut style = Style::default()
                .fg(Color::Black)
                .bg(if light { Color::Rgb(240, 217, 181) } else { Color::Rgb(181, 136, 99) });
            if snap.targets.contains(&(row, col)) {
                style = style.bg(Color::LightGreen);
            }
            if snap.selected == Some((row, col)) {
                style = style.bg(Color::LightYellow);
            }
            if cursor == (row, col) {
                style = style.bg(Color::LightBlue);
            }
            let glyph = square.map(|p| p.symbol()).unwrap_or(' ');
            spans.push(Span::styled(format!(" {glyph} "), style));
        }
        lines.push(Line::from(spans));
    }
    let files: String = (b'a'..b'a' + BOARD_SIZE as u8).map(|c| format!(" {} ", c as char)).collect();
    lines.push(Line::from(format!("  {files}")).fg(Color::DarkGray));

    let board = Paragraph::new(lines).block(rounded(" Ajedrez ")).alignment(Alignment::Center);
    f.render_widget(board, area);
}

fn render_hangman(f: &mut Frame, area: Rect, hangman: &Hangman) {
    let snap = hangman.snapshot();
    let wrong = if snap.wrong.is_empty() {
        "-".to_string()
    } else {
        snap.wrong.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ")
    };

    let keyboard: Vec<Span> = KEYBOARD
        .chars()
        .map(|c| {
            let span = Span::raw(format!("{c} "));
            if hangman.is_used(c) || hangman.is_over() {
                span.fg(Color::DarkGray)
            } else {
                span.fg(Color::White).bold()
            }
        })
        .collect();

    let lines = vec![
        Line::from(snap.masked).bold().fg(Color::Cyan),
        Line::from(""),
        Line::from(format!("Pista: {}", snap.hint)),
        Line::from(format!("Letras incorrectas: {wrong}")).red(),
        Line::from(format!("Intentos restantes: {}", snap.lives)),
        Line::from(""),
        Line::from(keyboard),
    ];
    let widget = Paragraph::new(lines).block(rounded(" Ahorcado ")).alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn render_grid(f: &mut Frame, area: Rect, snap: &GridSnapshot) {
    let lines: Vec<Line> = snap
        .cells
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    if snap.player.row == row && snap.player.col == col {
                        Span::raw("ᗧ").fg(Color::Yellow).bold()
                    } else if snap.pursuer.row == row && snap.pursuer.col == col {
                        Span::raw("ᗣ").fg(Color::Red).bold()
                    } else {
                        match cell {
                            Cell::Wall => Span::raw("█").fg(Color::Blue),
                            Cell::Pellet => Span::raw("·").fg(Color::White),
                            Cell::Empty => Span::raw(" "),
                        }
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    let widget = Paragraph::new(lines).block(rounded(" Pac-Man ")).alignment(Alignment::Center);
    f.render_widget(widget, area);
}
