//! チャット画面

use super::{render_help, rounded};
use crate::chat::{ChatSession, Role};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Stylize,
    style::Color,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use std::time::Duration;

pub fn render(f: &mut Frame, chat: &ChatSession, input: &str, hint: Option<&str>, elapsed: Duration) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // ヘッダ
            Constraint::Min(6),    // 会話
            Constraint::Length(3), // 入力欄
            Constraint::Length(2), // 操作説明
        ])
        .split(f.area());

    render_header(f, chunks[0], chat, elapsed);
    render_transcript(f, chunks[1], chat);
    render_input(f, chunks[2], input, hint);
    render_help(
        f,
        chunks[3],
        "Enter: enviar | Ctrl+N: nueva conversación | Esc: menú | Ctrl+C: salir | \"juega con aki\": juegos",
    );
}

fn render_header(f: &mut Frame, area: Rect, chat: &ChatSession, elapsed: Duration) {
    let title = chat.title().unwrap_or("Nueva conversación");
    let line = Line::from(vec![
        Span::raw("AKI ").bold().fg(Color::Cyan),
        Span::raw(title.to_string()),
        Span::raw(format!("  ·  {:.1}s", elapsed.as_secs_f32())).fg(Color::DarkGray),
    ]);
    f.render_widget(Paragraph::new(line).block(rounded(" Chat ")), area);
}

fn render_transcript(f: &mut Frame, area: Rect, chat: &ChatSession) {
    let mut lines: Vec<Line> = Vec::new();
    if chat.messages().is_empty() {
        lines.push(Line::from("¡Hola! Soy AKI. Pregúntame algo o escribe \"juega con aki\".").fg(Color::DarkGray));
    }
    for msg in chat.messages() {
        let (label, color) = match msg.role {
            Role::User => ("Tú", Color::Green),
            Role::Assistant => ("AKI", Color::Cyan),
        };
        lines.push(Line::from(format!("{label}:")).bold().fg(color));
        for text in msg.content.lines() {
            lines.push(Line::from(text.to_string()));
        }
        lines.push(Line::from(""));
    }
    if chat.is_pending() {
        lines.push(Line::from("AKI está escribiendo...").italic().fg(Color::Yellow));
    }

    // 末尾が見えるようにスクロール
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let transcript = Paragraph::new(lines)
        .block(rounded(" Conversación "))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(transcript, area);
}

fn render_input(f: &mut Frame, area: Rect, input: &str, hint: Option<&str>) {
    let mut current = input.to_string();
    current.push('_'); // 簡易カーソル表示
    let mut spans = vec![Span::raw(current)];
    if let Some(hint) = hint {
        spans.push(Span::raw(format!("  ({hint})")).fg(Color::Yellow));
    }
    let widget = Paragraph::new(Line::from(spans))
        .block(rounded(" Mensaje "))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
