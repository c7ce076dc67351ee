//! UI描画モジュール
//!
//! 描画はスナップショット/参照を読むだけで、状態は変更しない。

pub mod chat_view;
pub mod games_view;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// 角丸の枠付きブロック
pub(crate) fn rounded(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// 画面下部の操作説明を描画
pub(crate) fn render_help(f: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(text.to_string()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}
