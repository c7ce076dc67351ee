//! メニューモード: 起動時の選択画面

use super::{AppMode, ChatMode, GamesMode, Mode};
use crate::app::App;
use crate::games::GameKind;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use std::fmt;
use std::time::Instant;

/// メニューの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Chat,
    Games,
    Exit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuItem::Chat => write!(f, "Chat con AKI"),
            MenuItem::Games => write!(f, "Juegos"),
            MenuItem::Exit => write!(f, "Salir"),
        }
    }
}

impl MenuItem {
    fn all() -> [MenuItem; 3] {
        [MenuItem::Chat, MenuItem::Games, MenuItem::Exit]
    }

    fn next(self) -> MenuItem {
        match self {
            MenuItem::Chat => MenuItem::Games,
            MenuItem::Games => MenuItem::Exit,
            MenuItem::Exit => MenuItem::Chat,
        }
    }

    fn prev(self) -> MenuItem {
        match self {
            MenuItem::Chat => MenuItem::Exit,
            MenuItem::Games => MenuItem::Chat,
            MenuItem::Exit => MenuItem::Games,
        }
    }
}

/// メニューモード状態
pub struct MenuMode {
    selected: MenuItem,
}

impl MenuMode {
    pub fn new() -> Self {
        Self { selected: MenuItem::Chat }
    }

    /// 現在選択中の項目名
    pub fn selected_label(&self) -> String {
        self.selected.to_string()
    }
}

impl Default for MenuMode {
    fn default() -> Self {
        Self::new()
    }
}

impl Mode for MenuMode {
    fn update(&mut self, app: &mut App, now: Instant) {
        // メニュー表示中も返信の到着だけは進める
        app.update(now);
    }

    fn render(&self, _app: &App, f: &mut Frame) {
        let area = f.area();

        let block = Block::default().title("AKI - Asistente").borders(Borders::ALL);
        f.render_widget(block, area);

        // コンテンツエリア（パディング考慮）
        let content_area = Rect {
            x: area.x + 2,
            y: area.y + 2,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(4),
        };

        let title = Paragraph::new("Selecciona un modo").style(Style::default().fg(Color::Cyan).bold());
        f.render_widget(
            title,
            Rect { x: content_area.x, y: content_area.y, width: content_area.width, height: 2 },
        );

        let menu_start_y = content_area.y + 3;
        for (index, item) in MenuItem::all().iter().enumerate() {
            let is_selected = self.selected == *item;
            let prefix = if is_selected { "▶ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(Color::White).bg(Color::Blue).bold()
            } else {
                Style::default().fg(Color::White)
            };

            let paragraph = Paragraph::new(format!("{prefix}{item}")).style(style);
            let item_area = Rect {
                x: content_area.x,
                y: menu_start_y + index as u16,
                width: content_area.width,
                height: 1,
            };
            f.render_widget(paragraph, item_area);
        }

        let footer_y = area.height.saturating_sub(2);
        let footer = Paragraph::new("↑/↓: Navegar | Enter: Elegir | Esc/q: Salir")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(footer, Rect { x: area.x, y: footer_y, width: area.width, height: 1 });
    }

    fn handle_key(&mut self, app: &mut App, key: KeyEvent) -> Result<Option<AppMode>> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.prev();
                Ok(None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = self.selected.next();
                Ok(None)
            }
            KeyCode::Enter => {
                let next_mode = match self.selected {
                    MenuItem::Chat => AppMode::Chat(ChatMode::new()),
                    MenuItem::Games => {
                        app.games.open(GameKind::Chess, Instant::now());
                        AppMode::Games(GamesMode::new())
                    }
                    MenuItem::Exit => AppMode::Exit,
                };
                Ok(Some(next_mode))
            }
            KeyCode::Esc | KeyCode::Char('q') => Ok(Some(AppMode::Exit)),
            _ => Ok(None),
        }
    }
}
