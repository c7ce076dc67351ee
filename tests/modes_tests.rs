// モード遷移とキー入力のテスト: メニュー / チャット / ゲーム
#![allow(dead_code)]

use aki_tui::App;
use aki_tui::chat::Submission;
use aki_tui::games::GameKind;
use aki_tui::modes::{AppMode, ChatMode, GamesMode, MenuMode, Mode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
mod common;

#[ctor::ctor]
fn _init() { common::init(); }

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn app() -> App {
    App::seeded(common::fast_config(), 17)
}

#[test]
fn test_menu_navigation() {
    let mut app = app();
    let mut menu = MenuMode::new();
    assert_eq!(menu.selected_label(), "Chat con AKI");

    menu.handle_key(&mut app, key(KeyCode::Down)).expect("down");
    assert_eq!(menu.selected_label(), "Juegos");
    menu.handle_key(&mut app, key(KeyCode::Up)).expect("up");
    menu.handle_key(&mut app, key(KeyCode::Up)).expect("up wraps");
    assert_eq!(menu.selected_label(), "Salir");

    let result = menu.handle_key(&mut app, key(KeyCode::Esc));
    assert!(matches!(result, Ok(Some(AppMode::Exit))), "Esc should result in Exit mode");
}

#[test]
fn test_menu_opens_games_panel() {
    let mut app = app();
    let mut menu = MenuMode::new();
    menu.handle_key(&mut app, key(KeyCode::Down)).ok();
    let result = menu.handle_key(&mut app, key(KeyCode::Enter));
    assert!(matches!(result, Ok(Some(AppMode::Games(_)))));
    assert!(app.games.is_open());
    assert_eq!(app.games.active(), GameKind::Chess);
}

#[test]
fn test_chat_mode_input() {
    let mut app = app();
    let mut chat = ChatMode::new();
    assert_eq!(chat.input, "");

    chat.handle_key(&mut app, key(KeyCode::Char('a'))).ok();
    chat.handle_key(&mut app, key(KeyCode::Char('b'))).ok();
    assert_eq!(chat.input, "ab");

    chat.handle_key(&mut app, key(KeyCode::Backspace)).ok();
    assert_eq!(chat.input, "a");
}

#[test]
fn test_chat_submit_queues_reply_and_clears_input() {
    let mut app = app();
    let mut chat = ChatMode::new();
    for ch in "hola".chars() {
        chat.handle_key(&mut app, key(KeyCode::Char(ch))).ok();
    }
    let result = chat.handle_key(&mut app, key(KeyCode::Enter)).expect("enter");
    assert!(result.is_none());
    assert_eq!(chat.input, "");
    assert_eq!(chat.last_submission, Some(Submission::Queued));
    assert_eq!(app.chat.messages().len(), 1);
    assert!(app.chat.is_pending());
}

#[test]
fn test_chat_trigger_switches_to_games() {
    let mut app = app();
    let mut chat = ChatMode::new();
    chat.input = "juega con aki".to_string();
    let result = chat.handle_key(&mut app, key(KeyCode::Enter)).expect("enter");
    assert!(matches!(result, Some(AppMode::Games(_))));
    assert!(app.games.is_open());
    assert!(app.chat.messages().is_empty());
}

#[test]
fn test_chat_ctrl_keys() {
    let mut app = app();
    let mut chat = ChatMode::new();
    chat.input = "hola".to_string();
    chat.handle_key(&mut app, key(KeyCode::Enter)).ok();

    chat.handle_key(&mut app, ctrl('n')).ok();
    assert!(app.chat.messages().is_empty());
    assert!(!app.chat.is_pending());

    assert!(matches!(chat.handle_key(&mut app, ctrl('c')), Ok(Some(AppMode::Exit))));
    assert!(matches!(chat.handle_key(&mut app, key(KeyCode::Esc)), Ok(Some(AppMode::Menu(_)))));
}

#[test]
fn test_games_mode_tabs_and_close() {
    let mut app = app();
    app.games.open(GameKind::Chess, std::time::Instant::now());
    let mut games = GamesMode::new();

    games.handle_key(&mut app, key(KeyCode::Tab)).ok();
    assert_eq!(app.games.active(), GameKind::Hangman);

    // ハングマンでは英字は推測になる
    games.handle_key(&mut app, key(KeyCode::Char('w'))).ok();
    assert_eq!(app.games.hangman().wrong().to_vec(), vec!['W']);

    games.handle_key(&mut app, key(KeyCode::Tab)).ok();
    assert_eq!(app.games.active(), GameKind::GridChase);
    assert!(app.games.is_ticking());

    games.handle_key(&mut app, key(KeyCode::Char('1'))).ok();
    assert_eq!(app.games.active(), GameKind::Chess);

    let result = games.handle_key(&mut app, key(KeyCode::Esc));
    assert!(matches!(result, Ok(Some(AppMode::Chat(_)))));
    assert!(!app.games.is_open());
    assert!(app.games.hangman().wrong().is_empty());
}

#[test]
fn test_games_mode_chess_cursor_moves_pawn() {
    let mut app = app();
    app.games.open(GameKind::Chess, std::time::Instant::now());
    let mut games = GamesMode::new();
    assert_eq!(games.cursor, (6, 4));

    games.handle_key(&mut app, key(KeyCode::Enter)).ok();
    assert_eq!(app.games.chess().selected(), Some((6, 4)));

    games.handle_key(&mut app, key(KeyCode::Up)).ok();
    games.handle_key(&mut app, key(KeyCode::Up)).ok();
    games.handle_key(&mut app, key(KeyCode::Char(' '))).ok();
    assert!(app.games.chess().board().get(4, 4).is_some());
    assert!(app.games.chess().board().get(6, 4).is_none());
}

#[test]
fn test_cursor_is_clamped_to_board() {
    let mut app = app();
    app.games.open(GameKind::Chess, std::time::Instant::now());
    let mut games = GamesMode::new();
    for _ in 0..20 {
        games.handle_key(&mut app, key(KeyCode::Right)).ok();
        games.handle_key(&mut app, key(KeyCode::Down)).ok();
    }
    assert_eq!(games.cursor, (7, 7));
}
