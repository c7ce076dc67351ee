// 同階層のファイルをモジュールとしてインポート
pub mod app;
pub mod chat; // 会話セッション（返信の遅延配送・タイトル）
pub mod config;
pub mod games; // チェス / ハングマン / グリッドチェイス
pub mod matcher; // キーワードによる定型応答
pub mod modes; // Mode system for different UI modes
pub mod ui;

pub use app::App;
pub use config::Config;

use color_eyre::Result;
use crossterm::event::{self as crossterm_event, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Instant;

// Ensure .env is loaded for tests before anything else runs in the test process.
#[cfg(test)]
#[ctor::ctor]
fn load_dotenv_for_tests() {
    let _ = dotenvy::dotenv();
}

/// モードでエラーが発生した場合: ログに残し、ゲームパネルを閉じてメニューに戻す
fn recover_from_mode_error(app: &mut App, e: color_eyre::Report) -> modes::AppMode {
    tracing::error!(target: "app", "Error in mode: {:?}", e);
    app.games.close();
    modes::AppMode::Menu(modes::MenuMode::new())
}

/// アプリケーションのメインループを実行
pub fn run(mut terminal: DefaultTerminal, config: Config) -> Result<()> {
    let poll_interval = config.poll_interval();
    let mut app = App::with_config(config);
    let mut current_mode = modes::AppMode::Menu(modes::MenuMode::new());

    loop {
        // 時間経過による状態更新（返信・AIの手・tick）
        current_mode.update(&mut app, Instant::now());

        // 画面を描画
        terminal.draw(|f| current_mode.render(&app, f))?;

        if crossterm_event::poll(poll_interval)? {
            match crossterm_event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match current_mode.handle_key(&mut app, key) {
                        Ok(Some(next_mode)) => {
                            // モード遷移またはExit
                            if matches!(next_mode, modes::AppMode::Exit) {
                                break;
                            }
                            current_mode = next_mode;
                        }
                        Ok(None) => {
                            // 同じモード継続
                        }
                        Err(e) => {
                            current_mode = recover_from_mode_error(&mut app, e);
                        }
                    }
                }
                Event::Resize(_, _) => {
                    // 次ループで再描画されるので特別な処理なし
                }
                _ => {}
            }
        }
    }
    tracing::info!(target: "app", elapsed = ?app.elapsed_time(), "exit");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// 記録されたイベントの (target, level) を集めるレイヤ
    #[derive(Clone, Default)]
    struct TargetRecorder(Arc<Mutex<Vec<(String, tracing::Level)>>>);

    impl<S: tracing::Subscriber> Layer<S> for TargetRecorder {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let meta = event.metadata();
            self.0.lock().unwrap().push((meta.target().to_string(), *meta.level()));
        }
    }

    #[test]
    fn mode_error_is_logged_under_app_target_and_returns_to_menu() {
        let recorder = TargetRecorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());

        let mut app = App::seeded(Config::default(), 1);
        app.games.open(games::GameKind::Hangman, Instant::now());

        let next = tracing::subscriber::with_default(subscriber, || {
            recover_from_mode_error(&mut app, color_eyre::eyre::eyre!("boom"))
        });

        assert!(matches!(next, modes::AppMode::Menu(_)));
        assert!(!app.games.is_open());
        let events = recorder.0.lock().unwrap();
        assert!(events.iter().any(|(t, l)| t == "app" && *l == tracing::Level::ERROR));
    }
}
