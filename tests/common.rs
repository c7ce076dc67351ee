#![allow(dead_code)]

use aki_tui::Config;
use once_cell::sync::Lazy;
use std::sync::Once;
use std::time::{Duration, Instant};
use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static START: Once = Once::new();
static _GUARD: Lazy<std::sync::Mutex<Option<tracing_appender::non_blocking::WorkerGuard>>> =
    Lazy::new(|| std::sync::Mutex::new(None));

/// Initialize test environment: dotenv and tracing (stderr + file).
/// Idempotent: safe to call multiple times.
pub fn init() {
    START.call_once(|| {
        let _ = dotenvy::dotenv();
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .expect("env filter");

        // Daily rotating log file separate from app runtime logs
        let file_appender = rolling::daily("logs", "tests.log");
        let (file_nb, guard) = tracing_appender::non_blocking(file_appender);
        *_GUARD.lock().unwrap() = Some(guard); // retain guard for lifetime

        let stderr_layer = fmt::layer()
            .with_target(true)
            .with_thread_names(true)
            .with_test_writer();

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_thread_names(true)
            .with_writer(file_nb);

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .try_init();

        tracing::info!(target: "test_init", "Test tracing initialized (stderr + rotating file)");
    });
}

/// テスト用の短い遅延を持つ設定
pub fn fast_config() -> Config {
    Config {
        tick_interval_ms: 100,
        ai_delay_ms: 300,
        reply_delay_min_ms: 1000,
        reply_delay_max_ms: 2000,
        fallback_delay_ms: 1500,
        ..Config::default()
    }
}

/// `start` から `ms` ミリ秒後
pub fn at(start: Instant, ms: u64) -> Instant {
    start + Duration::from_millis(ms)
}
