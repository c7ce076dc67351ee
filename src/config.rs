//! アプリケーション設定と定数

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use std::time::Duration;

/// 会話タイトルの最大文字数
pub const TITLE_MAX_CHARS: usize = 40;

/// ペレット1個あたりのスコア
pub const PELLET_SCORE: u32 = 10;

/// ハングマンの初期ライフ
pub const HANGMAN_LIVES: u32 = 6;

/// 追跡者がプレイヤーに近づく方向を選ぶ既定の確率
pub const DEFAULT_CHASE_PROBABILITY: f64 = 0.75;

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// イベントポーリング間隔（ミリ秒）
    pub poll_interval_ms: u64,
    /// グリッドチェイスの tick 間隔（ミリ秒）
    pub tick_interval_ms: u64,
    /// チェスAIが指すまでの遅延（ミリ秒）
    pub ai_delay_ms: u64,
    /// 追跡者がプレイヤーに近づく方向を選ぶ確率
    pub chase_probability: f64,
    /// 定型応答の「入力中」遅延の下限（ミリ秒）
    pub reply_delay_min_ms: u64,
    /// 定型応答の「入力中」遅延の上限（ミリ秒）
    pub reply_delay_max_ms: u64,
    /// 定型応答が無い場合の遅延（ミリ秒）
    pub fallback_delay_ms: u64,
    /// ログ出力先ディレクトリ
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // NOTE: Keep in sync with tests (tests/config_tests.rs).
            poll_interval_ms: 100,
            tick_interval_ms: 180,
            ai_delay_ms: 450,
            chase_probability: DEFAULT_CHASE_PROBABILITY,
            reply_delay_min_ms: 1000,
            reply_delay_max_ms: 2000,
            fallback_delay_ms: 1500,
            log_dir: "logs".to_string(),
        }
    }
}

impl Config {
    /// 新しい設定インスタンスを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 環境変数 (`AKI_*`) で既定値を上書きした設定を作成
    ///
    /// 値が数値として解釈できない場合はエラー。
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のキー検索関数から設定を構築（テスト用に環境変数から分離）
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("AKI_POLL_MS") {
            config.poll_interval_ms = parse_millis("AKI_POLL_MS", &v)?;
        }
        if let Some(v) = lookup("AKI_TICK_MS") {
            config.tick_interval_ms = parse_millis("AKI_TICK_MS", &v)?;
        }
        if let Some(v) = lookup("AKI_AI_DELAY_MS") {
            config.ai_delay_ms = parse_millis("AKI_AI_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("AKI_CHASE_PROBABILITY") {
            let p: f64 = v
                .trim()
                .parse()
                .wrap_err_with(|| format!("AKI_CHASE_PROBABILITY is not a number: {v:?}"))?;
            if !(0.0..=1.0).contains(&p) {
                return Err(eyre!("AKI_CHASE_PROBABILITY must be within 0.0..=1.0, got {p}"));
            }
            config.chase_probability = p;
        }
        if let Some(v) = lookup("AKI_LOG_DIR") {
            if !v.trim().is_empty() {
                config.log_dir = v.trim().to_string();
            }
        }

        Ok(config)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

fn parse_millis(key: &str, raw: &str) -> Result<u64> {
    let ms: u64 = raw
        .trim()
        .parse()
        .wrap_err_with(|| format!("{key} is not a whole number of milliseconds: {raw:?}"))?;
    if ms == 0 {
        return Err(eyre!("{key} must be greater than zero"));
    }
    Ok(ms)
}
