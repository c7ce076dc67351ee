//! チャット層: 会話履歴・ゲーム起動の前処理・定型応答・入力中の遅延

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::{Config, TITLE_MAX_CHARS};
use crate::games::GameKind;
use crate::matcher::{DOCTOR_CATEGORIES_PLACEHOLDER, ResponseMatcher, SPECIALTY_PROMPTS, normalize};

/// 入力がこのフレーズと完全一致したらチェスを開く
pub const GAME_TRIGGER_PHRASE: &str = "juega con aki";

/// 部分一致でゲームを開くキーワード（正規化済み）
pub const GAME_KEYWORDS: &[(&str, GameKind)] = &[
    ("ajedrez", GameKind::Chess),
    ("ahorcado", GameKind::Hangman),
    ("pac-man", GameKind::GridChase),
    ("pacman", GameKind::GridChase),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// `submit` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// 空入力
    Ignored,
    /// 返信待ちのため受け付けない
    Busy,
    /// ゲームパネルを開くべき入力
    OpenGame(GameKind),
    /// 返信を予約した
    Queued,
}

#[derive(Debug, Clone)]
struct PendingReply {
    due: Instant,
    content: String,
}

/// ゲームを開くべき入力か判定する
pub fn game_trigger(text: &str) -> Option<GameKind> {
    let normalized = normalize(text);
    if normalized == GAME_TRIGGER_PHRASE {
        return Some(GameKind::Chess);
    }
    GAME_KEYWORDS
        .iter()
        .find(|(kw, _)| normalized.contains(kw))
        .map(|(_, kind)| *kind)
}

/// 定型応答が見つからなかったときの返答
pub fn default_reply(message: &str) -> String {
    format!(
        "Gracias por tu mensaje: \"{message}\". Estoy aprendiendo constantemente para mejorar mis respuestas. 🤖"
    )
}

/// 医師カテゴリのプレースホルダを専門科の一覧に展開する
pub fn expand_placeholders(reply: &str) -> String {
    if !reply.contains(DOCTOR_CATEGORIES_PLACEHOLDER) {
        return reply.to_string();
    }
    let list = SPECIALTY_PROMPTS
        .iter()
        .map(|(name, prompt)| format!("- {name}: escribe \"{prompt}\""))
        .collect::<Vec<_>>()
        .join("\n");
    reply.replace(DOCTOR_CATEGORIES_PLACEHOLDER, &list)
}

/// 最初のメッセージから会話タイトルを作る
pub fn conversation_title(first_message: &str) -> String {
    let mut title: String = first_message.chars().take(TITLE_MAX_CHARS).collect();
    if first_message.chars().count() > TITLE_MAX_CHARS {
        title.push_str("...");
    }
    title
}

/// 一つの会話
#[derive(Debug)]
pub struct ChatSession {
    matcher: ResponseMatcher,
    messages: Vec<ChatMessage>,
    title: Option<String>,
    pending: Option<PendingReply>,
    reply_delay: (u64, u64),
    fallback_delay: Duration,
    rng: StdRng,
}

impl ChatSession {
    pub fn new(config: &Config) -> Self {
        Self::with_matcher(config, ResponseMatcher::default(), StdRng::from_entropy())
    }

    /// 乱数シードを固定したセッション（テスト用）
    pub fn seeded(config: &Config, seed: u64) -> Self {
        Self::with_matcher(config, ResponseMatcher::default(), StdRng::seed_from_u64(seed))
    }

    pub fn with_matcher(config: &Config, matcher: ResponseMatcher, rng: StdRng) -> Self {
        let min = config.reply_delay_min_ms.min(config.reply_delay_max_ms);
        let max = config.reply_delay_min_ms.max(config.reply_delay_max_ms);
        Self {
            matcher,
            messages: Vec::new(),
            title: None,
            pending: None,
            reply_delay: (min, max),
            fallback_delay: Duration::from_millis(config.fallback_delay_ms),
            rng,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] { &self.messages }
    pub fn title(&self) -> Option<&str> { self.title.as_deref() }
    pub fn is_pending(&self) -> bool { self.pending.is_some() }

    /// メッセージを送信する
    pub fn submit(&mut self, text: &str, now: Instant) -> Submission {
        let text = text.trim();
        if text.is_empty() {
            return Submission::Ignored;
        }
        if let Some(kind) = game_trigger(text) {
            info!(target: "chat", game = %kind, "game trigger received");
            return Submission::OpenGame(kind);
        }
        if self.pending.is_some() {
            return Submission::Busy;
        }

        self.messages.push(ChatMessage { role: Role::User, content: text.to_string() });

        let (content, delay) = match self.matcher.find_with(text, &mut self.rng) {
            Some(reply) => {
                let reply = expand_placeholders(reply);
                let (min, max) = self.reply_delay;
                let ms = self.rng.gen_range(min..=max);
                (reply, Duration::from_millis(ms))
            }
            None => (default_reply(text), self.fallback_delay),
        };
        debug!(target: "chat", delay_ms = delay.as_millis() as u64, "reply scheduled");
        self.pending = Some(PendingReply { due: now + delay, content });
        Submission::Queued
    }

    /// 期限を迎えた返信を履歴に追加する。追加したら `true`。
    pub fn update(&mut self, now: Instant) -> bool {
        let due = matches!(&self.pending, Some(p) if p.due <= now);
        if !due {
            return false;
        }
        let Some(reply) = self.pending.take() else {
            return false;
        };
        self.messages.push(ChatMessage { role: Role::Assistant, content: reply.content });

        if self.title.is_none() && self.messages.len() == 2 {
            let title = conversation_title(&self.messages[0].content);
            info!(target: "chat", %title, "conversation titled");
            self.title = Some(title);
        }
        true
    }

    /// 新しい会話を始める
    pub fn new_conversation(&mut self) {
        self.messages.clear();
        self.title = None;
        self.pending = None;
        info!(target: "chat", "new conversation");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_detection() {
        assert_eq!(game_trigger("  Juega con AKI "), Some(GameKind::Chess));
        assert_eq!(game_trigger("quiero jugar al ajedrez"), Some(GameKind::Chess));
        assert_eq!(game_trigger("un AHORCADO por favor"), Some(GameKind::Hangman));
        assert_eq!(game_trigger("Pac-Man!"), Some(GameKind::GridChase));
        assert_eq!(game_trigger("juega con aki ahora"), None);
        assert_eq!(game_trigger("hola"), None);
    }

    #[test]
    fn placeholder_expands_to_specialties() {
        let out = expand_placeholders("Elige:\n\n[DOCTOR_CATEGORIES]");
        assert!(!out.contains(DOCTOR_CATEGORIES_PLACEHOLDER));
        for (name, _) in SPECIALTY_PROMPTS {
            assert!(out.contains(name));
        }
        assert_eq!(expand_placeholders("sin cambios"), "sin cambios");
    }

    #[test]
    fn title_is_truncated() {
        assert_eq!(conversation_title("hola"), "hola");
        let long = "á".repeat(45);
        let t = conversation_title(&long);
        assert_eq!(t.chars().count(), TITLE_MAX_CHARS + 3);
        assert!(t.ends_with("..."));
    }

    #[test]
    fn default_reply_quotes_message() {
        assert_eq!(
            default_reply("hola"),
            "Gracias por tu mensaje: \"hola\". Estoy aprendiendo constantemente para mejorar mis respuestas. 🤖"
        );
    }
}
