//! キーワード照合による定型応答
//!
//! 入力を正規化し、宣言順に並んだカテゴリのうち最初にキーワードを
//! 部分文字列として含むものから、応答を一つランダムに返す。
//! 一致しないことはエラーではなく `None`。

pub mod catalog;
pub mod normalize;

pub use catalog::{DOCTOR_CATEGORIES_PLACEHOLDER, SPECIALTY_PROMPTS};
pub use normalize::normalize;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// 応答カテゴリ: 正規化済みキーワード集合と応答リスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCategory {
    pub name: String,
    pub keywords: Vec<String>,
    pub responses: Vec<String>,
}

impl ResponseCategory {
    /// キーワードは格納時に正規化される
    pub fn new<K, R>(name: &str, keywords: K, responses: R) -> Self
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        Self {
            name: name.to_string(),
            keywords: keywords
                .into_iter()
                .map(|k| normalize(k.as_ref()))
                .filter(|k| !k.is_empty())
                .collect(),
            responses: responses.into_iter().map(|r| r.as_ref().to_string()).collect(),
        }
    }

    /// 正規化済みテキストにキーワードのいずれかが含まれるか
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

/// 定型応答マッチャ
#[derive(Debug, Clone)]
pub struct ResponseMatcher {
    categories: Cow<'static, [ResponseCategory]>,
}

impl ResponseMatcher {
    /// 独自カタログでマッチャを作成（並び順が優先順位）
    pub fn new(categories: Vec<ResponseCategory>) -> Self {
        Self { categories: Cow::Owned(categories) }
    }

    pub fn categories(&self) -> &[ResponseCategory] {
        &self.categories
    }

    /// 最初に一致したカテゴリを返す
    pub fn category_for(&self, text: &str) -> Option<&ResponseCategory> {
        let normalized = normalize(text);
        self.categories.iter().find(|c| c.matches(&normalized))
    }

    /// 指定した乱数源で応答を一つ選ぶ
    pub fn find_with<G: Rng + ?Sized>(&self, text: &str, rng: &mut G) -> Option<&str> {
        let category = self.category_for(text)?;
        let reply = category.responses.choose(rng)?;
        debug!(target: "matcher", category = %category.name, "canned response selected");
        Some(reply.as_str())
    }

    /// スレッドローカル乱数で応答を一つ選ぶ
    pub fn find(&self, text: &str) -> Option<&str> {
        self.find_with(text, &mut rand::thread_rng())
    }
}

impl Default for ResponseMatcher {
    fn default() -> Self {
        Self { categories: Cow::Borrowed(catalog::builtin()) }
    }
}
