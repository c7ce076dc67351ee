//! 医療用語のハングマン

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::info;

use crate::config::HANGMAN_LIVES;

pub const KEYBOARD: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";

pub const STATUS_PLAYING: &str = "Adivina la palabra médica de AKI";
pub const STATUS_WON: &str = "¡Ganaste! Excelente diagnóstico médico 🩺";

/// (単語, ヒント)
pub const MEDICAL_WORDS: &[(&str, &str)] = &[
    ("FARMACIA", "Lugar donde se dispensan medicamentos"),
    ("PEDIATRIA", "Especialidad médica infantil"),
    ("KINESIOLOGIA", "Terapia física y rehabilitación"),
    ("CIRUGIA", "Especialidad de intervenciones quirúrgicas"),
    ("RECETA", "Documento para indicar medicamentos"),
    ("DIAGNOSTICO", "Conclusión médica sobre una enfermedad"),
    ("INSULINA", "Hormona usada en tratamiento de diabetes"),
    ("VACUNA", "Prevención inmunológica de enfermedades"),
    ("ANALISIS", "Estudio de laboratorio clínico"),
    ("CONSULTA", "Atención médica con profesional de salud"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HangmanOutcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HangmanSnapshot {
    pub masked: String,
    pub hint: String,
    pub wrong: Vec<char>,
    pub lives: u32,
    pub outcome: Option<HangmanOutcome>,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct Hangman {
    word: String,
    hint: String,
    guessed: BTreeSet<char>,
    wrong: Vec<char>,
    lives: u32,
    outcome: Option<HangmanOutcome>,
}

impl Hangman {
    /// 組み込みの単語リストからランダムに出題
    pub fn random<G: Rng + ?Sized>(rng: &mut G) -> Self {
        let (word, hint) = MEDICAL_WORDS.choose(rng).copied().unwrap_or(MEDICAL_WORDS[0]);
        Self::with_word(word, hint, HANGMAN_LIVES)
    }

    pub fn with_word(word: &str, hint: &str, lives: u32) -> Self {
        Self {
            word: word.to_uppercase(),
            hint: hint.to_string(),
            guessed: BTreeSet::new(),
            wrong: Vec::new(),
            lives,
            outcome: None,
        }
    }

    pub fn word(&self) -> &str { &self.word }
    pub fn hint(&self) -> &str { &self.hint }
    pub fn lives(&self) -> u32 { self.lives }
    pub fn wrong(&self) -> &[char] { &self.wrong }
    pub fn outcome(&self) -> Option<HangmanOutcome> { self.outcome }
    pub fn is_over(&self) -> bool { self.outcome.is_some() }

    pub fn is_used(&self, letter: char) -> bool {
        self.guessed.contains(&letter) || self.wrong.contains(&letter)
    }

    /// 文字を推測する。終局後・英字以外は無視。
    ///
    /// 判定は勝ち（全文字的中）を先に、負け（ライフ0）を後に行う。
    pub fn guess(&mut self, letter: char) {
        if self.is_over() || !letter.is_alphabetic() {
            return;
        }
        let Some(letter) = letter.to_uppercase().next() else {
            return;
        };

        if self.word.contains(letter) {
            self.guessed.insert(letter);
        } else if !self.wrong.contains(&letter) {
            self.wrong.push(letter);
            self.lives = self.lives.saturating_sub(1);
        }

        if self.word.chars().all(|c| self.guessed.contains(&c)) {
            self.outcome = Some(HangmanOutcome::Won);
        } else if self.lives == 0 {
            self.outcome = Some(HangmanOutcome::Lost);
        }

        if let Some(outcome) = self.outcome {
            info!(target: "hangman", ?outcome, word = %self.word, "hangman finished");
        }
    }

    /// 未推測の文字を `_` にした表示用文字列（例: `F _ R _ _ _ _ A`）
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| if self.guessed.contains(&c) { c.to_string() } else { "_".to_string() })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn status(&self) -> String {
        match self.outcome {
            None => STATUS_PLAYING.to_string(),
            Some(HangmanOutcome::Won) => STATUS_WON.to_string(),
            Some(HangmanOutcome::Lost) => format!("Perdiste. La palabra era: {}", self.word),
        }
    }

    pub fn snapshot(&self) -> HangmanSnapshot {
        HangmanSnapshot {
            masked: self.masked_word(),
            hint: self.hint.clone(),
            wrong: self.wrong.clone(),
            lives: self.lives,
            outcome: self.outcome,
            status: self.status(),
        }
    }
}
