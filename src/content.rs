//! Read-only content: quiz questions, chat replies and tips.
//!
//! The engine only indexes into these pools. Random choice goes through a
//! caller-supplied [`rand::Rng`] so tests can seed it.

use std::collections::BTreeSet;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::data::{PEER_DATA, QUESTION_DATA, REPLY_DATA, TIP_DATA};
use crate::models::{Badge, Question, User};
use crate::progression::level_for_xp;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question {id}: correct index {correct_index} is not one of the 4 options")]
    InvalidQuestion { id: u32, correct_index: usize },
    #[error("content pool '{0}' is empty")]
    EmptyPool(&'static str),
}

pub trait ContentSource {
    fn questions(&self) -> &[Question];
    fn replies(&self) -> &[String];
    fn tips(&self) -> &[String];
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticContent {
    questions: Vec<Question>,
    replies: Vec<String>,
    tips: Vec<String>,
}

impl StaticContent {
    pub fn builtin() -> Self {
        let questions = QUESTION_DATA
            .iter()
            .map(|seed| Question {
                id: seed.id,
                prompt: seed.prompt.to_string(),
                options: seed.options.map(str::to_string),
                correct_index: seed.correct_index,
                explanation: seed.explanation.to_string(),
                hint: Some(seed.hint.to_string()),
            })
            .collect();

        Self {
            questions,
            replies: REPLY_DATA.iter().map(|s| s.to_string()).collect(),
            tips: TIP_DATA.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: StaticContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path)?;
        let content = Self::from_json(&raw)?;
        log::info!(
            "Loaded {} questions, {} replies, {} tips from {}",
            content.questions.len(),
            content.replies.len(),
            content.tips.len(),
            path.display()
        );
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.questions.is_empty() {
            return Err(ContentError::EmptyPool("questions"));
        }
        if self.replies.is_empty() {
            return Err(ContentError::EmptyPool("replies"));
        }
        if self.tips.is_empty() {
            return Err(ContentError::EmptyPool("tips"));
        }
        if let Some(bad) = self.questions.iter().find(|q| q.correct_index >= q.options.len()) {
            return Err(ContentError::InvalidQuestion { id: bad.id, correct_index: bad.correct_index });
        }
        Ok(())
    }
}

impl ContentSource for StaticContent {
    fn questions(&self) -> &[Question] {
        &self.questions
    }

    fn replies(&self) -> &[String] {
        &self.replies
    }

    fn tips(&self) -> &[String] {
        &self.tips
    }
}

/// Uniform pick from a pool; `None` only for an empty pool.
pub fn pick<'a, R: Rng + ?Sized>(pool: &'a [String], rng: &mut R) -> Option<&'a str> {
    pool.choose(rng).map(String::as_str)
}

/// The signed-in user the dashboard starts with.
pub fn demo_user() -> User {
    let xp = 285;
    User {
        id: "1".to_string(),
        name: "Alex Chen".to_string(),
        xp,
        level: level_for_xp(xp),
        badges: BTreeSet::from([
            Badge::Custom("Gaming Warrior".to_string()),
            Badge::Custom("Quiz Champion".to_string()),
        ]),
        quizzes_completed: 8,
        chat_messages: 23,
    }
}

pub fn peers() -> Vec<User> {
    PEER_DATA
        .iter()
        .map(|seed| {
            let mut user = User::new(seed.id, seed.name);
            user.xp = seed.xp;
            user.level = level_for_xp(seed.xp);
            user
        })
        .collect()
}
