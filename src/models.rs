use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Badge {
    GameGuardian,
    KnowledgeHunter,
    ChatLegend,
    /// Awarded outside the ledger rules; carried through untouched.
    Custom(String),
}

impl Badge {
    pub fn name(&self) -> &str {
        match self {
            Badge::GameGuardian => "Game Guardian",
            Badge::KnowledgeHunter => "Knowledge Hunter",
            Badge::ChatLegend => "Chat Legend",
            Badge::Custom(name) => name,
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One user's progression snapshot. `level` is always `xp / 100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub xp: u32,
    pub level: u32,
    pub badges: BTreeSet<Badge>,
    pub quizzes_completed: u32,
    pub chat_messages: u32,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            xp: 0,
            level: 0,
            badges: BTreeSet::new(),
            quizzes_completed: 0,
            chat_messages: 0,
        }
    }

    pub fn has_badge(&self, badge: &Badge) -> bool {
        self.badges.contains(badge)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: [String; 4],
    #[serde(alias = "correctAnswer")]
    pub correct_index: usize,
    pub explanation: String,
    #[serde(default)]
    pub hint: Option<String>,
}

impl Question {
    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Author {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub author: Author,
    pub timestamp: DateTime<Local>,
    pub is_tip: bool,
}

impl Message {
    pub fn new(author: Author, content: impl Into<String>, is_tip: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            author,
            timestamp: Local::now(),
            is_tip,
        }
    }
}
