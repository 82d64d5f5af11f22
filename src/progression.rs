//! Progression ledger: XP awards, level recompute and badge unlocks.
//!
//! Every function here takes a snapshot and returns a new one. Counters that
//! feed badge rules are bumped in the same step as the XP award, so a badge
//! check never reads a stale counter.

use crate::models::{Badge, User};

pub const XP_PER_LEVEL: u32 = 100;
pub const XP_PER_CORRECT_ANSWER: u32 = 10;
pub const XP_PER_CHAT_MESSAGE: u32 = 5;

const GAME_GUARDIAN_LEVEL: u32 = 5;
const KNOWLEDGE_HUNTER_QUIZZES: u32 = 10;
const CHAT_LEGEND_MESSAGES: u32 = 50;

/// XP-earning events produced by the quiz and chat panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XpEvent {
    QuizCompleted { score: u32 },
    ChatMessageSent,
}

impl XpEvent {
    pub fn xp(self) -> u32 {
        match self {
            XpEvent::QuizCompleted { score } => score.saturating_mul(XP_PER_CORRECT_ANSWER),
            XpEvent::ChatMessageSent => XP_PER_CHAT_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerUpdate {
    pub user: User,
    pub xp_awarded: u32,
    pub unlocked: Vec<Badge>,
    pub leveled_up: bool,
}

/// The one place a level is derived from XP.
pub fn level_for_xp(xp: u32) -> u32 {
    xp / XP_PER_LEVEL
}

/// Adds `amount` XP, recomputes the level and unions in any satisfied badge.
pub fn apply_xp(record: &User, amount: u32) -> User {
    let mut next = record.clone();
    next.xp = record.xp.saturating_add(amount);
    next.level = level_for_xp(next.xp);
    for badge in earned_badges(&next) {
        next.badges.insert(badge);
    }
    next
}

/// Applies an event's counter bump and XP award as a single transition.
pub fn apply_event(record: &User, event: XpEvent) -> LedgerUpdate {
    let mut counted = record.clone();
    match event {
        XpEvent::QuizCompleted { .. } => {
            counted.quizzes_completed = counted.quizzes_completed.saturating_add(1);
        }
        XpEvent::ChatMessageSent => {
            counted.chat_messages = counted.chat_messages.saturating_add(1);
        }
    }

    let xp_awarded = event.xp();
    let user = apply_xp(&counted, xp_awarded);
    let unlocked: Vec<Badge> = user
        .badges
        .iter()
        .filter(|badge| !record.badges.contains(*badge))
        .cloned()
        .collect();
    let leveled_up = user.level > level_for_xp(record.xp);

    if leveled_up {
        log::info!("{} reached level {} ({} XP)", user.name, user.level, user.xp);
    }
    for badge in &unlocked {
        log::info!("{} unlocked badge '{}'", user.name, badge);
    }

    LedgerUpdate { user, xp_awarded, unlocked, leveled_up }
}

fn earned_badges(user: &User) -> Vec<Badge> {
    let mut earned = Vec::new();
    if user.level >= GAME_GUARDIAN_LEVEL {
        earned.push(Badge::GameGuardian);
    }
    if user.quizzes_completed >= KNOWLEDGE_HUNTER_QUIZZES {
        earned.push(Badge::KnowledgeHunter);
    }
    if user.chat_messages >= CHAT_LEGEND_MESSAGES {
        earned.push(Badge::ChatLegend);
    }
    earned
}

/// Dashboard view of where the user sits inside the current level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    pub level: u32,
    pub next_level_xp: u32,
    pub xp_to_next_level: u32,
    /// 0.0..1.0 progress within the current level
    pub fraction: f64,
}

impl LevelProgress {
    pub fn of(user: &User) -> Self {
        let level = level_for_xp(user.xp);
        let current_level_xp = level.saturating_mul(XP_PER_LEVEL);
        let next_level_xp = level.saturating_add(1).saturating_mul(XP_PER_LEVEL);
        let into_level = user.xp.saturating_sub(current_level_xp);
        Self {
            level,
            next_level_xp,
            xp_to_next_level: next_level_xp.saturating_sub(user.xp),
            fraction: f64::from(into_level) / f64::from(XP_PER_LEVEL),
        }
    }
}

#[cfg(test)]
#[path = "progression_tests.rs"]
mod tests;
