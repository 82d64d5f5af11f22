//! Free-text tutor drill.
//!
//! Questions come out of a [`QuestionDeck`] in random order, each at most once.
//! A typed answer is compared with the correct option's text and graded in
//! three tiers by similarity.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Question;

/// Scores above this are accepted outright.
pub const EXCELLENT_ABOVE: u32 = 75;
/// Scores above this earn the hint.
pub const CLOSE_ABOVE: u32 = 40;

pub const WELCOME: &str = "Hello! Welcome to today's lesson.";
pub const FAREWELL: &str = "That's all for today! Great job! 🎉 Keep practicing!";

/// Similarity in `0..=100`, ignoring case and word order.
pub fn similarity(answer: &str, expected: &str) -> u32 {
    let ratio = strsim::normalized_levenshtein(&token_sort(answer), &token_sort(expected));
    (ratio * 100.0).round() as u32
}

fn token_sort(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut words: Vec<&str> = lower.split_whitespace().collect();
    words.sort_unstable();
    words.join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Excellent,
    Close,
    NotQuite,
}

impl Verdict {
    pub fn of(score: u32) -> Self {
        if score > EXCELLENT_ABOVE {
            Verdict::Excellent
        } else if score > CLOSE_ABOVE {
            Verdict::Close
        } else {
            Verdict::NotQuite
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorReply {
    pub question_id: u32,
    pub score: u32,
    pub verdict: Verdict,
    pub feedback: String,
    pub explanation: String,
}

pub fn grade(answer: &str, question: &Question) -> TutorReply {
    let answer = answer.trim();
    let expected = &question.options[question.correct_index];
    let score = similarity(answer, expected);
    let verdict = Verdict::of(score);

    let feedback = match (verdict, question.hint.as_deref()) {
        (Verdict::Excellent, _) => format!("Excellent! ✅ Your answer '{answer}' is correct."),
        (Verdict::Close, Some(hint)) => format!("You're close! Hint: {hint}"),
        (Verdict::Close, None) => "You're close!".to_string(),
        (Verdict::NotQuite, _) => "Not quite right. Let's learn this properly.".to_string(),
    };

    TutorReply {
        question_id: question.id,
        score,
        verdict,
        feedback,
        explanation: format!("Here's more about it: {}", question.explanation),
    }
}

/// Random draw without replacement, keyed by question id.
#[derive(Debug, Clone)]
pub struct QuestionDeck {
    questions: Vec<Question>,
    asked: BTreeSet<u32>,
}

impl QuestionDeck {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions, asked: BTreeSet::new() }
    }

    pub fn remaining(&self) -> usize {
        self.questions.iter().filter(|q| !self.asked.contains(&q.id)).count()
    }

    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Question> {
        let unasked: Vec<&Question> = self.questions.iter().filter(|q| !self.asked.contains(&q.id)).collect();
        let chosen = *unasked.choose(rng)?;
        self.asked.insert(chosen.id);
        Some(chosen)
    }
}

#[derive(Debug, Clone)]
pub struct TutorSession {
    deck: QuestionDeck,
    current: Option<Question>,
    last_reply: Option<TutorReply>,
    finished: bool,
}

impl TutorSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { deck: QuestionDeck::new(questions), current: None, last_reply: None, finished: false }
    }

    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn last_reply(&self) -> Option<&TutorReply> {
        self.last_reply.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn awaiting_answer(&self) -> bool {
        self.current.is_some()
    }

    /// Moves to a fresh question; finishes once every question has been asked.
    pub fn ask_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Question> {
        self.last_reply = None;
        self.current = self.deck.draw(rng).cloned();
        if self.current.is_none() && !self.finished {
            self.finished = true;
            log::info!("tutor drill finished");
        }
        self.current.as_ref()
    }

    /// Grades `input` against the open question. Blank input, or no open question, is ignored.
    pub fn answer(&mut self, input: &str) -> Option<&TutorReply> {
        if input.trim().is_empty() {
            return None;
        }
        let question = self.current.take()?;
        let reply = grade(input, &question);
        log::debug!("tutor question {} scored {} ({:?})", reply.question_id, reply.score, reply.verdict);
        self.last_reply = Some(reply);
        self.last_reply.as_ref()
    }
}

#[cfg(test)]
#[path = "tutor_tests.rs"]
mod tests;
