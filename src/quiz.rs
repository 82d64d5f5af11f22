//! Quiz session state machine: select, submit (reveal), advance, complete.

use crate::models::Question;
use crate::progression::XpEvent;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("a quiz needs at least one question")]
    EmptyQuiz,
    #[error("no answer selected")]
    NoSelection,
    #[error("answer already revealed for this question")]
    AlreadyRevealed,
    #[error("answer not yet submitted for this question")]
    NotRevealed,
    #[error("option {index} does not exist (question has {available})")]
    InvalidOption { index: usize, available: usize },
    #[error("quiz already completed")]
    AlreadyCompleted,
    #[error("quiz still in progress")]
    NotCompleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress {
        current_index: usize,
        selected: Option<usize>,
        revealed: bool,
    },
    Completed {
        final_score: u32,
    },
}

impl QuizState {
    const INITIAL: QuizState = QuizState::InProgress { current_index: 0, selected: None, revealed: false };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: u32,
    pub total: u32,
}

impl QuizSummary {
    pub fn xp_earned(&self) -> u32 {
        self.event().xp()
    }

    /// The ledger event this attempt reports.
    pub fn event(&self) -> XpEvent {
        XpEvent::QuizCompleted { score: self.score }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next { index: usize },
    Completed(QuizSummary),
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    state: QuizState,
    recorded: Vec<usize>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuiz);
        }
        Ok(Self { questions, state: QuizState::INITIAL, recorded: Vec::new() })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn recorded_answers(&self) -> &[usize] {
        &self.recorded
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, QuizState::Completed { .. })
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::InProgress { current_index, .. } => Some(current_index),
            QuizState::Completed { .. } => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    pub fn selected_answer(&self) -> Option<usize> {
        match self.state {
            QuizState::InProgress { selected, .. } => selected,
            QuizState::Completed { .. } => None,
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.state, QuizState::InProgress { revealed: true, .. })
    }

    /// Whether the revealed answer was right; `None` until the reveal.
    pub fn last_answer_correct(&self) -> Option<bool> {
        match self.state {
            QuizState::InProgress { current_index, selected: Some(answer), revealed: true } => {
                Some(self.questions[current_index].is_correct(answer))
            }
            _ => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index() == Some(self.questions.len() - 1)
    }

    /// Share of questions answered, counting a revealed one as done.
    pub fn progress(&self) -> f64 {
        let total = self.questions.len() as f64;
        match self.state {
            QuizState::InProgress { current_index, revealed, .. } => {
                (current_index + usize::from(revealed)) as f64 / total
            }
            QuizState::Completed { .. } => 1.0,
        }
    }

    pub fn final_score(&self) -> Option<u32> {
        match self.state {
            QuizState::Completed { final_score } => Some(final_score),
            QuizState::InProgress { .. } => None,
        }
    }

    pub fn summary(&self) -> Option<QuizSummary> {
        self.final_score().map(|score| QuizSummary { score, total: self.questions.len() as u32 })
    }

    pub fn select_answer(&mut self, index: usize) -> Result<(), QuizError> {
        match &mut self.state {
            QuizState::Completed { .. } => Err(QuizError::AlreadyCompleted),
            QuizState::InProgress { revealed: true, .. } => Err(QuizError::AlreadyRevealed),
            QuizState::InProgress { current_index, selected, .. } => {
                let available = self.questions[*current_index].options.len();
                if index >= available {
                    return Err(QuizError::InvalidOption { index, available });
                }
                *selected = Some(index);
                Ok(())
            }
        }
    }

    /// Locks in the selection and reveals it. Returns whether it was correct.
    pub fn submit_answer(&mut self) -> Result<bool, QuizError> {
        match &mut self.state {
            QuizState::Completed { .. } => Err(QuizError::AlreadyCompleted),
            QuizState::InProgress { revealed: true, .. } => Err(QuizError::AlreadyRevealed),
            QuizState::InProgress { selected: None, .. } => Err(QuizError::NoSelection),
            QuizState::InProgress { current_index, selected: Some(answer), revealed } => {
                self.recorded.push(*answer);
                *revealed = true;
                Ok(self.questions[*current_index].is_correct(*answer))
            }
        }
    }

    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        let current_index = match self.state {
            QuizState::Completed { .. } => return Err(QuizError::AlreadyCompleted),
            QuizState::InProgress { revealed: false, .. } => return Err(QuizError::NotRevealed),
            QuizState::InProgress { current_index, .. } => current_index,
        };

        if current_index + 1 < self.questions.len() {
            let index = current_index + 1;
            self.state = QuizState::InProgress { current_index: index, selected: None, revealed: false };
            return Ok(Advance::Next { index });
        }

        let final_score = self.score_recorded();
        self.state = QuizState::Completed { final_score };
        let summary = QuizSummary { score: final_score, total: self.questions.len() as u32 };
        log::info!(
            "Quiz completed! Score: {}/{}, XP earned: {}",
            summary.score,
            summary.total,
            summary.xp_earned()
        );
        Ok(Advance::Completed(summary))
    }

    /// Starts the same questions over. Progression already earned is kept by the caller.
    pub fn reset(&mut self) -> Result<(), QuizError> {
        if !self.is_completed() {
            return Err(QuizError::NotCompleted);
        }
        self.state = QuizState::INITIAL;
        self.recorded.clear();
        log::debug!("quiz reset");
        Ok(())
    }

    fn score_recorded(&self) -> u32 {
        self.recorded
            .iter()
            .zip(&self.questions)
            .filter(|(answer, question)| question.is_correct(**answer))
            .count() as u32
    }
}

#[cfg(test)]
#[path = "quiz_tests.rs"]
mod tests;
