use crate::models::Question;
use crate::progression::XP_PER_CORRECT_ANSWER;
use crate::quiz::QuizSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Perfect,
    Excellent,
    Good,
    KeepLearning,
}

impl Grade {
    pub fn of(summary: &QuizSummary) -> Self {
        let score = u64::from(summary.score);
        let total = u64::from(summary.total);
        // integer percentages keep 80%/60% exact
        if score == total {
            Grade::Perfect
        } else if score * 100 >= total * 80 {
            Grade::Excellent
        } else if score * 100 >= total * 60 {
            Grade::Good
        } else {
            Grade::KeepLearning
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Grade::Perfect => "Perfect Score! 🌟",
            Grade::Excellent => "Excellent Work! 🌱",
            Grade::Good => "Good Job! 🍃",
            Grade::KeepLearning => "Keep Learning! 🌿",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Grade::Perfect => "You're a true environmental champion!",
            Grade::Excellent => "Your environmental knowledge is impressive!",
            Grade::Good => "You're on the right track to becoming eco-conscious!",
            Grade::KeepLearning => "Every step counts in protecting our planet!",
        }
    }
}

pub struct FeedbackGenerator;

impl FeedbackGenerator {
    /// Text shown under a revealed question.
    pub fn reveal(question: &Question, answer: usize) -> String {
        let verdict = if question.is_correct(answer) {
            format!("Correct! +{XP_PER_CORRECT_ANSWER} XP")
        } else {
            format!(
                "Incorrect. The answer is {}: {}",
                option_letter(question.correct_index),
                question.options[question.correct_index]
            )
        };
        format!("{verdict}\n{}", question.explanation)
    }

    pub fn completion(summary: &QuizSummary) -> String {
        let grade = Grade::of(summary);
        format!(
            "{}/{} Questions Correct\n+{} XP Earned\n\n{}\n{}",
            summary.score,
            summary.total,
            summary.xp_earned(),
            grade.headline(),
            grade.message()
        )
    }
}

/// A, B, C, D labels for option positions.
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .map_or('?', char::from)
}
