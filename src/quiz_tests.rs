use super::*;
use crate::models::User;
use crate::progression::apply_event;

fn question(id: u32, correct_index: usize) -> Question {
    Question {
        id,
        prompt: format!("Question {id}?"),
        options: ["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()],
        correct_index,
        explanation: format!("Because {correct_index}."),
        hint: None,
    }
}

fn session(count: u32) -> QuizSession {
    let questions = (0..count).map(|i| question(i + 1, (i % 4) as usize)).collect();
    QuizSession::new(questions).unwrap()
}

fn answer(quiz: &mut QuizSession, index: usize) -> Advance {
    quiz.select_answer(index).unwrap();
    quiz.submit_answer().unwrap();
    quiz.advance().unwrap()
}

#[test]
fn test_new_session_starts_at_first_question() {
    let quiz = session(3);
    assert_eq!(quiz.state(), QuizState::InProgress { current_index: 0, selected: None, revealed: false });
    assert!(quiz.recorded_answers().is_empty());
    assert_eq!(quiz.progress(), 0.0);
}

#[test]
fn test_empty_quiz_is_rejected() {
    assert_eq!(QuizSession::new(Vec::new()).unwrap_err(), QuizError::EmptyQuiz);
}

#[test]
fn test_three_of_five_scores_thirty_xp() {
    let mut quiz = session(5);
    let correct = [0, 1, 2, 3, 0];
    let picks = [correct[0], correct[1], correct[2], (correct[3] + 1) % 4, (correct[4] + 1) % 4];

    let mut outcome = None;
    for pick in picks {
        outcome = Some(answer(&mut quiz, pick));
    }

    let Some(Advance::Completed(summary)) = outcome else {
        panic!("quiz should have completed, got {outcome:?}");
    };
    assert_eq!(summary.score, 3);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.xp_earned(), 30);
    assert_eq!(quiz.final_score(), Some(3));

    let update = apply_event(&User::new("u1", "Tester"), summary.event());
    assert_eq!(update.user.xp, 30);
    assert_eq!(update.user.quizzes_completed, 1);
}

#[test]
fn test_advance_before_submit_is_rejected() {
    let mut quiz = session(3);
    quiz.select_answer(2).unwrap();
    let before = quiz.state();

    assert_eq!(quiz.advance().unwrap_err(), QuizError::NotRevealed);
    assert_eq!(quiz.state(), before);
    assert!(quiz.recorded_answers().is_empty());
}

#[test]
fn test_submit_without_selection_is_rejected() {
    let mut quiz = session(2);
    assert_eq!(quiz.submit_answer().unwrap_err(), QuizError::NoSelection);
    assert!(!quiz.is_revealed());
    assert!(quiz.recorded_answers().is_empty());
}

#[test]
fn test_selection_locked_after_reveal() {
    let mut quiz = session(2);
    quiz.select_answer(1).unwrap();
    quiz.submit_answer().unwrap();

    assert_eq!(quiz.select_answer(3).unwrap_err(), QuizError::AlreadyRevealed);
    assert_eq!(quiz.submit_answer().unwrap_err(), QuizError::AlreadyRevealed);
    assert_eq!(quiz.selected_answer(), Some(1));
    assert_eq!(quiz.recorded_answers(), &[1]);
}

#[test]
fn test_reselect_before_submit_replaces_choice() {
    let mut quiz = session(1);
    quiz.select_answer(3).unwrap();
    quiz.select_answer(0).unwrap();
    assert!(quiz.submit_answer().unwrap());
    assert_eq!(quiz.last_answer_correct(), Some(true));
}

#[test]
fn test_out_of_range_option_is_rejected() {
    let mut quiz = session(1);
    assert_eq!(quiz.select_answer(4).unwrap_err(), QuizError::InvalidOption { index: 4, available: 4 });
    assert_eq!(quiz.selected_answer(), None);
}

#[test]
fn test_advance_clears_selection_and_reveal() {
    let mut quiz = session(3);
    assert_eq!(answer(&mut quiz, 0), Advance::Next { index: 1 });
    assert_eq!(quiz.state(), QuizState::InProgress { current_index: 1, selected: None, revealed: false });
    assert_eq!(quiz.recorded_answers().len(), 1);
}

#[test]
fn test_progress_counts_revealed_question() {
    let mut quiz = session(4);
    quiz.select_answer(0).unwrap();
    assert_eq!(quiz.progress(), 0.0);
    quiz.submit_answer().unwrap();
    assert_eq!(quiz.progress(), 0.25);
    quiz.advance().unwrap();
    assert_eq!(quiz.progress(), 0.25);
}

#[test]
fn test_operations_rejected_after_completion() {
    let mut quiz = session(1);
    answer(&mut quiz, 0);
    assert_eq!(quiz.select_answer(0).unwrap_err(), QuizError::AlreadyCompleted);
    assert_eq!(quiz.submit_answer().unwrap_err(), QuizError::AlreadyCompleted);
    assert_eq!(quiz.advance().unwrap_err(), QuizError::AlreadyCompleted);
}

#[test]
fn test_reset_only_from_completed() {
    let mut quiz = session(2);
    assert_eq!(quiz.reset().unwrap_err(), QuizError::NotCompleted);
}

#[test]
fn test_reset_keeps_progression() {
    let mut quiz = session(2);
    answer(&mut quiz, 0);
    let Advance::Completed(summary) = answer(&mut quiz, 1) else {
        panic!("expected completion");
    };
    let user = apply_event(&User::new("u1", "Tester"), summary.event()).user;
    let snapshot = user.clone();

    quiz.reset().unwrap();
    assert!(quiz.recorded_answers().is_empty());
    assert_eq!(quiz.current_index(), Some(0));
    assert!(!quiz.is_completed());
    assert_eq!(user, snapshot);
    assert_eq!(user.xp, 20);
}

#[test]
fn test_summary_xp_saturates() {
    let summary = QuizSummary { score: u32::MAX, total: u32::MAX };
    assert_eq!(summary.xp_earned(), u32::MAX);
    assert_eq!(summary.xp_earned(), summary.event().xp());
}
