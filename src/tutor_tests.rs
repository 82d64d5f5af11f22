use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn fps_question() -> Question {
    Question {
        id: 1,
        prompt: "What does 'FPS' stand for in gaming?".to_string(),
        options: [
            "First Person Shooter".to_string(),
            "Frames Per Second".to_string(),
            "Fast Paced Strategy".to_string(),
            "Final Player Score".to_string(),
        ],
        correct_index: 1,
        explanation: "Frames per second measures smoothness.".to_string(),
        hint: Some("It's about how smooth the picture looks.".to_string()),
    }
}

fn numbered(count: u32) -> Vec<Question> {
    (1..=count)
        .map(|id| Question { id, ..fps_question() })
        .collect()
}

#[test]
fn test_similarity_ignores_case_and_word_order() {
    assert_eq!(similarity("frames per second", "Frames Per Second"), 100);
    assert_eq!(similarity("  second   PER frames ", "Frames Per Second"), 100);
    assert_eq!(similarity("", "Gold"), 0);
}

#[test]
fn test_verdict_thresholds_are_strict() {
    assert_eq!(Verdict::of(100), Verdict::Excellent);
    assert_eq!(Verdict::of(76), Verdict::Excellent);
    assert_eq!(Verdict::of(75), Verdict::Close);
    assert_eq!(Verdict::of(41), Verdict::Close);
    assert_eq!(Verdict::of(40), Verdict::NotQuite);
    assert_eq!(Verdict::of(0), Verdict::NotQuite);
}

#[test]
fn test_typo_still_counts_as_excellent() {
    let reply = grade("frames per secnd", &fps_question());
    assert_eq!(reply.score, 94);
    assert_eq!(reply.verdict, Verdict::Excellent);
    assert_eq!(reply.feedback, "Excellent! ✅ Your answer 'frames per secnd' is correct.");
    assert_eq!(reply.explanation, "Here's more about it: Frames per second measures smoothness.");
}

#[test]
fn test_partial_answer_gets_the_hint() {
    let reply = grade("frames per", &fps_question());
    assert_eq!(reply.score, 59);
    assert_eq!(reply.verdict, Verdict::Close);
    assert_eq!(reply.feedback, "You're close! Hint: It's about how smooth the picture looks.");

    let bare = Question { hint: None, ..fps_question() };
    assert_eq!(grade("frames per", &bare).feedback, "You're close!");
}

#[test]
fn test_unrelated_answer_is_not_quite() {
    let reply = grade("banana", &fps_question());
    assert_eq!(reply.verdict, Verdict::NotQuite);
    assert_eq!(reply.feedback, "Not quite right. Let's learn this properly.");
}

#[test]
fn test_deck_never_repeats_and_runs_dry() {
    let mut deck = QuestionDeck::new(numbered(10));
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = BTreeSet::new();

    for drawn in 1..=10 {
        let id = deck.draw(&mut rng).map(|q| q.id).unwrap();
        assert!(seen.insert(id), "question {id} asked twice");
        assert_eq!(deck.remaining(), 10 - drawn);
    }
    assert_eq!(seen, (1..=10).collect());
    assert!(deck.draw(&mut rng).is_none());
}

#[test]
fn test_deck_order_follows_the_seed() {
    let order = |seed| {
        let mut deck = QuestionDeck::new(numbered(6));
        let mut rng = StdRng::seed_from_u64(seed);
        std::iter::from_fn(|| deck.draw(&mut rng).map(|q| q.id)).collect::<Vec<_>>()
    };
    assert_eq!(order(42), order(42));
    assert_eq!(order(42).len(), 6);
}

#[test]
fn test_empty_deck_draws_nothing() {
    let mut deck = QuestionDeck::new(Vec::new());
    assert_eq!(deck.remaining(), 0);
    assert!(deck.draw(&mut StdRng::seed_from_u64(0)).is_none());
}

#[test]
fn test_session_answers_then_moves_on() {
    let mut session = TutorSession::new(numbered(2));
    let mut rng = StdRng::seed_from_u64(9);
    assert!(!session.awaiting_answer());
    assert!(session.answer("frames per second").is_none());

    let first = session.ask_next(&mut rng).map(|q| q.id).unwrap();
    assert!(session.awaiting_answer());
    assert!(session.answer("   ").is_none());
    assert!(session.awaiting_answer());

    let reply = session.answer("Frames Per Second").cloned().unwrap();
    assert_eq!(reply.question_id, first);
    assert_eq!(reply.verdict, Verdict::Excellent);
    assert!(!session.awaiting_answer());
    assert_eq!(session.last_reply(), Some(&reply));

    let second = session.ask_next(&mut rng).map(|q| q.id).unwrap();
    assert_ne!(first, second);
    assert_eq!(session.last_reply(), None);
    assert!(!session.is_finished());
}

#[test]
fn test_session_finishes_when_deck_is_spent() {
    let mut session = TutorSession::new(numbered(1));
    let mut rng = StdRng::seed_from_u64(1);

    session.ask_next(&mut rng);
    session.answer("banana");
    assert!(session.ask_next(&mut rng).is_none());
    assert!(session.is_finished());
    assert!(session.current().is_none());
}
