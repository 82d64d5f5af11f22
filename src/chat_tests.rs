use super::*;
use crate::content::StaticContent;
use crate::models::User;
use crate::progression::apply_event;
use crate::scheduler::{Clock, LogicalClock};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DELAY: Duration = Duration::from_millis(1500);

#[test]
fn test_every_fifth_message_is_a_tip() {
    let mut cadence = ChatCadence::new();
    let ticks: Vec<CadenceTick> = (0..5).map(|_| cadence.record_message()).collect();

    let tips: Vec<bool> = ticks.iter().map(|t| t.is_tip).collect();
    assert_eq!(tips, vec![false, false, false, false, true]);
    assert_eq!(ticks.iter().map(|t| t.xp_awarded).sum::<u32>(), 25);
    assert_eq!(cadence.xp_earned(), 25);
}

#[test]
fn test_tips_repeat_on_multiples_of_five() {
    let mut cadence = ChatCadence::new();
    let tip_positions: Vec<u32> = (0..15)
        .map(|_| cadence.record_message())
        .filter(|t| t.is_tip)
        .map(|t| t.message_count)
        .collect();
    assert_eq!(tip_positions, vec![5, 10, 15]);
}

#[test]
fn test_messages_until_tip_countdown() {
    let mut cadence = ChatCadence::new();
    assert_eq!(cadence.messages_until_tip(), 5);
    cadence.record_message();
    assert_eq!(cadence.messages_until_tip(), 4);
    for _ in 0..4 {
        cadence.record_message();
    }
    assert_eq!(cadence.messages_until_tip(), 5);
}

#[test]
fn test_fifty_messages_unlock_chat_legend() {
    let mut cadence = ChatCadence::new();
    let mut user = User::new("u1", "Tester");
    for _ in 0..50 {
        let tick = cadence.record_message();
        user = apply_event(&user, tick.event()).user;
    }
    assert_eq!(user.chat_messages, 50);
    assert_eq!(user.xp, 250);
    assert!(user.has_badge(&crate::models::Badge::ChatLegend));
}

#[test]
fn test_panel_starts_with_greeting() {
    let panel = ChatPanel::new(DELAY);
    assert_eq!(panel.messages().len(), 1);
    assert_eq!(panel.messages()[0].author, Author::Assistant);
    assert!(!panel.is_loading());
}

#[test]
fn test_blank_input_is_ignored() {
    let mut panel = ChatPanel::new(DELAY);
    assert_eq!(panel.send("   ", Duration::ZERO), None);
    assert_eq!(panel.cadence().message_count(), 0);
    assert_eq!(panel.messages().len(), 1);
}

#[test]
fn test_reply_arrives_after_delay() {
    let clock = LogicalClock::new();
    let content = StaticContent::builtin();
    let mut rng = StdRng::seed_from_u64(1);
    let mut panel = ChatPanel::new(DELAY);

    let tick = panel.send("How do solar panels work?", clock.now()).unwrap();
    assert_eq!(tick.message_count, 1);
    assert!(panel.is_loading());
    assert_eq!(panel.send("again", clock.now()), None);

    clock.advance(Duration::from_millis(1000));
    assert_eq!(panel.deliver_due(clock.now(), &content, &mut rng), 0);

    clock.advance(Duration::from_millis(500));
    assert_eq!(panel.deliver_due(clock.now(), &content, &mut rng), 1);
    assert!(!panel.is_loading());

    let reply = panel.messages().last().unwrap();
    assert_eq!(reply.author, Author::Assistant);
    assert!(!reply.is_tip);
    assert!(content.replies().contains(&reply.content));
}

#[test]
fn test_fifth_reply_is_a_tip() {
    let clock = LogicalClock::new();
    let content = StaticContent::builtin();
    let mut rng = StdRng::seed_from_u64(5);
    let mut panel = ChatPanel::new(DELAY);

    for i in 1..=5 {
        panel.send(&format!("message {i}"), clock.now()).unwrap();
        clock.advance(DELAY);
        panel.deliver_due(clock.now(), &content, &mut rng);
    }

    let last = panel.messages().last().unwrap();
    assert!(last.is_tip);
    assert!(content.tips().contains(&last.content));
    assert_eq!(panel.messages().iter().filter(|m| m.is_tip).count(), 1);
}

#[test]
fn test_teardown_drops_pending_reply() {
    let clock = LogicalClock::new();
    let content = StaticContent::builtin();
    let mut rng = StdRng::seed_from_u64(3);
    let mut panel = ChatPanel::new(DELAY);

    panel.send("hello", clock.now()).unwrap();
    assert_eq!(panel.teardown(), 1);

    clock.advance(DELAY * 2);
    assert_eq!(panel.deliver_due(clock.now(), &content, &mut rng), 0);
    assert_eq!(panel.messages().len(), 2);
    assert_eq!(panel.cadence().message_count(), 1);
}
