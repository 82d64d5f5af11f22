//! Chat cadence and the chat panel's message log.

use std::time::Duration;

use rand::Rng;

use crate::content::{pick, ContentSource};
use crate::data::GREETING;
use crate::models::{Author, Message};
use crate::progression::{XpEvent, XP_PER_CHAT_MESSAGE};
use crate::scheduler::Scheduler;

/// Every Nth message is answered with a tip.
pub const TIP_INTERVAL: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadenceTick {
    pub message_count: u32,
    pub is_tip: bool,
    pub xp_awarded: u32,
}

impl CadenceTick {
    pub fn event(&self) -> XpEvent {
        XpEvent::ChatMessageSent
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatCadence {
    message_count: u32,
}

impl ChatCadence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message_count(&self) -> u32 {
        self.message_count
    }

    pub fn record_message(&mut self) -> CadenceTick {
        self.message_count += 1;
        CadenceTick {
            message_count: self.message_count,
            is_tip: self.message_count % TIP_INTERVAL == 0,
            xp_awarded: XP_PER_CHAT_MESSAGE,
        }
    }

    pub fn messages_until_tip(&self) -> u32 {
        TIP_INTERVAL - self.message_count % TIP_INTERVAL
    }

    /// XP earned through this panel so far.
    pub fn xp_earned(&self) -> u32 {
        self.message_count * XP_PER_CHAT_MESSAGE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplyKind {
    Reply,
    Tip,
}

#[derive(Debug)]
pub struct ChatPanel {
    cadence: ChatCadence,
    messages: Vec<Message>,
    pending: Scheduler<ReplyKind>,
    reply_delay: Duration,
}

impl ChatPanel {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            cadence: ChatCadence::new(),
            messages: vec![Message::new(Author::Assistant, GREETING, false)],
            pending: Scheduler::new(),
            reply_delay,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn cadence(&self) -> &ChatCadence {
        &self.cadence
    }

    /// A reply is on its way; input stays disabled until it lands.
    pub fn is_loading(&self) -> bool {
        !self.pending.is_idle()
    }

    /// Posts the user's message and schedules the reply.
    ///
    /// Blank input, or input while a reply is pending, is ignored and earns nothing.
    pub fn send(&mut self, input: &str, now: Duration) -> Option<CadenceTick> {
        if input.trim().is_empty() || self.is_loading() {
            return None;
        }

        self.messages.push(Message::new(Author::User, input, false));
        let tick = self.cadence.record_message();
        let kind = if tick.is_tip { ReplyKind::Tip } else { ReplyKind::Reply };
        self.pending.schedule(now, self.reply_delay, kind);

        log::debug!(
            "Message sent! Total messages: {}, +{} XP, reply {:?} in {:?}",
            tick.message_count,
            tick.xp_awarded,
            kind,
            self.reply_delay
        );
        Some(tick)
    }

    /// Appends every reply whose delay has elapsed. Returns how many landed.
    pub fn deliver_due<C, R>(&mut self, now: Duration, content: &C, rng: &mut R) -> usize
    where
        C: ContentSource + ?Sized,
        R: Rng + ?Sized,
    {
        let mut delivered = 0;
        for kind in self.pending.drain_due(now) {
            let (pool, is_tip) = match kind {
                ReplyKind::Tip => (content.tips(), true),
                ReplyKind::Reply => (content.replies(), false),
            };
            match pick(pool, rng) {
                Some(text) => {
                    self.messages.push(Message::new(Author::Assistant, text, is_tip));
                    delivered += 1;
                }
                None => log::warn!("no content available for {kind:?}; reply dropped"),
            }
        }
        delivered
    }

    /// Drops any reply still in flight, as when the panel closes.
    pub fn teardown(&mut self) -> usize {
        let dropped = self.pending.cancel_all();
        if dropped > 0 {
            log::debug!("chat panel closed with {dropped} pending replies");
        }
        dropped
    }
}

#[cfg(test)]
#[path = "chat_tests.rs"]
mod tests;
