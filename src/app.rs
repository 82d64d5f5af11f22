use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chat::ChatPanel;
use crate::config::Config;
use crate::content::{demo_user, peers, ContentSource, StaticContent};
use crate::leaderboard::{standings, Standing};
use crate::models::User;
use crate::progression::{apply_event, LevelProgress, XpEvent};
use crate::quiz::{Advance, QuizError, QuizSession};
use crate::scheduler::{Clock, SystemClock};
use crate::tutor::TutorSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Quiz,
    Tutor,
    Chat,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Quiz, Tab::Tutor, Tab::Chat];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Quiz => "Quiz",
            Tab::Tutor => "Tutor",
            Tab::Chat => "Chat",
        }
    }

    fn next(self) -> Self {
        match self {
            Tab::Dashboard => Tab::Quiz,
            Tab::Quiz => Tab::Tutor,
            Tab::Tutor => Tab::Chat,
            Tab::Chat => Tab::Dashboard,
        }
    }

    fn previous(self) -> Self {
        match self {
            Tab::Dashboard => Tab::Chat,
            Tab::Quiz => Tab::Dashboard,
            Tab::Tutor => Tab::Quiz,
            Tab::Chat => Tab::Tutor,
        }
    }
}

pub struct App {
    pub user: User,
    pub peers: Vec<User>,
    pub tab: Tab,
    pub quiz: QuizSession,
    pub tutor: TutorSession,
    pub tutor_input: String,
    pub chat: ChatPanel,
    pub chat_input: String,
    pub notice: Option<String>,
    pub exit: bool,
    content: StaticContent,
    clock: Box<dyn Clock>,
    rng: StdRng,
    leaderboard_size: usize,
}

impl App {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let content = match &config.content_path {
            Some(path) => StaticContent::from_file(path)?,
            None => StaticContent::builtin(),
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_parts(config, content, demo_user(), Box::new(SystemClock::new()), rng)
    }

    pub fn with_parts(
        config: &Config,
        content: StaticContent,
        user: User,
        clock: Box<dyn Clock>,
        mut rng: StdRng,
    ) -> anyhow::Result<Self> {
        let quiz = QuizSession::new(content.questions().to_vec())?;
        let mut tutor = TutorSession::new(content.questions().to_vec());
        tutor.ask_next(&mut rng);
        Ok(Self {
            user,
            peers: peers(),
            tab: Tab::Dashboard,
            quiz,
            tutor,
            tutor_input: String::new(),
            chat: ChatPanel::new(config.reply_delay),
            chat_input: String::new(),
            notice: None,
            exit: false,
            content,
            clock,
            rng,
            leaderboard_size: config.leaderboard_size,
        })
    }

    pub fn standings(&self) -> Vec<Standing> {
        standings(&self.peers, &self.user, self.leaderboard_size)
    }

    pub fn level_progress(&self) -> LevelProgress {
        LevelProgress::of(&self.user)
    }

    /// Delivers chat replies whose delay has elapsed.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.chat.deliver_due(now, &self.content, &mut self.rng);
    }

    pub fn quit(&mut self) {
        self.chat.teardown();
        self.exit = true;
    }

    pub fn select_answer(&mut self, index: usize) {
        let result = self.quiz.select_answer(index);
        ignore_guard("select", result);
    }

    pub fn submit_answer(&mut self) {
        let result = self.quiz.submit_answer().map(|_| ());
        ignore_guard("submit", result);
    }

    pub fn advance_quiz(&mut self) {
        match self.quiz.advance() {
            Ok(Advance::Completed(summary)) => self.award(summary.event()),
            Ok(Advance::Next { .. }) => {}
            Err(err) => ignore_guard("advance", Err(err)),
        }
    }

    pub fn reset_quiz(&mut self) {
        let result = self.quiz.reset();
        ignore_guard("reset", result);
    }

    /// Grades the typed answer, or moves on to the next question once the last one was graded.
    pub fn tutor_enter(&mut self) {
        if self.tutor.awaiting_answer() {
            if self.tutor.answer(&self.tutor_input).is_some() {
                self.tutor_input.clear();
            }
        } else if !self.tutor.is_finished() {
            self.tutor.ask_next(&mut self.rng);
        }
    }

    pub fn send_chat(&mut self) {
        let now = self.clock.now();
        if let Some(tick) = self.chat.send(&self.chat_input, now) {
            self.chat_input.clear();
            self.award(tick.event());
        }
    }

    fn award(&mut self, event: XpEvent) {
        let update = apply_event(&self.user, event);
        self.user = update.user;

        let mut notes = Vec::new();
        if update.leveled_up {
            notes.push(format!("Level up! You reached level {}", self.user.level));
        }
        notes.extend(update.unlocked.iter().map(|badge| format!("Badge unlocked: {badge}")));
        if !notes.is_empty() {
            self.notice = Some(notes.join(" · "));
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        // a notice lasts until the next key press
        self.notice = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::BackTab => self.tab = self.tab.previous(),
            _ => match self.tab {
                Tab::Dashboard => self.handle_dashboard_key(key.code),
                Tab::Quiz => self.handle_quiz_key(key.code),
                Tab::Tutor => self.handle_tutor_key(key.code),
                Tab::Chat => self.handle_chat_key(key.code),
            },
        }
    }

    fn handle_dashboard_key(&mut self, code: KeyCode) {
        if code == KeyCode::Char('q') {
            self.quit();
        }
    }

    fn handle_quiz_key(&mut self, code: KeyCode) {
        if self.quiz.is_completed() {
            match code {
                KeyCode::Enter | KeyCode::Char('r') => self.reset_quiz(),
                KeyCode::Char('q') => self.quit(),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char(c @ 'a'..='d') => self.select_answer(c as usize - 'a' as usize),
            KeyCode::Char(c @ '1'..='4') => self.select_answer(c as usize - '1' as usize),
            KeyCode::Down => {
                let next = self.quiz.selected_answer().map_or(0, |i| (i + 1) % 4);
                self.select_answer(next);
            }
            KeyCode::Up => {
                let prev = self.quiz.selected_answer().map_or(3, |i| (i + 3) % 4);
                self.select_answer(prev);
            }
            KeyCode::Enter if self.quiz.is_revealed() => self.advance_quiz(),
            KeyCode::Enter => self.submit_answer(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_tutor_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.tutor_enter(),
            KeyCode::Backspace => {
                self.tutor_input.pop();
            }
            KeyCode::Char(c) if self.tutor.awaiting_answer() => self.tutor_input.push(c),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.send_chat(),
            KeyCode::Backspace => {
                self.chat_input.pop();
            }
            KeyCode::Char(c) => self.chat_input.push(c),
            _ => {}
        }
    }
}

/// Guards are part of normal sequencing, not failures worth surfacing.
fn ignore_guard(action: &str, result: Result<(), QuizError>) {
    if let Err(err) = result {
        log::debug!("quiz {action} ignored: {err}");
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
