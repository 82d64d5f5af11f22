use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs, Wrap},
    Frame,
};

use ecolearn::app::{App, Tab};
use ecolearn::chat::TIP_INTERVAL;
use ecolearn::feedback::{option_letter, FeedbackGenerator};
use ecolearn::models::Author;
use ecolearn::progression::XP_PER_CHAT_MESSAGE;
use ecolearn::tutor::{Verdict, FAREWELL, WELCOME};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    match app.tab {
        Tab::Dashboard => draw_dashboard(frame, app, chunks[1]),
        Tab::Quiz => draw_quiz(frame, app, chunks[1]),
        Tab::Tutor => draw_tutor(frame, app, chunks[1]),
        Tab::Chat => draw_chat(frame, app, chunks[1]),
    }

    let status = app.notice.as_deref().unwrap_or("Tab: switch panel · Esc: quit");
    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::Gray)),
        chunks[2],
    );
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let selected = Tab::ALL.iter().position(|t| *t == app.tab).unwrap_or(0);
    let title = format!(" EcoLearn · Level {} · {} XP ", app.user.level, app.user.xp);
    let tabs = Tabs::new(Tab::ALL.iter().map(|t| t.title()))
        .block(Block::default().borders(Borders::ALL).title(title))
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, area);
}

fn draw_dashboard(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let progress = app.level_progress();
    let stats = vec![
        Line::from(Span::styled(
            format!("Welcome back, {}!", app.user.name),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Total XP: {}  ({} XP to next level)",
            app.user.xp, progress.xp_to_next_level
        )),
        Line::from(format!(
            "Quizzes completed: {}   Chat messages: {}",
            app.user.quizzes_completed, app.user.chat_messages
        )),
    ];
    f.render_widget(
        Paragraph::new(stats).block(Block::default().borders(Borders::ALL).title(" Progress ")),
        rows[0],
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(" Level {} ", progress.level)))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress.fraction.clamp(0.0, 1.0));
    f.render_widget(gauge, rows[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let badges: Vec<Line> = if app.user.badges.is_empty() {
        vec![Line::from("No badges earned yet")]
    } else {
        app.user.badges.iter().map(|b| Line::from(format!("★ {b}"))).collect()
    };
    f.render_widget(
        Paragraph::new(badges).block(Block::default().borders(Borders::ALL).title(" Your Badges ")),
        bottom[0],
    );

    let board: Vec<Line> = app
        .standings()
        .iter()
        .map(|s| {
            let style = if s.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(
                format!("#{} {:<20} Lv {:<3} {} XP", s.rank, s.name, s.level, s.xp),
                style,
            ))
        })
        .collect();
    f.render_widget(
        Paragraph::new(board).block(Block::default().borders(Borders::ALL).title(" Leaderboard ")),
        bottom[1],
    );
}

fn draw_quiz(f: &mut Frame, app: &App, area: Rect) {
    if let Some(summary) = app.quiz.summary() {
        let mut lines: Vec<Line> = vec![Line::from(Span::styled(
            "Quiz Complete!",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))];
        lines.push(Line::from(""));
        lines.extend(FeedbackGenerator::completion(&summary).lines().map(|l| Line::from(l.to_string())));
        lines.push(Line::from(""));
        lines.push(Line::from("Press r to take the quiz again"));
        let p = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Quiz "))
            .alignment(Alignment::Center);
        f.render_widget(p, area);
        return;
    }

    let Some(question) = app.quiz.current_question() else {
        return;
    };
    let index = app.quiz.current_index().unwrap_or(0);
    let total = app.quiz.questions().len();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(" Question {} of {} ", index + 1, total)))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(app.quiz.progress());
    f.render_widget(gauge, chunks[0]);

    let revealed = app.quiz.is_revealed();
    let selected = app.quiz.selected_answer();
    let mut lines = vec![
        Line::from(Span::styled(question.prompt.as_str(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];
    for (i, option) in question.options.iter().enumerate() {
        let style = if revealed && i == question.correct_index {
            Style::default().fg(Color::Green)
        } else if revealed && selected == Some(i) {
            Style::default().fg(Color::Red)
        } else if selected == Some(i) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("{}) {}", option_letter(i), option), style)));
    }
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Knowledge Quest "))
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let detail = match (revealed, selected) {
        (true, Some(answer)) => {
            let next = if app.quiz.is_last_question() { "Complete Quiz" } else { "Next Question" };
            format!("{}\n\nPress Enter: {next}", FeedbackGenerator::reveal(question, answer))
        }
        (false, Some(_)) => "Press Enter to submit your answer".to_string(),
        _ => "Choose an answer with a-d or the arrow keys".to_string(),
    };
    f.render_widget(
        Paragraph::new(detail)
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: true }),
        chunks[2],
    );
}

fn draw_tutor(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let mut lines = vec![Line::from(WELCOME), Line::from("")];
    if let Some(question) = app.tutor.current() {
        lines.push(Line::from(Span::styled(
            format!("Question: {}", question.prompt),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(reply) = app.tutor.last_reply() {
        let color = match reply.verdict {
            Verdict::Excellent => Color::Green,
            Verdict::Close => Color::Yellow,
            Verdict::NotQuite => Color::Red,
        };
        lines.push(Line::from(Span::styled(reply.feedback.clone(), Style::default().fg(color))));
        lines.push(Line::from(reply.explanation.clone()));
        lines.push(Line::from(""));
        if !app.tutor.is_finished() {
            lines.push(Line::from(Span::styled("Enter: next question", Style::default().fg(Color::Gray))));
        }
    }
    if app.tutor.is_finished() {
        lines.push(Line::from(Span::styled(FAREWELL, Style::default().fg(Color::Magenta))));
    }

    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Tutor "))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let input_title = if app.tutor.awaiting_answer() { " Your answer " } else { " " };
    f.render_widget(
        Paragraph::new(app.tutor_input.as_str()).block(Block::default().borders(Borders::ALL).title(input_title)),
        chunks[1],
    );
}

fn draw_chat(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let cadence = app.chat.cadence();
    let title = format!(
        " AI Learning Companion · {} messages (+{} XP) ",
        cadence.message_count(),
        cadence.xp_earned()
    );
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(chunks[0]);
    let width = usize::from(inner.width.saturating_sub(4)).max(10);

    let mut lines: Vec<Line> = Vec::new();
    for message in app.chat.messages() {
        let (prefix, style, alignment) = match message.author {
            Author::User => ("You", Style::default().fg(Color::Cyan), Alignment::Right),
            Author::Assistant if message.is_tip => ("Tip", Style::default().fg(Color::Green), Alignment::Left),
            Author::Assistant => ("Bot", Style::default(), Alignment::Left),
        };
        let header = format!("{prefix} · {}", message.timestamp.format("%H:%M"));
        lines.push(Line::from(Span::styled(header, style.add_modifier(Modifier::DIM))).alignment(alignment));
        for wrapped in textwrap::wrap(&message.content, width) {
            lines.push(Line::from(Span::styled(wrapped.into_owned(), style)).alignment(alignment));
        }
        lines.push(Line::from(""));
    }
    if app.chat.is_loading() {
        lines.push(Line::from(Span::styled("Bot is typing…", Style::default().fg(Color::Gray))));
    }

    // Keep the newest messages in view.
    let visible = usize::from(inner.height);
    let scroll = lines.len().saturating_sub(visible);
    let messages = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    f.render_widget(messages, chunks[0]);

    let input_title = if app.chat.is_loading() { " Waiting for reply… " } else { " Message " };
    f.render_widget(
        Paragraph::new(app.chat_input.as_str()).block(Block::default().borders(Borders::ALL).title(input_title)),
        chunks[1],
    );

    let footer = format!(
        "Next eco tip in {} messages • Each message earns +{} XP (tips every {})",
        cadence.messages_until_tip(),
        XP_PER_CHAT_MESSAGE,
        TIP_INTERVAL
    );
    f.render_widget(Paragraph::new(footer).style(Style::default().fg(Color::Gray)), chunks[2]);
}
