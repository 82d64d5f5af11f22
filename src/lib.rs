//! Progression and quiz engine for a gamified learning dashboard.

pub mod app;
pub mod chat;
pub mod config;
pub mod content;
pub mod data;
pub mod feedback;
pub mod leaderboard;
pub mod models;
pub mod progression;
pub mod quiz;
pub mod scheduler;
pub mod tutor;
