//! Read-only ranking over user snapshots.

use crate::models::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub rank: usize,
    pub user_id: String,
    pub name: String,
    pub xp: u32,
    pub level: u32,
    pub is_current: bool,
}

/// Ranks `peers` by XP (highest first, ties keep input order) and returns the top `limit`.
///
/// A peer sharing `current.id` is replaced by the live `current` snapshot.
pub fn standings(peers: &[User], current: &User, limit: usize) -> Vec<Standing> {
    let mut rows: Vec<&User> = peers
        .iter()
        .map(|peer| if peer.id == current.id { current } else { peer })
        .collect();
    if !rows.iter().any(|row| row.id == current.id) {
        rows.push(current);
    }

    rows.sort_by(|a, b| b.xp.cmp(&a.xp));

    rows.into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, user)| Standing {
            rank: i + 1,
            user_id: user.id.clone(),
            name: user.name.clone(),
            xp: user.xp,
            level: user.level,
            is_current: user.id == current.id,
        })
        .collect()
}
