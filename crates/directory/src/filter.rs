//! Filtered, sorted views over the loaded user list.

use chrono::{DateTime, FixedOffset};

use tiergrid_core::User;

/// Sort key for filtered views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// By follower count.
    #[default]
    Followers,
    /// By screen name, case-insensitive.
    Name,
    /// By account creation time.
    CreatedAt,
}

/// Sort direction for filtered views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first.
    Asc,
    /// Largest first.
    #[default]
    Desc,
}

/// Criteria for a filtered, sorted view of the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    /// Substring matched against screen name and description; blank
    /// matches everything.
    pub search_term: String,
    /// Inclusive lower bound on follower count.
    pub min_followers: u64,
    /// Inclusive upper bound on follower count; `None` means unbounded.
    pub max_followers: Option<u64>,
    /// Sort key.
    pub sort_by: SortKey,
    /// Sort direction.
    pub sort_order: SortOrder,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            min_followers: 0,
            max_followers: None,
            sort_by: SortKey::Followers,
            sort_order: SortOrder::Desc,
        }
    }
}

/// Apply `options` to `users`, returning the matching records in sorted
/// order.
pub fn apply_filters(users: &[User], options: &FilterOptions) -> Vec<User> {
    let needle = options.search_term.trim().to_lowercase();

    let mut filtered: Vec<User> = users
        .iter()
        .filter(|user| {
            needle.is_empty()
                || user.screen_name.to_lowercase().contains(&needle)
                || user.description.to_lowercase().contains(&needle)
        })
        .filter(|user| {
            user.followers_count >= options.min_followers
                && options
                    .max_followers
                    .map_or(true, |max| user.followers_count <= max)
        })
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        let ordering = match options.sort_by {
            SortKey::Followers => a.followers_count.cmp(&b.followers_count),
            SortKey::Name => a.screen_name.to_lowercase().cmp(&b.screen_name.to_lowercase()),
            SortKey::CreatedAt => creation_time(a).cmp(&creation_time(b)),
        };
        match options.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    filtered
}

/// Parse the directory's creation timestamp format
/// (`Mon Nov 29 21:18:15 +0000 2010`); unparseable values sort earliest.
fn creation_time(user: &User) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(&user.created_at, "%a %b %d %H:%M:%S %z %Y").ok()
}
