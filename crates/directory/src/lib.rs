#![warn(missing_docs)]
//! Remote user directory.
//!
//! The backing data is a static JSON array of user records served over
//! HTTP. The directory loads it in bulk, keeps the list in memory, and
//! answers searches and filtered views synchronously from there. Fetch
//! failures are a recoverable error state — the editor stays usable with
//! an empty list.

pub mod filter;

use thiserror::Error;
use tracing::{debug, warn};

use tiergrid_core::User;

pub use filter::{apply_filters, FilterOptions, SortKey, SortOrder};

/// Cap on search results, for responsiveness of the picker.
pub const SEARCH_RESULT_CAP: usize = 20;

/// Errors from talking to the directory endpoint.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Transport-level failure (DNS, connect, TLS, body decode).
    #[error("user directory request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("user directory returned status {0}")]
    Status(u16),
}

/// Fetch the full user list from `url`.
pub async fn fetch_users(url: &str) -> Result<Vec<User>, DirectoryError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(DirectoryError::Status(status.as_u16()));
    }
    let users = response.json::<Vec<User>>().await?;
    Ok(users)
}

/// In-memory view over the remote user directory.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
    error: Option<String>,
}

impl UserDirectory {
    /// Create an empty directory; call [`UserDirectory::refresh`] to load.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory over an already-loaded list (tests, offline use).
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users, error: None }
    }

    /// Reload the list from `url`.
    ///
    /// On success the previous error state clears; on failure the previous
    /// list is kept and a human-readable message is retained for display.
    /// Overlapping refreshes race harmlessly — last response wins.
    pub async fn refresh(&mut self, url: &str) -> Result<usize, DirectoryError> {
        match fetch_users(url).await {
            Ok(users) => {
                debug!("Loaded {} directory users", users.len());
                self.error = None;
                self.users = users;
                Ok(self.users.len())
            }
            Err(err) => {
                warn!("User directory load failed: {err}");
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// The loaded users, in directory order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The last load failure, if the most recent refresh failed.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Case-insensitive substring search over screen name and description.
    ///
    /// A blank term returns the whole list; anything else is capped at
    /// [`SEARCH_RESULT_CAP`] matches.
    pub fn search(&self, term: &str) -> Vec<&User> {
        let term = term.trim();
        if term.is_empty() {
            return self.users.iter().collect();
        }
        let needle = term.to_lowercase();
        self.users
            .iter()
            .filter(|user| {
                user.screen_name.to_lowercase().contains(&needle)
                    || user.description.to_lowercase().contains(&needle)
            })
            .take(SEARCH_RESULT_CAP)
            .collect()
    }
}
