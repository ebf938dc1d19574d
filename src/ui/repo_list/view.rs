//! Plain-text rendering of the repository list state.

use crate::model::RepoModel;

use super::state::RepoListState;

/// Longest description shown per repository line.
const DESCRIPTION_WIDTH: usize = 60;

/// Render the state as lines of text, one repository per line.
pub fn render_lines(state: &RepoListState) -> Vec<String> {
    let mut lines = Vec::with_capacity(state.repositories.len() + 2);

    if state.is_loading {
        lines.push("Loading repositories...".to_string());
    }

    if state.error.is_error {
        lines.push(format!("Error: {}", state.error.message));
    }

    if state.repositories.is_empty() && !state.is_loading && !state.error.is_error {
        lines.push("No repositories".to_string());
    }

    lines.extend(state.repositories.iter().map(repo_line));
    lines
}

fn repo_line(repo: &RepoModel) -> String {
    let mut line = format!("{}  ★{}", repo.full_name, repo.stargazers_count);

    if let Some(language) = &repo.language {
        line.push_str(&format!("  [{}]", language));
    }
    if repo.fork {
        line.push_str("  (fork)");
    }
    if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
        line.push_str("  ");
        line.push_str(&truncate(description, DESCRIPTION_WIDTH));
    }

    line
}

/// Truncate text to `max_chars` characters, ending with an ellipsis when cut.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
