//! Shared helpers for command handlers.

use std::io::IsTerminal;

use resetdex_core::FilterState;

use crate::cli::ListArgs;
use crate::error::CliError;

/// Translate `list` flags into a filter state. Absent or blank flags leave
/// their dimension unfiltered.
pub fn filter_state(args: &ListArgs) -> FilterState {
    let mut state = FilterState::new();
    if let Some(ref query) = args.query {
        state.set_query(query.as_str());
    }
    state.set_category(args.category.as_deref());
    state.set_reset_method(args.reset.as_deref());
    state.set_connectivity(args.connectivity.as_deref());
    state
}

/// Prompt for confirmation. Non-interactive sessions get `default`.
pub fn confirm(message: &str, default: bool) -> Result<bool, CliError> {
    if !std::io::stdin().is_terminal() {
        return Ok(default);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}
