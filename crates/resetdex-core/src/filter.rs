// ── Filter engine ──
//
// `FilterState` holds the user's current criteria; `filter` maps a
// catalog and a state to the matching devices in catalog order. Both are
// free of any presentation concern.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Device, TagKind};
use crate::store::Catalog;

/// Current filter criteria. `None` means "no filter" for that dimension.
///
/// Mutated only through the named setters so every write goes through the
/// same normalization (blank strings clear the dimension).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    query: String,
    category: Option<String>,
    reset_method: Option<String>,
    connectivity: Option<String>,
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_owned)
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The query as matched: trimmed and lowercased.
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn reset_method(&self) -> Option<&str> {
        self.reset_method.as_deref()
    }

    pub fn connectivity(&self) -> Option<&str> {
        self.connectivity.as_deref()
    }

    /// Selected tag for one tag dimension.
    pub fn tag(&self, kind: TagKind) -> Option<&str> {
        match kind {
            TagKind::ResetMethod => self.reset_method(),
            TagKind::Connectivity => self.connectivity(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_category(&mut self, category: Option<&str>) {
        self.category = non_blank(category);
    }

    pub fn set_reset_method(&mut self, tag: Option<&str>) {
        self.reset_method = non_blank(tag);
    }

    pub fn set_connectivity(&mut self, tag: Option<&str>) {
        self.connectivity = non_blank(tag);
    }

    pub fn set_tag(&mut self, kind: TagKind, tag: Option<&str>) {
        match kind {
            TagKind::ResetMethod => self.set_reset_method(tag),
            TagKind::Connectivity => self.set_connectivity(tag),
        }
    }

    /// Reset every dimension to "no filter".
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no dimension restricts the result.
    pub fn is_unfiltered(&self) -> bool {
        self.query.trim().is_empty()
            && self.category.is_none()
            && self.reset_method.is_none()
            && self.connectivity.is_none()
    }
}

/// Devices of `catalog` matching every predicate of `state`, in catalog
/// order.
pub fn filter(catalog: &Catalog, state: &FilterState) -> Vec<Arc<Device>> {
    let matched: Vec<Arc<Device>> = catalog
        .iter()
        .filter(|device| device.matches(state))
        .cloned()
        .collect();

    debug!(
        total = catalog.len(),
        matched = matched.len(),
        query = state.query(),
        category = ?state.category(),
        reset_method = ?state.reset_method(),
        connectivity = ?state.connectivity(),
        "filter applied"
    );

    matched
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(devices: &[Arc<Device>]) -> Vec<&str> {
        devices.iter().map(|d| d.id.as_str()).collect()
    }

    fn sample() -> Catalog {
        Catalog::from_toml_str(
            r#"
            [[devices]]
            id = "a"
            model = "Alpha Router"
            category = "Roteadores"
            connectivity = ["wifi", "cabo"]
            reset_methods = ["botao"]

            [[devices]]
            id = "b"
            model = "Beta NVR"
            category = "CFTV"
            connectivity = ["poe"]
            reset_methods = ["interface"]
            summary = "Gravador com PoE"

            [[devices]]
            id = "c"
            model = "Gamma"
            category = "Roteadores"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn new_state_is_unfiltered() {
        let state = FilterState::new();
        assert!(state.is_unfiltered());
        assert_eq!(ids(&filter(&sample(), &state)), vec!["a", "b", "c"]);
    }

    #[test]
    fn blank_values_clear_the_dimension() {
        let mut state = FilterState::new();
        state.set_category(Some("Roteadores"));
        state.set_category(Some("  "));
        assert_eq!(state.category(), None);
        state.set_reset_method(Some(""));
        assert_eq!(state.reset_method(), None);
    }

    #[test]
    fn whitespace_query_is_unfiltered() {
        let mut state = FilterState::new();
        state.set_query("   ");
        assert!(state.is_unfiltered());
        assert_eq!(filter(&sample(), &state).len(), 3);
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let mut state = FilterState::new();
        state.set_query("  ALPHA ");
        assert_eq!(ids(&filter(&sample(), &state)), vec!["a"]);
    }

    #[test]
    fn query_matches_summary() {
        let mut state = FilterState::new();
        state.set_query("gravador");
        assert_eq!(ids(&filter(&sample(), &state)), vec!["b"]);
    }

    #[test]
    fn category_is_exact() {
        let mut state = FilterState::new();
        state.set_category(Some("Roteador"));
        assert!(filter(&sample(), &state).is_empty());
        state.set_category(Some("Roteadores"));
        assert_eq!(ids(&filter(&sample(), &state)), vec!["a", "c"]);
    }

    #[test]
    fn tags_use_set_membership() {
        let mut state = FilterState::new();
        state.set_tag(TagKind::Connectivity, Some("cabo"));
        assert_eq!(ids(&filter(&sample(), &state)), vec!["a"]);
        state.set_tag(TagKind::Connectivity, None);
        state.set_tag(TagKind::ResetMethod, Some("interface"));
        assert_eq!(ids(&filter(&sample(), &state)), vec!["b"]);
        assert_eq!(state.tag(TagKind::ResetMethod), Some("interface"));
    }

    #[test]
    fn all_predicates_must_hold() {
        let mut state = FilterState::new();
        state.set_category(Some("Roteadores"));
        state.set_connectivity(Some("poe"));
        assert!(filter(&sample(), &state).is_empty());
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = FilterState::new();
        state.set_query("x");
        state.set_category(Some("CFTV"));
        state.set_reset_method(Some("botao"));
        state.set_connectivity(Some("wifi"));
        state.clear();
        assert_eq!(state, FilterState::new());
    }
}
