// ── Device domain types ──

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::filter::FilterState;

// ── DeviceId ────────────────────────────────────────────────────────

/// Catalog-unique device identifier (e.g. `"rt-ac1200"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for DeviceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for DeviceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ── Supporting records ──────────────────────────────────────────────

/// A titled, ordered list of reset steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionGroup {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

/// A labeled fact about the device, such as its default IP or user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoField {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

/// External documentation link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

impl Reference {
    /// Whether the URL points somewhere. Placeholder links (`#`, empty)
    /// are shown but never opened.
    pub fn is_openable(&self) -> bool {
        let url = self.url.trim();
        !url.is_empty() && !url.starts_with('#')
    }
}

// ── Device ──────────────────────────────────────────────────────────

/// One catalog entry: a piece of hardware and its reset procedures.
///
/// Everything except `id` may be missing from the source data; absent
/// values deserialize to empty ones so renderers never have to guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub connectivity: IndexSet<String>,
    #[serde(default)]
    pub reset_methods: IndexSet<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub instructions: Vec<InstructionGroup>,
    #[serde(default)]
    pub fields: Vec<InfoField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl Device {
    /// Minimal record with only an id; the rest is empty.
    pub fn new(id: impl Into<DeviceId>) -> Self {
        Self {
            id: id.into(),
            manufacturer: String::new(),
            model: String::new(),
            category: String::new(),
            connectivity: IndexSet::new(),
            reset_methods: IndexSet::new(),
            summary: String::new(),
            instructions: Vec::new(),
            fields: Vec::new(),
            notes: None,
            references: Vec::new(),
        }
    }

    /// Lowercased text the free-text query is matched against.
    ///
    /// Only model, category and summary take part; info fields and notes
    /// are not searched.
    pub fn search_haystack(&self) -> String {
        [
            self.model.as_str(),
            self.category.as_str(),
            self.summary.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }

    /// Whether this device passes every predicate of `state`.
    pub fn matches(&self, state: &FilterState) -> bool {
        let query = state.normalized_query();
        let matches_query = query.is_empty() || self.search_haystack().contains(&query);
        let matches_category = state.category().is_none_or(|c| self.category == c);
        let matches_reset = state
            .reset_method()
            .is_none_or(|tag| self.reset_methods.contains(tag));
        let matches_connectivity = state
            .connectivity()
            .is_none_or(|tag| self.connectivity.contains(tag));

        matches_query && matches_category && matches_reset && matches_connectivity
    }

    /// The note text, if present and not blank.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn router() -> Device {
        let mut d = Device::new("rt-ac1200");
        d.model = "RT-AC1200".into();
        d.category = "Roteadores".into();
        d.summary = "Roteador AC1200 dual-band com WPS e QoS.".into();
        d.connectivity = ["wifi", "cabo"].into_iter().map(String::from).collect();
        d.reset_methods = ["botao", "interface", "padrao"]
            .into_iter()
            .map(String::from)
            .collect();
        d
    }

    #[test]
    fn haystack_joins_model_category_summary() {
        let d = router();
        assert_eq!(
            d.search_haystack(),
            "rt-ac1200 roteadores roteador ac1200 dual-band com wps e qos."
        );
    }

    #[test]
    fn haystack_excludes_fields_and_notes() {
        let mut d = router();
        d.notes = Some("segredo".into());
        d.fields.push(InfoField {
            label: "IP padrão".into(),
            value: "192.168.0.1".into(),
        });
        let mut state = FilterState::new();
        state.set_query("segredo");
        assert!(!d.matches(&state));
        state.set_query("192.168.0.1");
        assert!(!d.matches(&state));
    }

    #[test]
    fn empty_tag_sets_never_match_a_selected_tag() {
        let d = Device::new("bare");
        let mut state = FilterState::new();
        assert!(d.matches(&state));
        state.set_connectivity(Some("wifi"));
        assert!(!d.matches(&state));
    }

    #[test]
    fn blank_notes_are_treated_as_absent() {
        let mut d = Device::new("x");
        d.notes = Some("   ".into());
        assert_eq!(d.notes(), None);
        d.notes = Some(" ok ".into());
        assert_eq!(d.notes(), Some("ok"));
    }

    #[test]
    fn placeholder_references_are_not_openable() {
        let hash = Reference {
            label: "Manual".into(),
            url: "#".into(),
        };
        let real = Reference {
            label: "Manual".into(),
            url: "https://example.com/manual.pdf".into(),
        };
        assert!(!hash.is_openable());
        assert!(real.is_openable());
        assert!(!Reference::default().is_openable());
    }

    #[test]
    fn missing_optional_fields_deserialize_empty() {
        let d: Device = toml::from_str(r#"id = "only-id""#).unwrap();
        assert_eq!(d, Device::new("only-id"));
    }
}
