// ── Filter controls ──
//
// Presentation-neutral models of the widgets that write `FilterState`:
// a single-selection chip group per tag dimension and a category
// selector. Each control owns exactly one dimension.

use crate::filter::FilterState;
use crate::model::{TagKind, tag_label};
use crate::store::Catalog;

/// Label of the leading "no filter" option.
pub const ALL_LABEL: &str = "All";

/// One toggle in a chip group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub label: String,
    /// Tag written to the filter state, `None` for the "All" chip.
    pub value: Option<String>,
}

impl Chip {
    pub fn all() -> Self {
        Self {
            label: ALL_LABEL.into(),
            value: None,
        }
    }

    pub fn tag(tag: &str) -> Self {
        Self {
            label: tag_label(tag).to_owned(),
            value: Some(tag.to_owned()),
        }
    }
}

/// Mutually exclusive chips. Exactly one chip is active at all times;
/// the first chip is active after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipGroup {
    kind: TagKind,
    chips: Vec<Chip>,
    active: usize,
}

impl ChipGroup {
    /// Group with an "All" chip followed by `chips`.
    pub fn new(kind: TagKind, chips: impl IntoIterator<Item = Chip>) -> Self {
        let chips = std::iter::once(Chip::all()).chain(chips).collect();
        Self {
            kind,
            chips,
            active: 0,
        }
    }

    /// Group listing every tag of `kind` present in the catalog.
    pub fn for_catalog(catalog: &Catalog, kind: TagKind) -> Self {
        Self::new(kind, catalog.tags(kind).into_iter().map(Chip::tag))
    }

    pub fn kind(&self) -> TagKind {
        self.kind
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&Chip> {
        self.chips.get(self.active)
    }

    /// Tag of the active chip (`None` when "All" is active).
    pub fn value(&self) -> Option<&str> {
        self.active().and_then(|chip| chip.value.as_deref())
    }

    /// Activate chip `index`, deactivating its siblings. Out-of-range
    /// indices are ignored. Returns whether the active chip changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.chips.len() || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    /// Activate the chip carrying `tag` (`None` selects "All").
    pub fn select_value(&mut self, tag: Option<&str>) -> bool {
        match self.chips.iter().position(|c| c.value.as_deref() == tag) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Move to the next chip, wrapping around.
    pub fn next(&mut self) -> bool {
        if self.chips.is_empty() {
            return false;
        }
        self.select((self.active + 1) % self.chips.len())
    }

    /// Move to the previous chip, wrapping around.
    pub fn prev(&mut self) -> bool {
        if self.chips.is_empty() {
            return false;
        }
        let len = self.chips.len();
        self.select((self.active + len - 1) % len)
    }

    /// Write the active chip's tag into the dimension this group owns.
    pub fn apply(&self, state: &mut FilterState) {
        state.set_tag(self.kind, self.value());
    }
}

/// Dropdown over the catalog's categories plus a leading "all" entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelector {
    options: Vec<String>,
    /// 0 = all categories; `n` = `options[n - 1]`.
    selected: usize,
}

impl CategorySelector {
    pub fn new(categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            options: categories.into_iter().map(Into::into).collect(),
            selected: 0,
        }
    }

    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.categories())
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Selected category, `None` for "all".
    pub fn value(&self) -> Option<&str> {
        self.selected
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    /// Display label of the current selection.
    pub fn label(&self) -> &str {
        self.value().unwrap_or(ALL_LABEL)
    }

    /// Select a category by name (`None` = all). Unknown names are
    /// ignored. Returns whether the selection changed.
    pub fn select(&mut self, category: Option<&str>) -> bool {
        let target = match category {
            None => 0,
            Some(name) => match self.options.iter().position(|o| o == name) {
                Some(i) => i + 1,
                None => return false,
            },
        };
        let changed = target != self.selected;
        self.selected = target;
        changed
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % (self.options.len() + 1);
    }

    pub fn prev(&mut self) {
        let len = self.options.len() + 1;
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn apply(&self, state: &mut FilterState) {
        state.set_category(self.value());
    }
}
