//! Catalog, filter engine, and view models shared by the resetdex CLI and
//! TUI.
//!
//! - **[`Catalog`]**: Immutable, ordered device store loaded once at
//!   startup, either from the built-in TOML table
//!   ([`Catalog::builtin`]) or a user-supplied file ([`Catalog::load`]).
//!   Duplicate ids are rejected at load time.
//!
//! - **[`FilterState`]** / **[`filter`]**: The user's criteria (free-text
//!   query, category, reset method, connectivity) and the pure function
//!   that maps a catalog plus a state to the matching devices in catalog
//!   order.
//!
//! - **Controls** ([`controls`]): Single-selection [`ChipGroup`]s and the
//!   [`CategorySelector`], each owning one dimension of the state.
//!
//! - **View models** ([`view`]): [`CardList`] for the result region and
//!   [`DetailPanel`] for a selected device. Presentation adapters draw
//!   these without touching the filter engine.

pub mod controls;
pub mod error;
pub mod filter;
pub mod model;
pub mod store;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use controls::{ALL_LABEL, CategorySelector, Chip, ChipGroup};
pub use error::CoreError;
pub use filter::{FilterState, filter};
pub use model::{
    Device, DeviceId, InfoField, InstructionGroup, Reference, TagKind, tag_label,
};
pub use store::{BUILTIN_CATALOG, Catalog};
pub use view::{CardList, DetailPanel};
