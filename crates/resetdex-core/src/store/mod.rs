// ── Catalog store ──
//
// Immutable, ordered device collection fixed at load time.

mod catalog;

pub use catalog::{BUILTIN_CATALOG, Catalog};
