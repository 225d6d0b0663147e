// ── View models ──
//
// Display-ready projections of devices. Presentation adapters (CLI
// tables, TUI widgets) draw these and never reach back into the filter
// engine; rebuilding a view model always starts from scratch.

mod card;
mod detail;

pub use card::{CONNECTIVITY_PLACEHOLDER, Card, CardList, NO_RESULTS_NOTICE};
pub use detail::{DetailPanel, NOTES_HEADING, NumberedStep, REFERENCES_HEADING, StepSection};
