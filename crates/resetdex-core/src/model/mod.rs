// ── Catalog domain model ──
//
// Typed records for catalog entries. Optional source fields default to
// empty values at deserialization time; nothing downstream has to
// tolerate missing keys ad hoc.

pub mod device;
pub mod tags;

pub use device::{Device, DeviceId, InfoField, InstructionGroup, Reference};
pub use tags::{TagKind, tag_label};
