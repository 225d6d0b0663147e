// ── Detail panel ──

use serde::Serialize;

use crate::model::{Device, DeviceId, Reference};

pub const NOTES_HEADING: &str = "Notes";
pub const REFERENCES_HEADING: &str = "References";

/// A step with its 1-based display number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedStep {
    pub number: usize,
    pub text: String,
}

/// One instruction group: heading plus numbered steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSection {
    pub title: String,
    pub steps: Vec<NumberedStep>,
}

/// Everything the detail surface shows for a single device.
///
/// Empty sections are represented by empty collections / `None` so
/// adapters can omit them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPanel {
    pub device_id: DeviceId,
    pub title: String,
    /// "manufacturer · category", whichever parts are present.
    pub subtitle: Option<String>,
    /// Info chips rendered as `"label: value"`.
    pub chips: Vec<String>,
    pub sections: Vec<StepSection>,
    pub warning: Option<String>,
    pub references: Vec<Reference>,
}

impl DetailPanel {
    pub fn for_device(device: &Device) -> Self {
        let subtitle_parts: Vec<&str> = [device.manufacturer.as_str(), device.category.as_str()]
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let subtitle = (!subtitle_parts.is_empty()).then(|| subtitle_parts.join(" · "));

        let chips = device
            .fields
            .iter()
            .map(|f| format!("{}: {}", f.label, f.value))
            .collect();

        let sections = device
            .instructions
            .iter()
            .map(|group| StepSection {
                title: group.title.clone(),
                steps: group
                    .steps
                    .iter()
                    .enumerate()
                    .map(|(i, text)| NumberedStep {
                        number: i + 1,
                        text: text.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            device_id: device.id.clone(),
            title: device.model.clone(),
            subtitle,
            chips,
            sections,
            warning: device.notes().map(str::to_owned),
            references: device.references.clone(),
        }
    }

    /// Total number of steps across all sections.
    pub fn step_count(&self) -> usize {
        self.sections.iter().map(|s| s.steps.len()).sum()
    }

    /// Reference by 1-based display number.
    pub fn reference(&self, number: usize) -> Option<&Reference> {
        number
            .checked_sub(1)
            .and_then(|index| self.references.get(index))
    }
}
