// ── Card list ──

use std::sync::Arc;

use crate::model::{Device, DeviceId};

/// Shown instead of cards when nothing matches.
pub const NO_RESULTS_NOTICE: &str = "No results. Adjust the filters or refine your search.";

/// Connectivity text for devices without connectivity tags.
pub const CONNECTIVITY_PLACEHOLDER: &str = "—";

/// Summary card for one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: DeviceId,
    /// Category badge.
    pub badge: String,
    /// Model name.
    pub title: String,
    pub summary: String,
    /// Comma-joined connectivity tags or the placeholder.
    pub connectivity: String,
    device: Arc<Device>,
}

impl Card {
    pub fn new(device: &Arc<Device>) -> Self {
        let connectivity = if device.connectivity.is_empty() {
            CONNECTIVITY_PLACEHOLDER.to_owned()
        } else {
            device
                .connectivity
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };

        Self {
            id: device.id.clone(),
            badge: device.category.clone(),
            title: device.model.clone(),
            summary: device.summary.clone(),
            connectivity,
            device: Arc::clone(device),
        }
    }

    /// The full record behind this card, handed to the detail view when
    /// the card is activated.
    pub fn activate(&self) -> Arc<Device> {
        Arc::clone(&self.device)
    }
}

/// The rendered result region: either an empty-state notice or cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardList {
    Empty { notice: &'static str },
    Cards(Vec<Card>),
}

impl CardList {
    /// Build the region from a filter result. Order is kept as given.
    pub fn build(devices: &[Arc<Device>]) -> Self {
        if devices.is_empty() {
            return Self::Empty {
                notice: NO_RESULTS_NOTICE,
            };
        }
        Self::Cards(devices.iter().map(Card::new).collect())
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Empty { .. } => &[],
            Self::Cards(cards) => cards,
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::Empty { notice } => Some(*notice),
            Self::Cards(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.cards().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards().get(index)
    }
}

impl Default for CardList {
    fn default() -> Self {
        Self::Empty {
            notice: NO_RESULTS_NOTICE,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn device(id: &str, connectivity: &[&str]) -> Arc<Device> {
        let mut d = Device::new(id);
        d.model = format!("Model {id}");
        d.category = "CFTV".into();
        d.summary = "Resumo".into();
        d.connectivity = connectivity.iter().map(|s| (*s).to_owned()).collect();
        Arc::new(d)
    }

    #[test]
    fn empty_input_yields_one_notice_and_no_cards() {
        let list = CardList::build(&[]);
        assert_eq!(list.notice(), Some(NO_RESULTS_NOTICE));
        assert!(list.cards().is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn one_card_per_device_in_order() {
        let list = CardList::build(&[device("b", &[]), device("a", &[])]);
        assert_eq!(list.notice(), None);
        let ids: Vec<_> = list.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn connectivity_is_comma_joined_or_placeholder() {
        let list = CardList::build(&[device("a", &["wifi", "cabo"]), device("b", &[])]);
        assert_eq!(list.get(0).unwrap().connectivity, "wifi, cabo");
        assert_eq!(list.get(1).unwrap().connectivity, CONNECTIVITY_PLACEHOLDER);
    }

    #[test]
    fn card_shows_badge_title_summary() {
        let card = Card::new(&device("a", &[]));
        assert_eq!(card.badge, "CFTV");
        assert_eq!(card.title, "Model a");
        assert_eq!(card.summary, "Resumo");
    }

    #[test]
    fn activation_hands_off_the_full_record() {
        let source = device("a", &["poe"]);
        let card = Card::new(&source);
        let handed = card.activate();
        assert!(Arc::ptr_eq(&handed, &source));
    }
}
