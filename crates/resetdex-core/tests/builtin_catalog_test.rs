//! Properties of the catalog shipped with the binary.
#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use resetdex_core::view::NumberedStep;
use resetdex_core::{Catalog, DetailPanel, FilterState, TagKind, filter};

fn catalog() -> Catalog {
    Catalog::builtin().unwrap()
}

#[test]
fn builtin_catalog_loads() {
    let catalog = catalog();
    assert!(!catalog.is_empty());
    assert_eq!(catalog.len(), catalog.devices().len());
}

#[test]
fn ids_are_pairwise_distinct() {
    let catalog = catalog();
    let ids: HashSet<_> = catalog.iter().map(|d| d.id.to_string()).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn every_device_has_a_model_and_category() {
    for device in catalog().iter() {
        assert!(!device.model.is_empty(), "{} has no model", device.id);
        assert!(!device.category.is_empty(), "{} has no category", device.id);
    }
}

#[test]
fn query_rt_ac_finds_only_the_router() {
    let catalog = catalog();
    let mut state = FilterState::new();
    state.set_query("rt-ac");
    let result = filter(&catalog, &state);
    let ids: Vec<_> = result.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["rt-ac1200"]);
}

#[test]
fn routers_without_poe_yield_nothing() {
    let catalog = catalog();
    let mut state = FilterState::new();
    state.set_category(Some("Roteadores"));
    assert!(!filter(&catalog, &state).is_empty());
    state.set_connectivity(Some("poe"));
    assert!(filter(&catalog, &state).is_empty());
}

#[test]
fn router_detail_panel() {
    let catalog = catalog();
    let router = catalog.get("rt-ac1200").unwrap();
    assert!(router.reset_methods.contains("botao"));
    assert!(router.connectivity.contains("cabo"));

    let panel = DetailPanel::for_device(&router);
    let titles: Vec<_> = panel.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Reset físico (botão)", "Reset via interface"]);

    for section in &panel.sections {
        let numbers: Vec<_> = section.steps.iter().map(|s| s.number).collect();
        let expected: Vec<_> = (1..=section.steps.len()).collect();
        assert_eq!(numbers, expected);
    }
    assert_eq!(
        panel.sections[0].steps[0],
        NumberedStep {
            number: 1,
            text: router.instructions[0].steps[0].clone(),
        }
    );
    assert!(panel.warning.is_some());
    assert_eq!(panel.references.len(), 1);
}

#[test]
fn magnetic_reset_is_rare() {
    let catalog = catalog();
    let mut state = FilterState::new();
    state.set_tag(TagKind::ResetMethod, Some("magnetico"));
    let result = filter(&catalog, &state);
    assert_eq!(result.len(), 1);
    assert!(result[0].reset_methods.contains("magnetico"));
}

#[test]
fn facets_cover_every_device_tag() {
    let catalog = catalog();
    let connectivity: HashSet<_> = catalog.tags(TagKind::Connectivity).into_iter().collect();
    for device in catalog.iter() {
        for tag in &device.connectivity {
            assert!(connectivity.contains(tag.as_str()));
        }
    }
}
