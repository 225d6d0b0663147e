// ── Immutable device catalog ──
//
// Ordered storage with O(1) id lookups. The collection is built once and
// shared behind an `Arc`; clones are cheap and nothing mutates it.

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CoreError;
use crate::model::{Device, DeviceId, TagKind};

/// TOML source of the catalog compiled into every binary.
pub const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

/// On-disk shape of a catalog document (TOML or JSON).
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    devices: Vec<Device>,
}

/// Read-only, ordered collection of devices.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Arc<IndexMap<DeviceId, Arc<Device>>>,
}

impl Catalog {
    /// Build a catalog from devices in display order.
    ///
    /// Fails on the first repeated id.
    pub fn from_devices(devices: impl IntoIterator<Item = Device>) -> Result<Self, CoreError> {
        Self::collect(devices, "<devices>")
    }

    fn collect(devices: impl IntoIterator<Item = Device>, name: &str) -> Result<Self, CoreError> {
        let mut entries = IndexMap::new();
        for device in devices {
            match entries.entry(device.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(CoreError::DuplicateId {
                        source_name: name.into(),
                        id: device.id.to_string(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(Arc::new(device));
                }
            }
        }
        Ok(Self {
            entries: Arc::new(entries),
        })
    }

    /// The catalog shipped with the binary.
    pub fn builtin() -> Result<Self, CoreError> {
        let catalog = Self::parse_toml(BUILTIN_CATALOG, "built-in")?;
        debug!(devices = catalog.len(), "loaded built-in catalog");
        Ok(catalog)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, CoreError> {
        Self::parse_toml(source, "<string>")
    }

    pub fn from_json_str(source: &str) -> Result<Self, CoreError> {
        Self::parse_json(source, "<string>")
    }

    /// Load a catalog file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path.display().to_string();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::parse_json(&contents, &name)?
        } else {
            Self::parse_toml(&contents, &name)?
        };
        info!(path = %name, devices = catalog.len(), "loaded catalog file");
        Ok(catalog)
    }

    fn parse_toml(source: &str, name: &str) -> Result<Self, CoreError> {
        let file: CatalogFile = toml::from_str(source).map_err(|e| CoreError::Parse {
            source_name: name.into(),
            message: e.to_string(),
        })?;
        Self::collect(file.devices, name)
    }

    fn parse_json(source: &str, name: &str) -> Result<Self, CoreError> {
        let file: CatalogFile = serde_json::from_str(source).map_err(|e| CoreError::Parse {
            source_name: name.into(),
            message: e.to_string(),
        })?;
        Self::collect(file.devices, name)
    }

    /// Serialize back to the TOML document format.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        let file = CatalogFile {
            devices: self.iter().map(|d| (**d).clone()).collect(),
        };
        toml::to_string_pretty(&file)
    }

    // ── Lookups ──────────────────────────────────────────────────────

    pub fn get(&self, id: &str) -> Option<Arc<Device>> {
        self.entries.get(id).cloned()
    }

    /// Like [`get`](Self::get) but with a typed error for callers that
    /// report missing ids.
    pub fn require(&self, id: &str) -> Result<Arc<Device>, CoreError> {
        self.get(id)
            .ok_or_else(|| CoreError::DeviceNotFound { id: id.into() })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Device>> {
        self.entries.values()
    }

    /// All devices in catalog order.
    pub fn devices(&self) -> Vec<Arc<Device>> {
        self.entries.values().cloned().collect()
    }

    // ── Facets ───────────────────────────────────────────────────────

    /// Distinct non-empty categories, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        self.category_counts().into_keys().collect()
    }

    /// Distinct tags of one kind, in first-seen order.
    pub fn tags(&self, kind: TagKind) -> Vec<&str> {
        self.tag_counts(kind).into_keys().collect()
    }

    /// Number of devices per category, in first-seen order.
    pub fn category_counts(&self) -> IndexMap<&str, usize> {
        let mut counts = IndexMap::new();
        for device in self.iter() {
            let category = device.category.as_str();
            if !category.trim().is_empty() {
                *counts.entry(category).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Number of devices carrying each tag, in first-seen order.
    pub fn tag_counts(&self, kind: TagKind) -> IndexMap<&str, usize> {
        let mut counts = IndexMap::new();
        for device in self.iter() {
            let tags = match kind {
                TagKind::ResetMethod => &device.reset_methods,
                TagKind::Connectivity => &device.connectivity,
            };
            for tag in tags {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
        counts
    }
}
