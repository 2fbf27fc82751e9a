//! Data Loading and Management
//!
//! JSON-backed adapters for the two record providers the core consumes:
//! the plant catalog (companion/antagonist records keyed by id) and the
//! seed-sowing calendar (per-crop month-range tokens).
//!
//! Both load a JSON array, index it into an `FxHashMap`, and reject
//! duplicate keys. Lookups are tolerant: unknown ids are skipped, matching
//! the codec's unknown-token policy.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::decode_ranges;
use crate::compatibility::Plant;

/// Errors owned by the catalog layer.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse record JSON")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate record id '{0}'")]
    DuplicateId(String),
}

/// Plant records indexed by id.
#[derive(Debug)]
pub struct PlantCatalog {
    plants: FxHashMap<String, Plant>,
}

impl PlantCatalog {
    /// Build a catalog from a JSON array of plant records.
    ///
    /// Ids are unique; a repeated id is rejected rather than silently
    /// overwritten.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<Plant> = serde_json::from_str(json)?;

        let mut plants = FxHashMap::default();
        for plant in records {
            if plants.contains_key(&plant.id) {
                return Err(CatalogError::DuplicateId(plant.id));
            }
            plants.insert(plant.id.clone(), plant);
        }

        Ok(PlantCatalog { plants })
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path, verbose: bool) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plant catalog: {:?}", path))?;
        let catalog = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse plant catalog: {:?}", path))?;

        if verbose {
            println!("  Plants: {}", catalog.len());
        }

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Plant> {
        self.plants.get(id)
    }

    /// Resolve a selection of ids to full records, preserving request order.
    ///
    /// Unknown ids are skipped silently. Order matters downstream: pair
    /// labels in the compatibility report follow input order.
    pub fn plants_for(&self, ids: &[String]) -> Vec<Plant> {
        ids.iter()
            .filter_map(|id| self.plants.get(id))
            .cloned()
            .collect()
    }
}

/// One crop's sowing/harvest schedule, each field a list of range tokens
/// (`"Apr"`, `"Mar-Jun"`, `"Nov-Feb"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCalendarEntry {
    pub vegetable: String,
    #[serde(default)]
    pub sow_indoors: Vec<String>,
    #[serde(default)]
    pub sow_outdoors: Vec<String>,
    #[serde(default)]
    pub transplant_outdoors: Vec<String>,
    #[serde(default)]
    pub harvest_period: Vec<String>,
}

/// Decoded month sets for one calendar entry, one per activity.
#[derive(Debug, Clone, Default)]
pub struct SeedCalendarMonths {
    pub sow_indoors: FxHashSet<u8>,
    pub sow_outdoors: FxHashSet<u8>,
    pub transplant_outdoors: FxHashSet<u8>,
    pub harvest_period: FxHashSet<u8>,
}

impl SeedCalendarEntry {
    /// Decode all four activity fields independently through the codec.
    pub fn month_sets(&self) -> SeedCalendarMonths {
        SeedCalendarMonths {
            sow_indoors: decode_ranges(&self.sow_indoors),
            sow_outdoors: decode_ranges(&self.sow_outdoors),
            transplant_outdoors: decode_ranges(&self.transplant_outdoors),
            harvest_period: decode_ranges(&self.harvest_period),
        }
    }
}

/// Seed-sowing calendar, entries keyed by crop name (exact match).
#[derive(Debug)]
pub struct SeedCalendar {
    entries: Vec<SeedCalendarEntry>,
    by_name: FxHashMap<String, usize>,
}

impl SeedCalendar {
    /// Build a calendar from a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<SeedCalendarEntry> = serde_json::from_str(json)?;

        let mut by_name = FxHashMap::default();
        for (index, entry) in entries.iter().enumerate() {
            if by_name.insert(entry.vegetable.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(entry.vegetable.clone()));
            }
        }

        Ok(SeedCalendar { entries, by_name })
    }

    /// Load a calendar from a JSON file.
    pub fn load(path: &Path, verbose: bool) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed calendar: {:?}", path))?;
        let calendar = Self::from_json(&contents)
            .with_context(|| format!("Failed to parse seed calendar: {:?}", path))?;

        if verbose {
            println!("  Calendar entries: {}", calendar.entries.len());
        }

        Ok(calendar)
    }

    pub fn get(&self, vegetable: &str) -> Option<&SeedCalendarEntry> {
        self.by_name.get(vegetable).map(|&index| &self.entries[index])
    }

    pub fn entries(&self) -> &[SeedCalendarEntry] {
        &self.entries
    }
}
