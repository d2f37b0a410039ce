// ABOUTME: Marker reference table mapping marker ids to trait names and genotype effects
// ABOUTME: Ships a compiled-in table and accepts a JSON replacement loaded once at start-up
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutreGen Contributors

use nutregen_core::constants::markers::MARKER_ID_PREFIX;
use nutregen_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;
use tracing::{info, warn};

/// Process-wide reference table, set at most once
static MARKER_TABLE: OnceLock<MarkerTable> = OnceLock::new();

/// Reference data for one genetic marker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerRecord {
    /// Marker identifier (e.g. `rs4988235`)
    pub marker_id: String,
    /// Trait associated with the marker
    #[serde(rename = "trait")]
    pub trait_name: String,
    /// Effect label per genotype code (exact, case-sensitive keys)
    #[serde(rename = "genotypes")]
    pub genotype_effects: BTreeMap<String, String>,
}

impl MarkerRecord {
    /// Build a record from static data
    #[must_use]
    pub fn new(marker_id: &str, trait_name: &str, genotype_effects: &[(&str, &str)]) -> Self {
        Self {
            marker_id: marker_id.to_owned(),
            trait_name: trait_name.to_owned(),
            genotype_effects: genotype_effects
                .iter()
                .map(|(genotype, effect)| ((*genotype).to_owned(), (*effect).to_owned()))
                .collect(),
        }
    }

    /// Detected-trait label for a genotype, if the genotype is known
    #[must_use]
    pub fn label_for(&self, genotype: &str) -> Option<String> {
        self.genotype_effects
            .get(genotype)
            .map(|effect| format!("{} ({effect})", self.trait_name))
    }
}

/// On-disk shape of a table entry: `{"trait": ..., "genotypes": {...}}`
#[derive(Debug, Deserialize)]
struct MarkerEntryDocument {
    #[serde(rename = "trait")]
    trait_name: String,
    genotypes: BTreeMap<String, String>,
}

/// Immutable marker id → record lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerTable {
    records: HashMap<String, MarkerRecord>,
}

impl MarkerTable {
    /// Build a table from records; later duplicates replace earlier ones
    #[must_use]
    pub fn new(records: impl IntoIterator<Item = MarkerRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.marker_id.clone(), record))
                .collect(),
        }
    }

    /// Compiled-in reference table
    #[must_use]
    pub fn builtin() -> Self {
        Self::new([
            MarkerRecord::new(
                "rs4988235",
                "Lactase Persistence",
                &[("AA", "persistent"), ("AG", "reduced"), ("GG", "non-persistent")],
            ),
            MarkerRecord::new(
                "rs1801282",
                "High Carb Sensitivity",
                &[("CG", "moderate"), ("GG", "increased")],
            ),
            MarkerRecord::new(
                "rs1799883",
                "Slow Fat Metabolism",
                &[("AG", "moderate"), ("AA", "increased")],
            ),
            MarkerRecord::new(
                "rs9939609",
                "Appetite Regulation",
                &[("AT", "moderate"), ("AA", "reduced satiety")],
            ),
            MarkerRecord::new(
                "rs762551",
                "Caffeine Metabolism",
                &[("AA", "fast"), ("AC", "slow"), ("CC", "slow")],
            ),
            MarkerRecord::new(
                "rs1801133",
                "Folate Metabolism",
                &[("CT", "reduced"), ("TT", "low")],
            ),
        ])
    }

    /// Parse a JSON document keyed by marker id
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` app error if the document is not a valid table
    pub fn from_json(document: &str) -> AppResult<Self> {
        let entries: BTreeMap<String, MarkerEntryDocument> = serde_json::from_str(document)
            .map_err(|e| AppError::config(format!("Invalid marker table: {e}")).with_source(e))?;

        if entries.is_empty() {
            warn!("marker table document contains no markers");
        }

        Ok(Self::new(entries.into_iter().map(|(marker_id, entry)| {
            if !marker_id.starts_with(MARKER_ID_PREFIX) {
                warn!(marker_id = %marker_id, "marker id lacks the rs prefix and can never match");
            }
            MarkerRecord {
                marker_id,
                trait_name: entry.trait_name,
                genotype_effects: entry.genotypes,
            }
        })))
    }

    /// Install the process-wide table
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` app error if a table was already installed or read
    pub fn install(table: Self) -> AppResult<&'static Self> {
        let markers = table.len();
        MARKER_TABLE
            .set(table)
            .map_err(|_| AppError::config("Marker table already loaded"))?;
        info!(markers, "marker reference table installed");
        Self::global_installed()
    }

    fn global_installed() -> AppResult<&'static Self> {
        MARKER_TABLE
            .get()
            .ok_or_else(|| AppError::internal("Marker table missing after install"))
    }

    /// Process-wide table, initialized with the built-in table if none was installed
    pub fn global() -> &'static Self {
        MARKER_TABLE.get_or_init(Self::builtin)
    }

    /// Resolve a marker/genotype pair to its detected-trait label
    #[must_use]
    pub fn lookup(&self, marker_id: &str, genotype: &str) -> Option<String> {
        self.records.get(marker_id)?.label_for(genotype)
    }

    /// Record for a marker id
    #[must_use]
    pub fn get(&self, marker_id: &str) -> Option<&MarkerRecord> {
        self.records.get(marker_id)
    }

    /// Records sorted by marker id
    #[must_use]
    pub fn records(&self) -> Vec<&MarkerRecord> {
        let mut records: Vec<&MarkerRecord> = self.records.values().collect();
        records.sort_by(|a, b| a.marker_id.cmp(&b.marker_id));
        records
    }

    /// Number of markers
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no markers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
