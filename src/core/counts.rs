//! Abgeleitete Zähler: Marker pro Subtyp und erledigte Marker pro Subtyp.

use super::catalog::{Catalog, SubtypeKey};
use super::map_data::MarkerInstance;
use indexmap::{IndexMap, IndexSet};

/// Fortschritt „X / N erledigt“.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionProgress {
    pub completed: usize,
    pub total: usize,
}

impl CompletionProgress {
    /// Gibt `true` zurück, wenn alle Marker erledigt sind (und es welche gibt).
    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }
}

/// Anzahl Marker pro Subtyp.
pub fn subtype_counts(markers: &[MarkerInstance]) -> IndexMap<SubtypeKey, usize> {
    let mut counts = IndexMap::new();
    for marker in markers {
        *counts.entry(marker.subtype_key()).or_insert(0) += 1;
    }
    counts
}

/// Anzahl erledigter Marker pro Subtyp.
///
/// Es werden nur Marker gezählt, die in `markers` vorkommen, daher gilt
/// immer `completed_counts[s] <= subtype_counts[s]`.
pub fn completed_counts(
    markers: &[MarkerInstance],
    completed: &IndexSet<String>,
) -> IndexMap<SubtypeKey, usize> {
    let mut counts = IndexMap::new();
    for marker in markers.iter().filter(|m| completed.contains(&m.id)) {
        *counts.entry(marker.subtype_key()).or_insert(0) += 1;
    }
    counts
}

/// Zwischengespeicherte Zähler der aktuellen Karte.
///
/// Wird neu berechnet, sobald sich Marker oder Erledigt-Set ändern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerStats {
    pub subtype_counts: IndexMap<SubtypeKey, usize>,
    pub completed_counts: IndexMap<SubtypeKey, usize>,
}

impl MarkerStats {
    pub fn compute(markers: &[MarkerInstance], completed: &IndexSet<String>) -> Self {
        Self {
            subtype_counts: subtype_counts(markers),
            completed_counts: completed_counts(markers, completed),
        }
    }

    pub fn total(&self, key: &SubtypeKey) -> usize {
        self.subtype_counts.get(key).copied().unwrap_or(0)
    }

    pub fn completed(&self, key: &SubtypeKey) -> usize {
        self.completed_counts.get(key).copied().unwrap_or(0)
    }

    pub fn progress(&self, key: &SubtypeKey) -> CompletionProgress {
        CompletionProgress {
            completed: self.completed(key),
            total: self.total(key),
        }
    }

    /// Fortschritt einer Kategorie über ihre abhakbaren Subtypen.
    pub fn category_progress(&self, catalog: &Catalog, category_id: &str) -> CompletionProgress {
        let Some(category) = catalog.categories.iter().find(|c| c.id == category_id) else {
            return CompletionProgress::default();
        };

        category
            .subtypes
            .iter()
            .filter(|subtype| subtype.can_complete)
            .map(|subtype| self.progress(&category.key_for(subtype)))
            .fold(CompletionProgress::default(), |acc, p| CompletionProgress {
                completed: acc.completed + p.completed,
                total: acc.total + p.total,
            })
    }
}
