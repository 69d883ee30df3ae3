//! Abgleich gespeicherter Schlüsselmengen mit dem aktuell gültigen Schlüsselraum.
//!
//! Derselbe Algorithmus dient Subtyp-Sichtbarkeit, Regions-Sichtbarkeit und
//! erledigten Markern; die Domänen unterscheiden sich nur im Schlüsseltyp und
//! in der [`DefaultPolicy`].

use indexmap::IndexSet;
use std::hash::Hash;
use std::str::FromStr;

/// Was gilt, wenn für die Karte noch nichts gespeichert ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultPolicy {
    /// Alle gültigen Schlüssel (Sichtbarkeit)
    AllValid,
    /// Keine Schlüssel (Erledigt-Status)
    Empty,
}

/// Herkunft eines abgeglichenen Sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileSource {
    Persisted,
    Default,
}

/// Ergebnis von [`reconcile`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled<K: Hash + Eq> {
    /// Abgeglichenes Set, Reihenfolge wie im gültigen Schlüsselraum
    pub keys: IndexSet<K>,
    pub source: ReconcileSource,
    /// Anzahl verworfener gespeicherter Einträge (veraltet oder unlesbar)
    pub dropped: usize,
}

/// Gleicht gespeicherte Einträge gegen `valid` ab.
///
/// - `Some(persisted)`: Schnittmenge mit `valid`; unbekannte oder unlesbare
///   Einträge werden verworfen.
/// - `None`: Standard gemäß `policy`.
pub fn reconcile<K>(
    persisted: Option<&[String]>,
    valid: &IndexSet<K>,
    policy: DefaultPolicy,
) -> Reconciled<K>
where
    K: Hash + Eq + Clone + FromStr,
{
    let Some(persisted) = persisted else {
        let keys = match policy {
            DefaultPolicy::AllValid => valid.clone(),
            DefaultPolicy::Empty => IndexSet::new(),
        };
        return Reconciled {
            keys,
            source: ReconcileSource::Default,
            dropped: 0,
        };
    };

    let parsed: IndexSet<K> = persisted
        .iter()
        .filter_map(|raw| raw.parse::<K>().ok())
        .collect();

    let keys: IndexSet<K> = valid
        .iter()
        .filter(|key| parsed.contains(*key))
        .cloned()
        .collect();

    let unique_persisted: IndexSet<&String> = persisted.iter().collect();
    let dropped = unique_persisted.len().saturating_sub(keys.len());

    Reconciled {
        keys,
        source: ReconcileSource::Persisted,
        dropped,
    }
}

/// Benutzergesteuertes Set über einem gültigen Schlüsselraum.
///
/// Invariante: `active ⊆ valid`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeySet<K: Hash + Eq> {
    valid: IndexSet<K>,
    active: IndexSet<K>,
}

impl<K: Hash + Eq> Default for KeySet<K> {
    fn default() -> Self {
        Self {
            valid: IndexSet::new(),
            active: IndexSet::new(),
        }
    }
}

impl<K> KeySet<K>
where
    K: Hash + Eq + Clone + FromStr + ToString,
{
    /// Erstellt ein Set mit gültigem Schlüsselraum und leerer Auswahl.
    pub fn with_valid(valid: IndexSet<K>) -> Self {
        Self {
            valid,
            active: IndexSet::new(),
        }
    }

    /// Ersetzt den gültigen Schlüsselraum und gleicht die Auswahl neu ab.
    pub fn restore(
        &mut self,
        valid: IndexSet<K>,
        persisted: Option<&[String]>,
        policy: DefaultPolicy,
    ) -> Reconciled<K> {
        let reconciled = reconcile(persisted, &valid, policy);
        self.valid = valid;
        self.active = reconciled.keys.clone();
        reconciled
    }

    /// Kehrt die Zugehörigkeit genau eines Schlüssels um.
    ///
    /// Gibt den neuen Zustand zurück, oder `None` für unbekannte Schlüssel
    /// (dann bleibt das Set unverändert).
    pub fn toggle(&mut self, key: &K) -> Option<bool> {
        if !self.valid.contains(key) {
            return None;
        }
        if self.active.shift_remove(key) {
            Some(false)
        } else {
            self.active.insert(key.clone());
            Some(true)
        }
    }

    /// Aktiviert alle gültigen Schlüssel.
    pub fn select_all(&mut self) {
        self.active = self.valid.clone();
    }

    /// Deaktiviert alle Schlüssel.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Setzt Schlüsselraum und Auswahl zurück.
    pub fn reset(&mut self) {
        self.valid.clear();
        self.active.clear();
    }

    pub fn contains(&self, key: &K) -> bool {
        self.active.contains(key)
    }

    pub fn active(&self) -> &IndexSet<K> {
        &self.active
    }

    pub fn valid(&self) -> &IndexSet<K> {
        &self.valid
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Textform der aktiven Schlüssel für die Persistenz.
    pub fn to_strings(&self) -> Vec<String> {
        self.active.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SubtypeKey;

    fn valid() -> IndexSet<SubtypeKey> {
        ["loot::chest", "loot::urn", "gathering::mining"]
            .iter()
            .map(|s| s.parse().expect("gültiger Schlüssel"))
            .collect()
    }

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_persisted_set_defaults_to_all_valid() {
        let result = reconcile::<SubtypeKey>(None, &valid(), DefaultPolicy::AllValid);
        assert_eq!(result.keys, valid());
        assert_eq!(result.source, ReconcileSource::Default);
    }

    #[test]
    fn test_missing_persisted_set_defaults_to_empty() {
        let result = reconcile::<SubtypeKey>(None, &valid(), DefaultPolicy::Empty);
        assert!(result.keys.is_empty());
    }

    #[test]
    fn test_stale_and_malformed_entries_are_dropped() {
        let persisted = strings(&["loot::urn", "loot::removed", "garbage", "gathering::mining"]);
        let result = reconcile(Some(&persisted), &valid(), DefaultPolicy::AllValid);

        let kept: Vec<String> = result.keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(kept, vec!["loot::urn", "gathering::mining"]);
        assert_eq!(result.dropped, 2);
        assert_eq!(result.source, ReconcileSource::Persisted);
    }

    #[test]
    fn test_empty_persisted_set_stays_empty() {
        let result = reconcile::<SubtypeKey>(Some(&[]), &valid(), DefaultPolicy::AllValid);
        assert!(result.keys.is_empty());
        assert_eq!(result.source, ReconcileSource::Persisted);
    }

    #[test]
    fn test_toggle_twice_restores_original_set() {
        let mut set = KeySet::with_valid(valid());
        set.select_all();
        let before = set.clone();
        let key: SubtypeKey = "loot::urn".parse().expect("Schlüssel");

        assert_eq!(set.toggle(&key), Some(false));
        assert_eq!(set.len(), 2);
        assert_eq!(set.toggle(&key), Some(true));
        assert_eq!(set.active(), before.active());
    }

    #[test]
    fn test_toggle_of_unknown_key_keeps_subset_invariant() {
        let mut set = KeySet::with_valid(valid());
        let unknown: SubtypeKey = "loot::ghost".parse().expect("Schlüssel");
        assert_eq!(set.toggle(&unknown), None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_select_all_and_clear_replace_wholesale() {
        let mut set = KeySet::with_valid(valid());
        set.select_all();
        assert_eq!(set.active(), &valid());
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.valid().len(), 3);
    }

    #[test]
    fn test_restore_replaces_valid_space_and_intersects() {
        let mut set: KeySet<String> = KeySet::default();
        let names: IndexSet<String> = ["North", "South"].iter().map(|s| s.to_string()).collect();
        let persisted = strings(&["South", "West"]);

        let result = set.restore(names, Some(&persisted), DefaultPolicy::AllValid);
        assert_eq!(result.dropped, 1);
        assert_eq!(set.to_strings(), vec!["South"]);
    }
}
