//! Verlauf der ausgeführten Commands des Viewers.
//!
//! Der Controller trägt jeden Command vor der Ausführung ein, auch wenn er
//! anschließend fehlschlägt. So lässt sich nachvollziehen, bis zu welchem
//! Schritt ein Intent (z.B. eine Kartenwahl) gekommen ist und ob eine
//! Nutzeraktion überhaupt einen Command ausgelöst hat. Ladeergebnisse werden
//! als `Arc` mitgeführt, das Eintragen kopiert keine Kartendaten.

use super::AppCommand;

/// Begrenzter Verlauf; bei Überlauf fällt die ältere Hälfte weg.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Trägt einen Command ein.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        log::trace!("Command: {:?}", command);
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt eingetragener Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Alle Einträge, älteste zuerst.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}
