//! Sitzungsprotokoll: ausgeführte Commands samt Ergebnis.

use super::{AppCommand, Rejection};

/// Ergebnis eines ausgeführten Commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Ausgeführt (auch wenn sich nichts geändert hat)
    Applied,
    /// Abgelehnt, Zustand unverändert
    Rejected(Rejection),
    /// Invariantenfehler oder I/O-Fehler
    Failed,
}

/// Ein Protokolleintrag.
#[derive(Debug, Clone)]
pub struct CommandEntry {
    pub command: AppCommand,
    pub outcome: CommandOutcome,
    /// Stand der Shape-History nach dem Command (Cursor, Länge)
    pub history_position: (usize, usize),
}

/// Begrenztes Protokoll; bei Überlauf fällt die ältere Hälfte heraus.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<CommandEntry>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Hängt einen Eintrag an.
    ///
    /// DXF-Inhalte werden nicht mitgeschrieben, nur Quelle und Länge.
    pub fn record(
        &mut self,
        command: AppCommand,
        outcome: CommandOutcome,
        history_position: (usize, usize),
    ) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        let command = match command {
            AppCommand::LoadDxfContent {
                source_name,
                content,
            } => AppCommand::LoadDxfContent {
                source_name: format!("{} ({} Bytes)", source_name, content.len()),
                content: String::new(),
            },
            other => other,
        };
        self.entries.push(CommandEntry {
            command,
            outcome,
            history_position,
        });
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Ergebnis des zuletzt ausgeführten Commands.
    pub fn last_outcome(&self) -> Option<CommandOutcome> {
        self.entries.last().map(|e| e.outcome)
    }

    /// Alle abgelehnten Commands mit Grund, älteste zuerst.
    pub fn rejections(&self) -> impl Iterator<Item = (&AppCommand, Rejection)> {
        self.entries.iter().filter_map(|e| match e.outcome {
            CommandOutcome::Rejected(r) => Some((&e.command, r)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_half_when_full() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(AppCommand::Undo, CommandOutcome::Applied, (0, 1));
        }
        log.record(AppCommand::Redo, CommandOutcome::Applied, (1, 2));

        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert!(matches!(
            log.entries().last().map(|e| &e.command),
            Some(AppCommand::Redo)
        ));
    }

    #[test]
    fn rejections_keep_their_reason() {
        let mut log = CommandLog::new();
        log.record(AppCommand::ClearSelection, CommandOutcome::Applied, (0, 1));
        log.record(
            AppCommand::Undo,
            CommandOutcome::Rejected(Rejection::NothingToUndo),
            (0, 1),
        );

        let rejected: Vec<_> = log.rejections().collect();
        assert_eq!(rejected.len(), 1);
        assert!(matches!(rejected[0].0, AppCommand::Undo));
        assert_eq!(rejected[0].1, Rejection::NothingToUndo);
        assert_eq!(
            log.last_outcome(),
            Some(CommandOutcome::Rejected(Rejection::NothingToUndo))
        );
    }

    #[test]
    fn dxf_content_is_not_kept() {
        let mut log = CommandLog::new();
        log.record(
            AppCommand::LoadDxfContent {
                source_name: "plan.dxf".into(),
                content: "0\nEOF\n".into(),
            },
            CommandOutcome::Rejected(Rejection::NoShapesParsed),
            (0, 1),
        );

        match &log.entries()[0].command {
            AppCommand::LoadDxfContent {
                source_name,
                content,
            } => {
                assert_eq!(source_name, "plan.dxf (6 Bytes)");
                assert!(content.is_empty());
            }
            other => panic!("unerwarteter Command: {:?}", other),
        }
    }
}
