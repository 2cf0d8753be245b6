use crate::app::Rejection;

/// UI-bezogener Zustand (Hinweise an den Aufrufer)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Zuletzt abgelehnte Aktion des aktuellen Intents
    pub last_rejection: Option<Rejection>,
    /// Temporäre Statusnachricht (z.B. nach einem Import)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
