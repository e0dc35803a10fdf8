use crate::app::command::Command;
use crate::domain::models::{CredentialRecord, ServiceIndex, ServiceList};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Search ---
    QueryInput(crossterm::event::KeyEvent), // Keystroke into the search bar
    ClearQuery,                             // ESC: back to idle
    Submit,                                 // Enter: pick highlighted suggestion
    SuggestionNext,                         // Next suggestion
    SuggestionPrev,                         // Previous suggestion
    SelectSuggestion(usize),                // Select suggestion by visible row

    // --- UI Mode Transitions ---
    ToggleHelp,                             // Toggle the help overlay (F1)
    EnterThemeSelection,                    // Open theme selection modal
    SelectThemeNext,                        // Next theme in selection
    SelectThemePrev,                        // Previous theme in selection
    SwitchTheme(crate::theme::PaletteType), // Apply a new theme
    CancelMode,                             // ESC key (close modal/overlay)

    // --- Async Results (The "Callback") ---
    // Dispatched by the background tasks back to the main loop
    ServicesLoaded(Box<ServiceList>),              // Service list arrived
    EntryLoaded(ServiceIndex, Box<CredentialRecord>), // Credential record arrived
    FetchRejected(String),                         // Server answered {"error": ...}
    FetchFailed(String),                           // Transport/protocol failure (cause)
    ErrorOccurred(String),                         // General error reporting
}
