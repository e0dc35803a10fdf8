use super::keymap::{KeyConfig, KeyMap};
use super::persistence::AppConfig;
use crate::domain::models::{ServiceList, Suggestion};
use std::sync::Arc;
use std::time::Instant;

pub mod error;
pub mod input;
pub mod output;
pub mod suggestions;
pub mod theme;

// Re-exports
pub use error::ErrorState;
pub use input::QueryArea;
pub use output::{OutputState, FETCH_ERROR_MESSAGE, LOADING_MESSAGE};
pub use suggestions::SuggestionsState;
pub use theme::ThemeSelectionState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,         // Typing into the search bar
    Help,           // Showing the help overlay
    ThemeSelection, // Choosing a UI theme
    NoSession,      // No server session configured, showing welcome screen
}

/// The search/render state machine. Orthogonal to `AppMode`: overlays come
/// and go without disturbing an in-flight search.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum SearchPhase {
    #[default]
    Idle, // Empty query
    Suggesting, // Query typed, zero or more suggestions shown
    Loading,    // Fetch in flight, placeholder shown
    Result,     // Response rendered (record or error)
}

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Connectivity & Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub phase: SearchPhase,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>, // "12 services loaded."
    pub status_clear_time: Option<Instant>,

    // --- Vault Data (The "Source of Truth") ---
    // Loaded once at startup; read-only for the rest of the session.
    pub services: Arc<ServiceList>,
    pub is_loading_services: bool,

    // --- Search State ---
    pub query: QueryArea<'a>,
    pub suggestions: SuggestionsState,
    pub output: OutputState,

    // --- Animation ---
    pub frame_count: u64,
    pub spinner: String,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,

    // --- Theme Selection ---
    pub theme_selection: Option<ThemeSelectionState>,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let palette_type = config.theme.unwrap_or_default();
        Self {
            keymap: Arc::new(KeyMap::from_config(
                config.keys.as_ref().unwrap_or(&KeyConfig::default()),
            )),
            palette_type,
            theme: crate::theme::Theme::from_palette_type(palette_type),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn query_text(&self) -> String {
        self.query.text().trim().to_string()
    }

    pub fn set_query(&mut self, text: &str) {
        self.query = QueryArea::default();
        self.query.insert_str(text);
    }

    #[must_use]
    pub fn selected_suggestion(&self) -> Option<&Suggestion> {
        self.suggestions.selected()
    }

    pub fn advance_spinner(&mut self) {
        self.frame_count = self.frame_count.wrapping_add(1);
        let i = (self.frame_count as usize) % SPINNER_FRAMES.len();
        self.spinner = SPINNER_FRAMES[i].to_string();
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            phase: SearchPhase::Idle,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            services: Arc::new(ServiceList::default()),
            is_loading_services: false,
            query: QueryArea::default(),
            suggestions: SuggestionsState::default(),
            output: OutputState::default(),
            frame_count: 0,
            spinner: SPINNER_FRAMES[0].to_string(),
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: crate::theme::PaletteType::default(),
            theme: crate::theme::Theme::from_palette_type(crate::theme::PaletteType::default()),
            theme_selection: None,
        }
    }
}
