use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, ThemeSelectionState},
};
use crate::theme::Theme;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::EnterThemeSelection => {
            state.mode = AppMode::ThemeSelection;
            let mut selection = ThemeSelectionState::default();
            selection.selected_index = selection
                .themes
                .iter()
                .position(|t| *t == state.palette_type)
                .unwrap_or(0);
            state.theme_selection = Some(selection);
            UpdateResult::Handled(None)
        }
        Action::SelectThemeNext => {
            if let Some(ts) = &mut state.theme_selection {
                ts.selected_index = (ts.selected_index + 1) % ts.themes.len();
            }
            UpdateResult::Handled(None)
        }
        Action::SelectThemePrev => {
            if let Some(ts) = &mut state.theme_selection {
                if ts.selected_index == 0 {
                    ts.selected_index = ts.themes.len() - 1;
                } else {
                    ts.selected_index -= 1;
                }
            }
            UpdateResult::Handled(None)
        }
        Action::SwitchTheme(palette) => {
            state.palette_type = *palette;
            state.theme = Theme::from_palette_type(*palette);
            state.mode = AppMode::Normal;
            state.theme_selection = None;
            crate::app::persistence::save_theme(*palette);
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            if state.mode != AppMode::NoSession {
                state.mode = AppMode::Normal;
            }
            state.theme_selection = None;
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_toggles_both_ways() {
        let mut state = AppState::default();
        update(&mut state, &Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Help);
        update(&mut state, &Action::ToggleHelp);
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn theme_selection_starts_on_the_active_palette() {
        let mut state = AppState::default();
        state.palette_type = crate::theme::PaletteType::Nord;
        update(&mut state, &Action::EnterThemeSelection);

        let selection = state.theme_selection.as_ref().unwrap();
        assert_eq!(
            selection.themes[selection.selected_index],
            crate::theme::PaletteType::Nord
        );
    }

    #[test]
    fn cancel_clears_overlays_and_errors() {
        let mut state = AppState::default();
        state.mode = AppMode::ThemeSelection;
        state.theme_selection = Some(ThemeSelectionState::default());
        state.last_error = Some(crate::app::state::ErrorState::new("boom"));

        update(&mut state, &Action::CancelMode);
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.theme_selection.is_none());
        assert!(state.last_error.is_none());
    }
}
