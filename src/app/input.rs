use crate::app::{action::Action, state::AppState, ui};
use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::Size;

/// Map a click row inside the suggestions pane to a suggestion index.
pub fn resolve_clicked_suggestion(
    app_state: &AppState<'_>,
    clicked_row: usize,
) -> Option<usize> {
    (clicked_row < app_state.suggestions.items.len()).then_some(clicked_row)
}

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
        // Ctrl+C quits from every mode, overlays included.
        if key.code == KeyCode::Char('c')
            && key.modifiers.contains(crossterm::event::KeyModifiers::CONTROL)
        {
            return Some(Action::Quit);
        }
    }

    match app_state.mode {
        crate::app::state::AppMode::NoSession => match event {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        },
        crate::app::state::AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(1) => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        crate::app::state::AppMode::ThemeSelection => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectThemeNext),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectThemePrev),
                KeyCode::Enter => app_state.theme_selection.as_ref().and_then(|ts| {
                    ts.themes
                        .get(ts.selected_index)
                        .map(|palette| Action::SwitchTheme(*palette))
                }),
                _ => None,
            },
            _ => None,
        },
        crate::app::state::AppMode::Normal => match event {
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            Event::Key(key) => {
                if let Some(action) = app_state.keymap.get_action(key) {
                    return Some(action);
                }
                // Everything unbound falls through to the search bar.
                Some(Action::QueryInput(key))
            }
            Event::Mouse(mouse) => {
                let area =
                    ratatui::layout::Rect::new(0, 0, terminal_size.width, terminal_size.height);
                let layout = ui::get_layout(area, app_state);
                let suggestions_area = layout.suggestions;

                match mouse.kind {
                    MouseEventKind::ScrollUp => Some(Action::SuggestionPrev),
                    MouseEventKind::ScrollDown => Some(Action::SuggestionNext),
                    MouseEventKind::Down(MouseButton::Left) => {
                        if suggestions_area.height >= 2
                            && mouse.column > suggestions_area.x
                            && mouse.column < suggestions_area.x + suggestions_area.width - 1
                            && mouse.row > suggestions_area.y
                            && mouse.row < suggestions_area.y + suggestions_area.height - 1
                        {
                            // Adjust for the border: content starts at y+1
                            let clicked_row = (mouse.row - (suggestions_area.y + 1)) as usize;
                            resolve_clicked_suggestion(app_state, clicked_row)
                                .map(Action::SelectSuggestion)
                        } else {
                            None
                        }
                    }
                    _ => None,
                }
            }
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{AppMode, SearchPhase};
    use crate::domain::models::{ServiceIndex, Suggestion};
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};

    fn suggesting_state() -> AppState<'static> {
        let mut state = AppState::default();
        state.phase = SearchPhase::Suggesting;
        state.suggestions.items = vec![
            Suggestion {
                index: ServiceIndex(0),
                name: "GitHub".to_string(),
            },
            Suggestion {
                index: ServiceIndex(2),
                name: "Google".to_string(),
            },
        ];
        state
    }

    #[test]
    fn printable_keys_reach_the_query() {
        let state = AppState::default();
        let key = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty());
        let action = map_event_to_action(Event::Key(key), &state, Size::new(80, 24));
        assert_eq!(action, Some(Action::QueryInput(key)));
    }

    #[test]
    fn ctrl_c_quits_instead_of_typing() {
        let state = AppState::default();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let action = map_event_to_action(Event::Key(key), &state, Size::new(80, 24));
        assert_eq!(action, Some(Action::Quit));
    }

    #[test]
    fn clicking_a_suggestion_row_selects_it() {
        let state = suggesting_state();
        // Layout: header row 0, search rows 1-3, suggestions start at row 4;
        // row 5 is the first item inside the border.
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 6,
            modifiers: KeyModifiers::empty(),
        };
        let action = map_event_to_action(Event::Mouse(mouse), &state, Size::new(80, 24));
        assert_eq!(action, Some(Action::SelectSuggestion(1)));
    }

    #[test]
    fn clicks_outside_the_list_are_ignored() {
        let state = suggesting_state();
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row: 20,
            modifiers: KeyModifiers::empty(),
        };
        let action = map_event_to_action(Event::Mouse(mouse), &state, Size::new(80, 24));
        assert_eq!(action, None);
    }

    #[test]
    fn welcome_screen_only_quits() {
        let mut state = AppState::default();
        state.mode = AppMode::NoSession;
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        assert_eq!(
            map_event_to_action(Event::Key(q), &state, Size::new(80, 24)),
            Some(Action::Quit)
        );
        let g = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::empty());
        assert_eq!(
            map_event_to_action(Event::Key(g), &state, Size::new(80, 24)),
            None
        );
    }
}
