use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    search::{find_matches, MatchOutcome},
    state::{AppState, OutputState, SearchPhase},
};
use crate::domain::models::ServiceIndex;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::QueryInput(key) => {
            state.query.input(*key);
            UpdateResult::Handled(run_search(state))
        }
        Action::ClearQuery => {
            state.query = Default::default();
            state.last_error = None;
            UpdateResult::Handled(run_search(state))
        }
        Action::Submit => {
            // Enter picks the highlighted suggestion, or the sole one if
            // nothing was highlighted yet. An exact match never gets here:
            // run_search has already fired the fetch on the keystroke.
            let picked = state
                .suggestions
                .selected_index
                .or_else(|| (state.suggestions.items.len() == 1).then_some(0));
            match picked {
                Some(i) => UpdateResult::Handled(select_suggestion(state, i)),
                None => UpdateResult::Handled(None),
            }
        }
        Action::SuggestionNext => {
            let len = state.suggestions.items.len();
            if len > 0 {
                state.suggestions.selected_index =
                    Some(state.suggestions.selected_index.map_or(0, |i| (i + 1) % len));
            }
            UpdateResult::Handled(None)
        }
        Action::SuggestionPrev => {
            let len = state.suggestions.items.len();
            if len > 0 {
                state.suggestions.selected_index =
                    Some(match state.suggestions.selected_index {
                        Some(0) | None => len - 1,
                        Some(i) => i - 1,
                    });
            }
            UpdateResult::Handled(None)
        }
        Action::SelectSuggestion(i) => UpdateResult::Handled(select_suggestion(state, *i)),
        _ => UpdateResult::NotHandled,
    }
}

/// Re-derive the search state from the current query. Both panes are
/// cleared before recomputing; a stale result never survives a keystroke.
fn run_search(state: &mut AppState) -> Option<Command> {
    state.suggestions.clear();
    state.output = OutputState::Empty;

    let query = state.query_text();
    if query.is_empty() {
        state.phase = SearchPhase::Idle;
        return None;
    }

    match find_matches(&query, &state.services) {
        MatchOutcome::Exact(index) => start_fetch(state, index),
        MatchOutcome::Suggestions(items) => {
            state.phase = SearchPhase::Suggesting;
            state.suggestions.items = items;
            None
        }
    }
}

fn start_fetch(state: &mut AppState, index: ServiceIndex) -> Option<Command> {
    state.suggestions.clear();
    state.phase = SearchPhase::Loading;
    state.output = OutputState::Loading;
    Some(Command::FetchEntry(index))
}

/// Mirror the browser behavior: selecting writes the full name into the
/// input, then fetches that service. Same command as an exact match.
fn select_suggestion(state: &mut AppState, i: usize) -> Option<Command> {
    let suggestion = state.suggestions.items.get(i)?.clone();
    state.set_query(&suggestion.name);
    start_fetch(state, suggestion.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ServiceList;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Arc;

    fn state_with(names: &[&str]) -> AppState<'static> {
        let mut state = AppState::default();
        state.services = Arc::new(ServiceList::new(
            names.iter().map(|s| (*s).to_string()).collect(),
        ));
        state
    }

    fn type_str(state: &mut AppState, text: &str) -> Option<Command> {
        let mut last = None;
        for c in text.chars() {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty());
            let UpdateResult::Handled(cmd) = update(state, &Action::QueryInput(key)) else {
                panic!("QueryInput not handled");
            };
            last = cmd;
        }
        last
    }

    #[test]
    fn typing_a_prefix_enters_suggesting() {
        let mut state = state_with(&["GitHub", "GitLab", "Google"]);
        let cmd = type_str(&mut state, "g");

        assert_eq!(cmd, None);
        assert_eq!(state.phase, SearchPhase::Suggesting);
        let names: Vec<&str> = state
            .suggestions
            .items
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["GitHub", "GitLab", "Google"]);
        assert_eq!(state.output, OutputState::Empty);
    }

    #[test]
    fn exact_match_fires_exactly_one_fetch() {
        let mut state = state_with(&["Café", "Cafeteria"]);
        let cmd = type_str(&mut state, "café");

        assert_eq!(cmd, Some(Command::FetchEntry(ServiceIndex(0))));
        assert_eq!(state.phase, SearchPhase::Loading);
        assert_eq!(state.output, OutputState::Loading);
        assert!(state.suggestions.items.is_empty());
    }

    #[test]
    fn clearing_the_query_returns_to_idle() {
        let mut state = state_with(&["GitHub"]);
        type_str(&mut state, "git");
        assert_eq!(state.phase, SearchPhase::Suggesting);

        let UpdateResult::Handled(cmd) = update(&mut state, &Action::ClearQuery) else {
            panic!("ClearQuery not handled");
        };
        assert_eq!(cmd, None);
        assert_eq!(state.phase, SearchPhase::Idle);
        assert!(state.suggestions.items.is_empty());
        assert_eq!(state.output, OutputState::Empty);
    }

    #[test]
    fn backspacing_to_empty_returns_to_idle() {
        let mut state = state_with(&["GitHub"]);
        type_str(&mut state, "g");
        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::empty());
        update(&mut state, &Action::QueryInput(backspace));

        assert_eq!(state.phase, SearchPhase::Idle);
        assert!(state.suggestions.items.is_empty());
    }

    #[test]
    fn selecting_a_suggestion_matches_typing_the_full_name() {
        let mut selected = state_with(&["GitHub", "GitLab", "Google"]);
        type_str(&mut selected, "gith");
        // "gith" prefixes only GitHub
        let UpdateResult::Handled(by_click) = update(&mut selected, &Action::SelectSuggestion(0))
        else {
            panic!("SelectSuggestion not handled");
        };

        let mut typed = state_with(&["GitHub", "GitLab", "Google"]);
        let by_typing = type_str(&mut typed, "github");

        assert_eq!(by_click, by_typing);
        assert_eq!(by_click, Some(Command::FetchEntry(ServiceIndex(0))));
        // Selection also writes the full name into the search bar.
        assert_eq!(selected.query_text(), "GitHub");
    }

    #[test]
    fn submit_picks_the_highlighted_suggestion() {
        let mut state = state_with(&["GitHub", "GitLab"]);
        type_str(&mut state, "git");
        update(&mut state, &Action::SuggestionNext);
        update(&mut state, &Action::SuggestionNext);

        let UpdateResult::Handled(cmd) = update(&mut state, &Action::Submit) else {
            panic!("Submit not handled");
        };
        assert_eq!(cmd, Some(Command::FetchEntry(ServiceIndex(1))));
    }

    #[test]
    fn submit_without_highlight_is_inert_unless_unambiguous() {
        let mut state = state_with(&["GitHub", "GitLab"]);
        type_str(&mut state, "git");

        let UpdateResult::Handled(cmd) = update(&mut state, &Action::Submit) else {
            panic!("Submit not handled");
        };
        assert_eq!(cmd, None);

        // A single candidate needs no highlight.
        let mut state = state_with(&["GitHub", "GitLab"]);
        type_str(&mut state, "gith");
        let UpdateResult::Handled(cmd) = update(&mut state, &Action::Submit) else {
            panic!("Submit not handled");
        };
        assert_eq!(cmd, Some(Command::FetchEntry(ServiceIndex(0))));
    }

    #[test]
    fn suggestion_navigation_wraps() {
        let mut state = state_with(&["GitHub", "GitLab"]);
        type_str(&mut state, "git");

        update(&mut state, &Action::SuggestionPrev);
        assert_eq!(state.suggestions.selected_index, Some(1));
        update(&mut state, &Action::SuggestionNext);
        assert_eq!(state.suggestions.selected_index, Some(0));
        update(&mut state, &Action::SuggestionNext);
        assert_eq!(state.suggestions.selected_index, Some(1));
    }

    #[test]
    fn unmatched_query_shows_no_suggestions_and_no_error() {
        let mut state = state_with(&["GitHub"]);
        type_str(&mut state, "zzz");

        assert_eq!(state.phase, SearchPhase::Suggesting);
        assert!(state.suggestions.items.is_empty());
        assert_eq!(state.output, OutputState::Empty);
        assert!(state.last_error.is_none());
    }
}
