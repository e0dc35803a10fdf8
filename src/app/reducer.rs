use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::{AppState, ErrorState, OutputState, SearchPhase, FETCH_ERROR_MESSAGE},
};
use std::sync::Arc;
use std::time::{Duration, Instant};

const STATUS_LINGER: Duration = Duration::from_secs(4);

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    // Feature modules first; the fallthrough below handles system events
    // and async results.
    if let UpdateResult::Handled(cmd) = features::search::update(state, &action) {
        return cmd;
    }
    if let UpdateResult::Handled(cmd) = features::ui::update(state, &action) {
        return cmd;
    }

    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Tick => {
            state.advance_spinner();
            if let Some(t) = state.status_clear_time {
                if t.elapsed() > STATUS_LINGER {
                    state.status_message = None;
                    state.status_clear_time = None;
                }
            }
        }
        Action::Resize(_, _) => {}

        // --- Async Results ---
        Action::ServicesLoaded(services) => {
            state.is_loading_services = false;
            state.status_message = Some(format!("{} services loaded", services.len()));
            state.status_clear_time = Some(Instant::now());
            state.services = Arc::new(*services);
        }
        Action::EntryLoaded(_, record) => {
            // Last-write-wins: whatever is in flight, the response that
            // lands replaces the output pane entirely.
            state.output = OutputState::Entry(*record);
            state.phase = SearchPhase::Result;
        }
        Action::FetchRejected(message) => {
            state.output = OutputState::Failed(message);
            state.phase = SearchPhase::Result;
        }
        Action::FetchFailed(cause) => {
            state.output = OutputState::Failed(FETCH_ERROR_MESSAGE.to_string());
            state.last_error = Some(ErrorState::new(cause));
            state.phase = SearchPhase::Result;
        }
        Action::ErrorOccurred(message) => {
            state.is_loading_services = false;
            state.last_error = Some(ErrorState::new(message));
        }

        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{CredentialRecord, ServiceIndex, ServiceList};

    fn record(name: &str) -> CredentialRecord {
        CredentialRecord {
            service_name: name.to_string(),
            service_url: None,
            username: "user".to_string(),
            password: "hunter2".to_string(),
            comments: None,
        }
    }

    #[test]
    fn entry_response_replaces_the_loading_placeholder() {
        let mut state = AppState::default();
        state.phase = SearchPhase::Loading;
        state.output = OutputState::Loading;

        update(
            &mut state,
            Action::EntryLoaded(ServiceIndex(0), Box::new(record("GitHub"))),
        );

        assert_eq!(state.phase, SearchPhase::Result);
        assert_eq!(state.output, OutputState::Entry(record("GitHub")));
    }

    #[test]
    fn transport_failure_renders_the_generic_message() {
        let mut state = AppState::default();
        state.phase = SearchPhase::Loading;
        state.output = OutputState::Loading;

        update(
            &mut state,
            Action::FetchFailed("connection refused".to_string()),
        );

        assert_eq!(
            state.output,
            OutputState::Failed(FETCH_ERROR_MESSAGE.to_string())
        );
        // The cause stays available in the footer error state.
        assert!(state
            .last_error
            .as_ref()
            .is_some_and(|e| e.message.contains("connection refused")));
    }

    #[test]
    fn server_rejection_is_shown_verbatim() {
        let mut state = AppState::default();
        update(
            &mut state,
            Action::FetchRejected("Session expirée".to_string()),
        );
        assert_eq!(
            state.output,
            OutputState::Failed("Session expirée".to_string())
        );
        assert!(state.last_error.is_none());
    }

    #[test]
    fn late_response_overwrites_newer_content() {
        // A second search superseded the first; the first response still
        // lands and takes the pane. No cancellation, no sequencing.
        let mut state = AppState::default();
        update(
            &mut state,
            Action::EntryLoaded(ServiceIndex(1), Box::new(record("GitLab"))),
        );
        update(
            &mut state,
            Action::EntryLoaded(ServiceIndex(0), Box::new(record("GitHub"))),
        );
        assert_eq!(state.output, OutputState::Entry(record("GitHub")));
    }

    #[test]
    fn loaded_services_become_the_session_list() {
        let mut state = AppState::default();
        let list = ServiceList::new(vec!["GitHub".to_string(), "GitLab".to_string()]);
        update(&mut state, Action::ServicesLoaded(Box::new(list.clone())));

        assert_eq!(*state.services, list);
        assert!(state.status_message.is_some());
    }
}
