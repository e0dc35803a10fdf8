pub mod footer;
pub mod modals;
pub mod output;
pub mod suggestions;
pub mod welcome;

/// Strip control characters from server-supplied text before it reaches
/// the terminal. The terminal interprets escape sequences the way a
/// browser interprets markup; values must render as inert text.
#[must_use]
pub fn sanitize(value: &str) -> String {
    value.chars().filter(|c| !c.is_control()).collect()
}
