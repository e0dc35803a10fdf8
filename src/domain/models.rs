use serde::Deserialize;
use std::fmt;

/// Position of a service in the session's [`ServiceList`]. This is the
/// identifier the server expects in fetch requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Default)]
pub struct ServiceIndex(pub usize);

impl fmt::Display for ServiceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered list of the user's service names, loaded once at startup.
/// Immutable for the session; consumers receive it by shared reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceList {
    names: Vec<String>,
}

impl ServiceList {
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: ServiceIndex) -> Option<&str> {
        self.names.get(index.0).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ServiceIndex, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (ServiceIndex(i), name.as_str()))
    }
}

/// A candidate service shown while typing. Carries its index so that
/// selecting it resolves to exactly the same fetch as typing the full name.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub index: ServiceIndex,
    pub name: String,
}

/// One credential record as the server serializes it. Never persisted on
/// the client; replaced wholesale by the next fetch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CredentialRecord {
    pub service_name: String,
    #[serde(default)]
    pub service_url: Option<String>,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub comments: Option<String>,
}

/// Result of a fetch that reached the server: either a record, or a
/// rejection message the server chose to surface (`{"error": ...}`).
/// Transport and protocol failures are `Err` at the client boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Entry(CredentialRecord),
    Rejected(String),
}
