use crate::domain::models::CredentialRecord;

/// Placeholder shown while a fetch is in flight. The upstream application
/// is French; user-facing copy stays in its language.
pub const LOADING_MESSAGE: &str = "Récupération des données...";

/// Generic message for any transport, protocol or decode failure. The only
/// other message ever shown is one the server itself provided.
pub const FETCH_ERROR_MESSAGE: &str = "Erreur lors de la récupération des données";

/// Contents of the output pane. A new value always replaces the old one
/// entirely; there is no merging of partial results.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OutputState {
    #[default]
    Empty,
    Loading,
    Entry(CredentialRecord),
    Failed(String),
}
