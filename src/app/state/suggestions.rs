use crate::domain::models::Suggestion;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SuggestionsState {
    pub items: Vec<Suggestion>,
    pub selected_index: Option<usize>,
}

impl SuggestionsState {
    pub fn clear(&mut self) {
        self.items.clear();
        self.selected_index = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Suggestion> {
        self.selected_index.and_then(|i| self.items.get(i))
    }
}
