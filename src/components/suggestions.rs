use crate::app::state::SuggestionsState;
use crate::components::sanitize;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Widget},
};

pub struct SuggestionList<'a> {
    pub state: &'a SuggestionsState,
    pub theme: &'a Theme,
}

impl Widget for SuggestionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("SUGGESTIONS", self.theme.header_item),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        let items: Vec<ListItem> = self
            .state
            .items
            .iter()
            .enumerate()
            .map(|(i, suggestion)| {
                let selected = self.state.selected_index == Some(i);
                let style = if selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let prefix = if selected { "> " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(sanitize(&suggestion.name), style),
                ]))
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}
