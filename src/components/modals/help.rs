use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(60, 70, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let rows = vec![
            Row::new(vec![
                Cell::from(Span::styled("Search", category_style)),
                Cell::from(""),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" any text", key_style)),
                Cell::from(Span::styled("Filter services as you type", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" ↑ / ↓", key_style)),
                Cell::from(Span::styled("Move the suggestion highlight", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" Tab", key_style)),
                Cell::from(Span::styled("Next suggestion", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" Enter", key_style)),
                Cell::from(Span::styled("Fetch the highlighted service", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" Esc", key_style)),
                Cell::from(Span::styled("Clear the query / dismiss errors", desc_style)),
            ]),
            Row::new(vec![Cell::from(""), Cell::from("")]),
            Row::new(vec![
                Cell::from(Span::styled("General", category_style)),
                Cell::from(""),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" Ctrl+t", key_style)),
                Cell::from(Span::styled("Choose a theme", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" F1", key_style)),
                Cell::from(Span::styled("Show this help", desc_style)),
            ]),
            Row::new(vec![
                Cell::from(Span::styled(" Ctrl+c", key_style)),
                Cell::from(Span::styled("Quit", desc_style)),
            ]),
        ];

        let table = Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
            .block(block);

        table.render(modal_area, buf);
    }
}
