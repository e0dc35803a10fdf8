use crate::app::state::{AppState, SearchPhase};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
}

fn hints(state: &AppState) -> Vec<FooterItem> {
    let mut items = vec![
        FooterItem {
            key: "↑/↓",
            desc: "pick",
        },
        FooterItem {
            key: "Enter",
            desc: "fetch",
        },
        FooterItem {
            key: "Esc",
            desc: "clear",
        },
    ];
    if state.last_error.is_some() {
        // Clearing also dismisses the error; point at it first.
        items.truncate(0);
        items.push(FooterItem {
            key: "Esc",
            desc: "dismiss",
        });
    }
    items.push(FooterItem {
        key: "C-t",
        desc: "theme",
    });
    items.push(FooterItem {
        key: "F1",
        desc: "help",
    });
    items.push(FooterItem {
        key: "C-c",
        desc: "quit",
    });
    items
}

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment
        let status_span = if let Some(err) = &state.last_error {
            Span::styled(
                format!(
                    "  ERROR {}: {}  ",
                    err.timestamp.format("%H:%M:%S"),
                    err.message
                ),
                theme.status_error,
            )
        } else if state.phase == SearchPhase::Loading {
            Span::styled(format!("  {} FETCHING  ", state.spinner), theme.status_info)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        let available_width = area.width.saturating_sub(4);
        let mut current_width = spans
            .iter()
            .map(ratatui::prelude::Span::width)
            .sum::<usize>();

        for item in hints(state) {
            let key_str = format!(" {} ", item.key);
            let desc_str = format!(" {} ", item.desc);

            let item_width = key_str.len() + desc_str.len();
            if current_width + item_width + 1 > available_width as usize {
                break;
            }

            spans.push(Span::styled(key_str, theme.footer_segment_key));
            spans.push(Span::styled(desc_str, theme.footer_segment_val));
            spans.push(Span::raw(" "));
            current_width += item_width + 1;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
