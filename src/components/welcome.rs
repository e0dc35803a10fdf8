use crate::app::state::AppState;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Welcome<'a> {
    pub app_state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Welcome<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let logo_ascii = [
            r"  ___ ___  ___ ___ ___ ___ ",
            r" / __/ _ \| __| __| _ \ __|",
            r"| (_| (_) | _|| _||   / _| ",
            r" \___\___/|_| |_| |_|_\___|",
        ];

        let mut lines: Vec<Line> = logo_ascii
            .iter()
            .map(|l| Line::from(Span::styled(*l, self.theme.header_logo)))
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" COFFRE ", self.theme.header_logo),
            Span::raw(" - password vault finder"),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No server session configured.",
            self.theme.status_error,
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Set "),
            Span::styled("server_url", self.theme.footer_segment_key),
            Span::raw(" and "),
            Span::styled("cookies", self.theme.footer_segment_key),
            Span::raw(" in ~/.config/coffre/config.toml,"),
        ]));
        lines.push(Line::from(vec![
            Span::raw("or export "),
            Span::styled("COFFRE_SERVER_URL", self.theme.footer_segment_key),
            Span::raw(" and "),
            Span::styled("COFFRE_COOKIES", self.theme.footer_segment_key),
        ]));
        lines.push(Line::from(vec![Span::styled(
            " (copy the cookie header from a logged-in browser tab) ",
            self.theme.header_item,
        )]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled("q", self.theme.footer_segment_key),
            Span::raw(" or "),
            Span::styled("Esc", self.theme.footer_segment_key),
            Span::raw(" to quit"),
        ]));

        if let Some(err) = &self.app_state.last_error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Error: {}", err.message),
                self.theme.status_error,
            )));
        }

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);

        let logo_height = 16;
        let centered_area = Rect {
            x: area.x,
            y: (area.y + area.height / 2).saturating_sub(logo_height / 2),
            width: area.width,
            height: logo_height.min(area.height),
        };

        if centered_area.width > 0 && centered_area.height > 0 {
            paragraph.render(centered_area, buf);
        }
    }
}
