use crate::app::state::{OutputState, LOADING_MESSAGE};
use crate::components::sanitize;
use crate::domain::models::CredentialRecord;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct OutputView<'a> {
    pub output: &'a OutputState,
    pub spinner: &'a str,
    pub theme: &'a Theme,
}

impl Widget for OutputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines = match self.output {
            OutputState::Empty => Vec::new(),
            OutputState::Loading => vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!(" {} ", self.spinner), self.theme.loading),
                    Span::styled(LOADING_MESSAGE, self.theme.loading),
                ]),
            ],
            OutputState::Entry(record) => entry_lines(record, self.theme),
            OutputState::Failed(message) => vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!(" {} ", sanitize(message)),
                    self.theme.output_error,
                )),
            ],
        };

        Paragraph::new(lines).render(area, buf);
    }
}

/// One line per present field; absent optional fields produce no line.
fn entry_lines<'a>(record: &CredentialRecord, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", sanitize(&record.service_name)),
            theme.service_name,
        )),
        Line::from(""),
    ];

    if let Some(url) = &record.service_url {
        lines.push(field_line("URL", sanitize(url), theme.url, theme));
    }
    lines.push(field_line(
        "Username",
        sanitize(&record.username),
        theme.field_value,
        theme,
    ));
    lines.push(field_line(
        "Password",
        sanitize(&record.password),
        theme.secret,
        theme,
    ));
    if let Some(comments) = &record.comments {
        lines.push(field_line("Notes", sanitize(comments), theme.notes, theme));
    }

    lines
}

fn field_line<'a>(
    label: &'a str,
    value: String,
    value_style: ratatui::style::Style,
    theme: &Theme,
) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {label:<10}"), theme.field_label),
        Span::styled(value, value_style),
    ])
}
