use crate::app::state::{AppMode, AppState, SearchPhase};
use crate::components::footer::Footer;
use crate::components::modals::{HelpModal, ThemeSelectionModal};
use crate::components::output::OutputView;
use crate::components::suggestions::SuggestionList;
use crate::components::welcome::Welcome;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub suggestions: Rect,
    pub output: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect, app_state: &AppState) -> AppLayout {
    let suggestion_rows =
        if app_state.phase == SearchPhase::Suggesting && !app_state.suggestions.items.is_empty() {
            app_state.suggestions.items.len() as u16 + 2
        } else {
            0
        };

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Header
            Constraint::Length(3),               // Search bar
            Constraint::Length(suggestion_rows), // Suggestions
            Constraint::Min(0),                  // Output
            Constraint::Length(1),               // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        search: main[1],
        suggestions: main[2],
        output: main[3],
        footer: main[4],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }
    let theme = app_state.theme.clone();

    if app_state.mode == AppMode::NoSession {
        let welcome = Welcome {
            app_state,
            theme: &theme,
        };
        f.render_widget(welcome, f.area());
        return;
    }

    let layout = get_layout(f.area(), app_state);

    // --- Header ---
    if layout.header.width > 0 && layout.header.height > 0 {
        let stats = if app_state.is_loading_services {
            format!(" {} loading services... ", app_state.spinner)
        } else {
            format!(" {} services ", app_state.services.len())
        };
        let padding = (f.area().width as usize).saturating_sub(stats.len() + 8);
        let header = Paragraph::new(Line::from(vec![
            Span::styled(" COFFRE ", theme.header_logo),
            Span::styled(stats, theme.header_stats),
            Span::styled(" ".repeat(padding), theme.header),
        ]))
        .style(theme.header);
        f.render_widget(header, layout.header);
    }

    // --- Search Bar ---
    if layout.search.width > 0 && layout.search.height > 0 {
        let search_block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("SEARCH", theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focus);

        let inner = search_block.inner(layout.search);
        f.render_widget(search_block, layout.search);
        app_state.query.set_block(Block::default());
        if inner.width > 0 && inner.height > 0 {
            f.render_widget(&app_state.query, inner);
        }
    }

    // --- Suggestions ---
    if layout.suggestions.width > 0 && layout.suggestions.height > 0 {
        let list = SuggestionList {
            state: &app_state.suggestions,
            theme: &theme,
        };
        f.render_widget(list, layout.suggestions);
    }

    // --- Output ---
    if layout.output.width > 0 && layout.output.height > 0 {
        let output_block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("CREDENTIALS", theme.header_item),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border);

        let inner = output_block.inner(layout.output);
        f.render_widget(output_block, layout.output);
        if inner.width > 0 && inner.height > 0 {
            let view = OutputView {
                output: &app_state.output,
                spinner: &app_state.spinner,
                theme: &theme,
            };
            f.render_widget(view, inner);
        }
    }

    // --- Footer ---
    if layout.footer.width > 0 && layout.footer.height > 0 {
        let footer = Footer {
            state: app_state,
            theme: &theme,
        };
        f.render_widget(footer, layout.footer);
    }

    // --- Modals ---
    if app_state.mode == AppMode::Help {
        f.render_widget(HelpModal { theme: &theme }, f.area());
    }
    if let (AppMode::ThemeSelection, Some(selection)) =
        (app_state.mode, &app_state.theme_selection)
    {
        f.render_widget(
            ThemeSelectionModal {
                theme: &theme,
                state: selection,
            },
            f.area(),
        );
    }
}
