//! Drawing the terminal UI.

use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
    Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    Wrap,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Notice, NoticeKind};
use crate::form::{FormField, visible_window};
use crate::strategy::StrategyKind;
use crate::templates::{APP_TITLE, PHILOSOPHY};

pub const GREEN: Color = Color::Rgb(0, 255, 65); // #00ff41
pub const BACKGROUND: Color = Color::Rgb(15, 15, 35); // #0f0f23
pub const PANEL: Color = Color::Rgb(26, 26, 46); // #1a1a2e
pub const DIM: Color = Color::Rgb(0, 140, 36);
pub const RED: Color = Color::Rgb(255, 85, 85);

pub const OUTPUT_TITLE: &str = "🎭 Stratégie Fake-to-Real:";

const PHASE_LABEL: &str = "🚀 Phase:   ";
const PROJECT_LABEL: &str = "📱 Project: ";
const CONCEPT_LABEL: &str = "💭 Concept: ";

/// Action buttons with their function key and letter shortcut.
const ACTION_BUTTONS: [(&str, &str); 4] = [
    ("F6/c", "📋 Copy Strategy"),
    ("F7/x", "🔄 Clear"),
    ("F8/s", "💾 Save Plan"),
    ("F9/e", "⚡ Execute"),
];

/// Contract a path by replacing the home directory with `~` for display.
pub fn contract_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(suffix) = path.strip_prefix(&home)
    {
        return format!("~/{}", suffix.display());
    }
    path.display().to_string()
}

/// Calculate a centered rectangle within the given area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(GREEN)
    } else {
        Style::default().fg(DIM)
    }
}

fn selector_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let value_style = if focused {
        Style::default()
            .fg(BACKGROUND)
            .bg(GREEN)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(GREEN).bg(PANEL)
    };
    Line::from(vec![
        Span::styled(label, Style::default().fg(GREEN)),
        Span::styled(format!("◀ {} ▶", value), value_style),
    ])
}

/// Strategy button row. The strategy currently displayed is highlighted.
pub fn strategy_buttons(active: Option<StrategyKind>) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, kind) in StrategyKind::ALL.iter().enumerate() {
        let style = if active == Some(*kind) {
            Style::default()
                .fg(BACKGROUND)
                .bg(GREEN)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(GREEN).bg(PANEL)
        };
        spans.push(Span::styled(format!("[F{}] ", i + 1), Style::default().fg(DIM)));
        spans.push(Span::styled(format!(" {} ", kind.label()), style));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

pub fn action_buttons() -> Line<'static> {
    let mut spans = Vec::new();
    for (keys, label) in ACTION_BUTTONS {
        spans.push(Span::styled(format!("[{}] ", keys), Style::default().fg(DIM)));
        spans.push(Span::styled(
            format!(" {} ", label),
            Style::default().fg(GREEN).bg(PANEL),
        ));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

fn status_line(app: &App) -> Line<'static> {
    let mut spans = vec![
        Span::styled("Session: ", Style::default().fg(DIM)),
        Span::styled(
            app.session.session_id.clone().unwrap_or_else(|| "---".to_string()),
            Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
    ];

    if let Some(ref error) = app.session.logging_error {
        spans.push(Span::styled("⚠ ", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(error.clone(), Style::default().fg(Color::Yellow)));
    } else if let Some(ref log_dir) = app.session.log_directory {
        spans.push(Span::styled("Logs: ", Style::default().fg(DIM)));
        spans.push(Span::styled(contract_path(log_dir), Style::default().fg(DIM)));
    } else {
        spans.push(Span::styled("Logs: ---", Style::default().fg(DIM)));
    }

    spans.push(Span::styled(
        "    [Tab] Focus  [q] Quit",
        Style::default().fg(DIM),
    ));
    Line::from(spans)
}

/// Popup size for a notice: wide enough for its longest line, plus borders and the hint row.
pub fn notice_size(notice: &Notice, area: Rect) -> (u16, u16) {
    let longest = notice
        .message
        .lines()
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(notice.title.width()))
        .max()
        .unwrap_or(0);
    let lines = notice.message.lines().count();
    let width = u16::try_from(longest + 4).unwrap_or(u16::MAX).max(30);
    let height = u16::try_from(lines + 4).unwrap_or(u16::MAX);
    (
        width.min(area.width.saturating_sub(2)),
        height.min(area.height.saturating_sub(2)),
    )
}

fn draw_notice(f: &mut Frame, notice: &Notice) {
    let (width, height) = notice_size(notice, f.area());
    let area = centered_rect(width, height, f.area());
    let color = match notice.kind {
        NoticeKind::Info => GREEN,
        NoticeKind::Error => RED,
    };

    let mut text = Text::from(notice.message.as_str());
    text.push_line(Line::raw(""));
    text.push_line(Line::styled("[Enter] OK", Style::default().fg(DIM)));

    let popup = Paragraph::new(text)
        .style(Style::default().fg(color).bg(PANEL))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
                .title(format!(" {} ", notice.title)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Draw the main UI.
pub fn draw_ui(f: &mut Frame, app: &mut App) {
    f.render_widget(
        Block::default().style(Style::default().bg(BACKGROUND)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title + philosophy
            Constraint::Length(5), // Form (border + 3 rows + border)
            Constraint::Length(1), // Strategy buttons
            Constraint::Min(3),    // Output
            Constraint::Length(1), // Action buttons
            Constraint::Length(1), // Status line
        ])
        .split(f.area());

    let header = Paragraph::new(vec![
        Line::styled(
            APP_TITLE,
            Style::default().fg(GREEN).add_modifier(Modifier::BOLD),
        )
        .centered(),
        Line::styled(PHILOSOPHY, Style::default().fg(GREEN)).centered(),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(DIM)),
    );
    f.render_widget(header, chunks[0]);

    // Form
    let form_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style(app.form.focus != FormField::Output));
    let form_inner = form_block.inner(chunks[1]);
    let concept_width = usize::from(form_inner.width).saturating_sub(CONCEPT_LABEL.width());
    let (concept_text, cursor_col) = visible_window(&app.form.concept, concept_width);
    let concept_style = if app.form.focus == FormField::Concept {
        Style::default().fg(GREEN).bg(PANEL).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(GREEN).bg(PANEL)
    };

    let form = Paragraph::new(vec![
        selector_line(
            PHASE_LABEL,
            app.form.phase.id(),
            app.form.focus == FormField::Phase,
        ),
        selector_line(
            PROJECT_LABEL,
            app.form.project.id(),
            app.form.focus == FormField::Project,
        ),
        Line::from(vec![
            Span::styled(CONCEPT_LABEL, Style::default().fg(GREEN)),
            Span::styled(
                format!("{:<width$}", concept_text, width = concept_width),
                concept_style,
            ),
        ]),
    ])
    .block(form_block);
    f.render_widget(form, chunks[1]);

    f.render_widget(Paragraph::new(strategy_buttons(app.last_strategy)), chunks[2]);

    // Output pane
    app.output_pane_height = chunks[3].height.saturating_sub(2);
    app.output_pane_width = chunks[3].width;

    let output_focused = app.form.focus == FormField::Output;
    let output = Paragraph::new(Text::raw(app.document.as_str()))
        .style(Style::default().fg(GREEN))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(if output_focused {
                    BorderType::Double
                } else {
                    BorderType::Rounded
                })
                .border_style(border_style(output_focused))
                .title(Line::from(format!(" {} ", OUTPUT_TITLE)).left_aligned()),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.scroll_offset, 0));
    f.render_widget(output, chunks[3]);

    // Scrollbar - only visible when content exceeds viewport
    let visual_lines = app.visual_line_count();
    if visual_lines > app.output_pane_height {
        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .style(Style::default().fg(GREEN));

        let mut scrollbar_state = ScrollbarState::default()
            .content_length(usize::from(visual_lines))
            .position(usize::from(app.scroll_offset))
            .viewport_content_length(usize::from(app.output_pane_height));

        f.render_stateful_widget(scrollbar, chunks[3], &mut scrollbar_state);
    }

    f.render_widget(Paragraph::new(action_buttons()), chunks[4]);
    f.render_widget(Paragraph::new(status_line(app)), chunks[5]);

    if let Some(notice) = &app.notice {
        draw_notice(f, notice);
    } else if app.form.focus == FormField::Concept {
        let x = form_inner.x + CONCEPT_LABEL.width() as u16 + cursor_col as u16;
        let y = form_inner.y + 2;
        if x < form_inner.right() && y < form_inner.bottom() {
            f.set_cursor_position(Position::new(x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SessionInfo;
    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::export::MemoryClipboard;
    use crate::input::Action;
    use crate::strategy::Renderer;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(40, 10, area), Rect::new(30, 15, 40, 10));
        assert_eq!(centered_rect(200, 10, area), Rect::new(0, 15, 100, 10));
    }

    #[test]
    fn test_contract_path_outside_home() {
        assert_eq!(contract_path(Path::new("/var/log/x")), "/var/log/x");
    }

    #[test]
    fn test_contract_path_inside_home() {
        if let Some(home) = dirs::home_dir() {
            let path: PathBuf = home.join("logs");
            assert_eq!(contract_path(&path), "~/logs");
        }
    }

    #[test]
    fn test_strategy_buttons_list_every_kind() {
        let text = line_text(&strategy_buttons(None));
        for (i, kind) in StrategyKind::ALL.iter().enumerate() {
            assert!(text.contains(&format!("[F{}]", i + 1)));
            assert!(text.contains(kind.label()));
        }
    }

    #[test]
    fn test_action_buttons_text() {
        let text = line_text(&action_buttons());
        assert!(text.contains("📋 Copy Strategy"));
        assert!(text.contains("[F9/e]"));
    }

    #[test]
    fn test_notice_size_fits_area() {
        let notice = Notice::info("Execute", crate::templates::EXECUTE_MESSAGE);
        let (w, h) = notice_size(&notice, Rect::new(0, 0, 200, 50));
        assert_eq!(usize::from(h), notice.message.lines().count() + 4);
        assert!(w >= 30);

        let (w, h) = notice_size(&notice, Rect::new(0, 0, 20, 5));
        assert_eq!((w, h), (18, 3));
    }

    #[test]
    fn test_draw_ui_renders_form_and_document() {
        let catalog = Catalog::builtin();
        let mut app = App::new(
            Renderer::new(&catalog),
            &Config::default(),
            Box::new(MemoryClipboard::default()),
            SessionInfo {
                session_id: Some("a1b2c3".to_string()),
                ..SessionInfo::default()
            },
        );
        app.apply(Action::Generate(StrategyKind::MvpSimulation));

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, &mut app)).unwrap();
        let screen = screen_text(&terminal);

        assert!(screen.contains("FAKE-TO-REAL DEVELOPMENT STRATEGY"));
        assert!(screen.contains("mvp_validation"));
        assert!(screen.contains("aimastery"));
        assert!(screen.contains("STRATÉGIE MVP SIMULATION"));
        assert!(screen.contains("a1b2c3"));
        assert_eq!(app.output_pane_width, 120);
        assert!(app.output_pane_height > 0);
    }

    #[test]
    fn test_draw_ui_shows_notice() {
        let catalog = Catalog::builtin();
        let mut app = App::new(
            Renderer::new(&catalog),
            &Config::default(),
            Box::new(MemoryClipboard::default()),
            SessionInfo::default(),
        );
        app.notice = Some(Notice::error("Erreur sauvegarde: disk full"));

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, &mut app)).unwrap();
        let screen = screen_text(&terminal);

        assert!(screen.contains("Erreur sauvegarde: disk full"));
        assert!(screen.contains("[Enter] OK"));
    }
}
