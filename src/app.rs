//! Application state and core logic.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use ratatui::text::Text;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::export::{self, Clipboard};
use crate::form::StrategyForm;
use crate::input::{Action, ScrollAmount};
use crate::strategy::{Renderer, StrategyKind};
use crate::templates;

pub const COPY_MESSAGE: &str = "🎭 Stratégie Fake-to-Real copiée!";

/// Severity of a notice dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Modal message shown over the main screen until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// Logging state shown in the status line.
#[derive(Debug, Clone, Default)]
pub struct SessionInfo {
    pub session_id: Option<String>,
    pub log_directory: Option<PathBuf>,
    pub logging_error: Option<String>,
}

/// Main application state.
pub struct App<'a> {
    pub renderer: Renderer<'a>,
    pub form: StrategyForm,
    /// Text shown in the output pane. Replaced on every render.
    pub document: String,
    /// Strategy that produced the current document, if any.
    pub last_strategy: Option<StrategyKind>,
    pub scroll_offset: u16,
    pub output_pane_height: u16,
    pub output_pane_width: u16,
    pub notice: Option<Notice>,
    /// Directory that plan files are written to.
    pub output_dir: PathBuf,
    pub session: SessionInfo,
    pub should_quit: bool,
    clipboard: Box<dyn Clipboard>,
}

impl<'a> App<'a> {
    pub fn new(
        renderer: Renderer<'a>,
        config: &Config,
        clipboard: Box<dyn Clipboard>,
        session: SessionInfo,
    ) -> Self {
        Self {
            renderer,
            form: StrategyForm::new(config.initial_phase(), config.initial_project()),
            document: String::new(),
            last_strategy: None,
            scroll_offset: 0,
            output_pane_height: 0,
            output_pane_width: 0,
            notice: None,
            output_dir: config.output_directory(),
            session,
            should_quit: false,
            clipboard,
        }
    }

    /// Carry out one user action to completion.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Generate(kind) => self.generate(kind),
            Action::Copy => self.copy(),
            Action::Clear => self.clear(),
            Action::Save => self.save_at(Local::now().naive_local()),
            Action::Execute => self.execute(),
            Action::FocusNext => self.form.focus_next(),
            Action::FocusPrev => self.form.focus_prev(),
            Action::SelectNext => self.form.select_next(),
            Action::SelectPrev => self.form.select_prev(),
            Action::InsertChar(c) => self.form.concept.insert(c),
            Action::Backspace => self.form.concept.backspace(),
            Action::Delete => self.form.concept.delete(),
            Action::CursorLeft => self.form.concept.left(),
            Action::CursorRight => self.form.concept.right(),
            Action::CursorHome => self.form.concept.home(),
            Action::CursorEnd => self.form.concept.end(),
            Action::ScrollUp(amount) => self.scroll_up(self.scroll_lines(amount)),
            Action::ScrollDown(amount) => self.scroll_down(self.scroll_lines(amount)),
            Action::ScrollTop => self.scroll_offset = 0,
            Action::ScrollBottom => self.scroll_offset = self.max_scroll(),
            Action::DismissNotice => self.notice = None,
            Action::Quit => self.should_quit = true,
        }
    }

    pub fn generate(&mut self, kind: StrategyKind) {
        let phase = self.form.phase.id();
        let project = self.form.project.id();
        self.document = self
            .renderer
            .render(kind, phase, project, self.form.concept.value());
        self.last_strategy = Some(kind);
        self.scroll_offset = 0;
        info!(
            strategy = kind.id(),
            phase,
            project,
            bytes = self.document.len(),
            "strategy_rendered"
        );
    }

    /// Put the displayed document on the clipboard.
    pub fn copy(&mut self) {
        match self.clipboard.set_text(&self.document) {
            Ok(()) => self.notice = Some(Notice::info("Success", COPY_MESSAGE)),
            Err(e) => {
                warn!(error = %e, "strategy_copy_failed");
                self.notice = Some(Notice::error(format!("Erreur copie: {}", e)));
            }
        }
    }

    /// Empty both the concept input and the output pane.
    pub fn clear(&mut self) {
        self.form.concept.clear();
        self.document.clear();
        self.last_strategy = None;
        self.scroll_offset = 0;
        info!("output_cleared");
    }

    pub fn save_at(&mut self, now: NaiveDateTime) {
        match export::save_plan(&self.output_dir, &self.document, now) {
            Ok(path) => {
                let shown = display_saved_path(&self.output_dir, &path);
                self.notice = Some(Notice::info("Success", format!("🎭 Plan sauvé: {}", shown)));
            }
            Err(e) => {
                self.notice = Some(Notice::error(format!("Erreur sauvegarde: {}", e.source)));
            }
        }
    }

    pub fn execute(&mut self) {
        debug!("execute_requested");
        self.notice = Some(Notice::info("Execute", templates::EXECUTE_MESSAGE));
    }

    fn scroll_lines(&self, amount: ScrollAmount) -> u16 {
        match amount {
            ScrollAmount::Lines(n) => n,
            ScrollAmount::HalfPage => (self.output_pane_height / 2).max(1),
            ScrollAmount::Page => self.output_pane_height.max(1),
        }
    }

    /// Number of rows the document occupies once wrapped to the pane width.
    pub fn visual_line_count(&self) -> u16 {
        if self.output_pane_width == 0 {
            return 0;
        }
        let paragraph = Paragraph::new(Text::raw(self.document.as_str()))
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        // Drop the two border rows counted by line_count.
        let count = paragraph.line_count(self.output_pane_width).saturating_sub(2);
        u16::try_from(count).unwrap_or(u16::MAX)
    }

    pub fn max_scroll(&self) -> u16 {
        self.visual_line_count().saturating_sub(self.output_pane_height)
    }

    pub fn scroll_up(&mut self, amount: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: u16) {
        let max = self.max_scroll();
        self.scroll_offset = self.scroll_offset.saturating_add(amount).min(max);
    }
}

/// Plans saved to the working directory are shown by file name only.
fn display_saved_path(dir: &Path, path: &Path) -> String {
    if dir == Path::new(".")
        && let Some(name) = path.file_name()
    {
        return name.to_string_lossy().into_owned();
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Phase, Project};
    use crate::export::{ClipboardError, MemoryClipboard};
    use crate::form::FormField;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Clipboard shared with the test so its contents can be inspected.
    #[derive(Clone, Default)]
    struct SharedClipboard(Rc<RefCell<MemoryClipboard>>);

    impl Clipboard for SharedClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.borrow_mut().set_text(text)
        }
    }

    fn app_with(catalog: &Catalog, clipboard: SharedClipboard) -> App<'_> {
        App::new(
            Renderer::new(catalog),
            &Config::default(),
            Box::new(clipboard),
            SessionInfo::default(),
        )
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.apply(Action::InsertChar(c));
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_new_uses_config_defaults() {
        let catalog = Catalog::builtin();
        let app = app_with(&catalog, SharedClipboard::default());
        assert_eq!(app.form.phase, Phase::MvpValidation);
        assert_eq!(app.form.project, Project::Aimastery);
        assert_eq!(app.form.focus, FormField::Concept);
        assert!(app.document.is_empty());
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_generate_replaces_document() {
        let catalog = Catalog::builtin();
        let mut app = app_with(&catalog, SharedClipboard::default());
        type_text(&mut app, "podcast coach");

        app.apply(Action::Generate(StrategyKind::MvpSimulation));
        let first = app.document.clone();
        assert!(first.contains("podcast coach"));

        app.apply(Action::Generate(StrategyKind::UserTest));
        assert_ne!(app.document, first);
        assert!(!app.document.contains("STRATÉGIE MVP SIMULATION"));
        assert_eq!(app.last_strategy, Some(StrategyKind::UserTest));
    }

    #[test]
    fn test_generate_resets_scroll() {
        let catalog = Catalog::builtin();
        let mut app = app_with(&catalog, SharedClipboard::default());
        app.output_pane_width = 40;
        app.output_pane_height = 5;
        app.apply(Action::Generate(StrategyKind::MarketValidation));
        app.apply(Action::ScrollDown(ScrollAmount::Page));
        assert!(app.scroll_offset > 0);

        app.apply(Action::Generate(StrategyKind::ProductionSwitch));
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_generate_custom_uses_selectors() {
        let catalog = Catalog::builtin();
        let mut app = app_with(&catalog, SharedClipboard::default());
        app.form.phase = Phase::MarketProof;
        app.form.project = Project::Scorescout;

        app.apply(Action::Generate(StrategyKind::Custom));

        assert!(app.document.contains("Market Proof"));
        assert!(app.document.contains(catalog.project_note("scorescout", "market_proof")));
        assert!(app.document.contains("innovative solution"));
    }

    #[test]
    fn test_copy_puts_document_on_clipboard() {
        let catalog = Catalog::builtin();
        let clipboard = SharedClipboard::default();
        let mut app = app_with(&catalog, clipboard.clone());
        app.apply(Action::Generate(StrategyKind::UserTest));

        app.apply(Action::Copy);
        let first = clipboard.0.borrow().contents.clone();
        app.apply(Action::DismissNotice);
        app.apply(Action::Copy);

        assert_eq!(first.as_deref(), Some(app.document.as_str()));
        assert_eq!(clipboard.0.borrow().contents, first);
        assert_eq!(app.notice, Some(Notice::info("Success", COPY_MESSAGE)));
    }

    #[test]
    fn test_copy_failure_shows_error() {
        let catalog = Catalog::builtin();
        let clipboard = SharedClipboard::default();
        clipboard.0.borrow_mut().fail = true;
        let mut app = app_with(&catalog, clipboard);

        app.apply(Action::Copy);

        let notice = app.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.message.contains("clipboard offline"));
    }

    #[test]
    fn test_clear_empties_document_and_concept() {
        let catalog = Catalog::builtin();
        let mut app = app_with(&catalog, SharedClipboard::default());
        type_text(&mut app, "idée");
        app.apply(Action::Generate(StrategyKind::Custom));

        app.apply(Action::Clear);

        assert_eq!(app.document, "");
        assert_eq!(app.form.concept.value(), "");
        assert_eq!(app.last_strategy, None);
    }

    #[test]
    fn test_save_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::builtin();
        let mut app = app_with(&catalog, SharedClipboard::default());
        app.output_dir = dir.path().to_path_buf();
        type_text(&mut app, "café ☕");
        app.apply(Action::Generate(StrategyKind::Custom));

        app.save_at(noon());

        let path = dir.path().join("fake_to_real_plan_20250601_120000.txt");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), app.document);
        let notice = app.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert!(notice.message.starts_with("🎭 Plan sauvé: "));
    }

    #[test]
    fn test_save_failure_shows_error() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::builtin();
        let mut app = app_with(&catalog, SharedClipboard::default());
        app.output_dir = dir.path().join("missing");

        app.save_at(noon());

        let notice = app.notice.unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Error");
        assert!(notice.message.starts_with("Erreur sauvegarde: "));
    }

    #[test]
    fn test_execute_shows_message_only() {
        let catalog = Catalog::builtin();
        let mut app = app_with(&catalog, SharedClipboard::default());
        app.apply(Action::Generate(StrategyKind::MvpSimulation));
        let before = app.document.clone();

        app.apply(Action::Execute);

        assert_eq!(app.document, before);
        let notice = app.notice.unwrap();
        assert_eq!(notice.title, "Execute");
        assert_eq!(notice.message, templates::EXECUTE_MESSAGE);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let catalog = Catalog::builtin();
        let mut app = app_with(&catalog, SharedClipboard::default());
        app.output_pane_width = 60;
        app.output_pane_height = 10;
        app.apply(Action::Generate(StrategyKind::ProductionSwitch));

        app.apply(Action::ScrollUp(ScrollAmount::Lines(5)));
        assert_eq!(app.scroll_offset, 0);

        app.apply(Action::ScrollBottom);
        let max = app.max_scroll();
        assert!(max > 0);
        assert_eq!(app.scroll_offset, max);

        app.apply(Action::ScrollDown(ScrollAmount::Lines(1)));
        assert_eq!(app.scroll_offset, max);

        app.apply(Action::ScrollTop);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_without_content() {
        let catalog = Catalog::builtin();
        let mut app = app_with(&catalog, SharedClipboard::default());
        app.output_pane_width = 60;
        app.output_pane_height = 10;
        app.apply(Action::ScrollDown(ScrollAmount::Page));
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_display_saved_path() {
        let path = Path::new("./fake_to_real_plan_20250601_120000.txt");
        assert_eq!(
            display_saved_path(Path::new("."), path),
            "fake_to_real_plan_20250601_120000.txt"
        );
        let elsewhere = Path::new("/tmp/plans/fake_to_real_plan_20250601_120000.txt");
        assert_eq!(
            display_saved_path(Path::new("/tmp/plans"), elsewhere),
            "/tmp/plans/fake_to_real_plan_20250601_120000.txt"
        );
    }

    #[test]
    fn test_quit_sets_flag() {
        let catalog = Catalog::builtin();
        let mut app = app_with(&catalog, SharedClipboard::default());
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
