//! Form state: selectors, the concept input and keyboard focus.

use unicode_width::UnicodeWidthChar;

use crate::catalog::{Phase, Project};

/// Which part of the screen receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    Phase,
    Project,
    #[default]
    Concept,
    Output,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Phase => Self::Project,
            Self::Project => Self::Concept,
            Self::Concept => Self::Output,
            Self::Output => Self::Phase,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Phase => Self::Output,
            Self::Project => Self::Phase,
            Self::Concept => Self::Project,
            Self::Output => Self::Concept,
        }
    }
}

/// Single-line text input. The cursor is a char index, not a byte index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

/// Slice of a text input that fits in `width` columns, keeping the cursor visible.
///
/// Returns the visible text and the cursor column relative to its start.
pub fn visible_window(input: &TextInput, width: usize) -> (String, usize) {
    let chars: Vec<char> = input.value().chars().collect();
    let cursor = input.cursor().min(chars.len());
    // One column is reserved for the cursor at end of line.
    let budget = width.saturating_sub(1);

    let mut start = 0;
    let mut cursor_col: usize = chars[..cursor]
        .iter()
        .map(|c| c.width().unwrap_or(0))
        .sum();
    while cursor_col > budget && start < cursor {
        cursor_col -= chars[start].width().unwrap_or(0);
        start += 1;
    }

    let mut visible = String::new();
    let mut used = 0;
    for c in &chars[start..] {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        visible.push(*c);
        used += w;
    }

    (visible, cursor_col)
}

/// Current values of the input form.
#[derive(Debug, Clone, Default)]
pub struct StrategyForm {
    pub phase: Phase,
    pub project: Project,
    pub concept: TextInput,
    pub focus: FormField,
}

impl StrategyForm {
    pub fn new(phase: Phase, project: Project) -> Self {
        Self {
            phase,
            project,
            ..Self::default()
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Step the focused selector forward. No-op on other fields.
    pub fn select_next(&mut self) {
        match self.focus {
            FormField::Phase => self.phase = self.phase.next(),
            FormField::Project => self.project = self.project.next(),
            _ => {}
        }
    }

    /// Step the focused selector backward. No-op on other fields.
    pub fn select_prev(&mut self) {
        match self.focus {
            FormField::Phase => self.phase = self.phase.prev(),
            FormField::Project => self.project = self.project.prev(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> TextInput {
        let mut input = TextInput::default();
        for c in text.chars() {
            input.insert(c);
        }
        input
    }

    #[test]
    fn test_form_field_cycle() {
        let mut field = FormField::Phase;
        for expected in [
            FormField::Project,
            FormField::Concept,
            FormField::Output,
            FormField::Phase,
        ] {
            field = field.next();
            assert_eq!(field, expected);
        }
        assert_eq!(FormField::Phase.prev(), FormField::Output);
    }

    #[test]
    fn test_insert_and_backspace() {
        let mut text = input("abc");
        assert_eq!(text.value(), "abc");
        assert_eq!(text.cursor(), 3);
        text.backspace();
        assert_eq!(text.value(), "ab");
        assert_eq!(text.cursor(), 2);
    }

    #[test]
    fn test_insert_in_middle_with_multibyte() {
        let mut text = input("cafe");
        text.end();
        text.backspace();
        text.insert('é');
        assert_eq!(text.value(), "café");
        text.home();
        text.insert('☕');
        assert_eq!(text.value(), "☕café");
        assert_eq!(text.cursor(), 1);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut text = input("née");
        text.home();
        text.right();
        text.delete();
        assert_eq!(text.value(), "ne");
        text.end();
        text.delete();
        assert_eq!(text.value(), "ne");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut text = input("ab");
        text.right();
        assert_eq!(text.cursor(), 2);
        text.home();
        text.left();
        assert_eq!(text.cursor(), 0);
        text.backspace();
        assert_eq!(text.value(), "ab");
    }

    #[test]
    fn test_clear() {
        let mut text = input("something");
        text.clear();
        assert_eq!(text.value(), "");
        assert_eq!(text.cursor(), 0);
    }

    #[test]
    fn test_visible_window_short_text() {
        let text = input("hello");
        assert_eq!(visible_window(&text, 20), ("hello".to_string(), 5));
    }

    #[test]
    fn test_visible_window_scrolls_to_cursor() {
        let text = input("abcdefghij");
        let (visible, col) = visible_window(&text, 5);
        assert_eq!(col, 4);
        assert_eq!(visible, "ghij");
    }

    #[test]
    fn test_visible_window_wide_chars() {
        let text = input("日本語");
        let (visible, col) = visible_window(&text, 10);
        assert_eq!(visible, "日本語");
        assert_eq!(col, 6);
    }

    #[test]
    fn test_selectors_only_move_when_focused() {
        let mut form = StrategyForm::new(Phase::MvpValidation, Project::Aimastery);
        form.focus = FormField::Concept;
        form.select_next();
        assert_eq!(form.phase, Phase::MvpValidation);
        assert_eq!(form.project, Project::Aimastery);

        form.focus = FormField::Phase;
        form.select_next();
        assert_eq!(form.phase, Phase::UserTesting);

        form.focus = FormField::Project;
        form.select_prev();
        assert_eq!(form.project, Project::EnterpriseTool);
    }
}
