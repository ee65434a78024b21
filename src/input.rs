//! Translate terminal events into application actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use crate::form::FormField;
use crate::strategy::StrategyKind;

/// Lines scrolled per mouse wheel notch.
const WHEEL_LINES: u16 = 3;

/// How far a scroll action moves the output pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAmount {
    Lines(u16),
    HalfPage,
    Page,
}

/// Everything the user can ask the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate(StrategyKind),
    Copy,
    Clear,
    Save,
    Execute,
    FocusNext,
    FocusPrev,
    SelectNext,
    SelectPrev,
    InsertChar(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ScrollUp(ScrollAmount),
    ScrollDown(ScrollAmount),
    ScrollTop,
    ScrollBottom,
    DismissNotice,
    Quit,
}

/// Map a key press to an action given the focused field.
///
/// While a notice is open only Enter and Esc do anything.
pub fn map_key(key: KeyEvent, focus: FormField, notice_open: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if notice_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Action::DismissNotice),
            _ => None,
        };
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Keys that mean the same thing whatever has focus.
    let global = match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('u') if ctrl => Some(Action::ScrollUp(ScrollAmount::HalfPage)),
        KeyCode::Char('d') if ctrl => Some(Action::ScrollDown(ScrollAmount::HalfPage)),
        KeyCode::Char('b') if ctrl => Some(Action::ScrollUp(ScrollAmount::Page)),
        KeyCode::Char('f') if ctrl => Some(Action::ScrollDown(ScrollAmount::Page)),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(Action::FocusPrev),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::PageUp => Some(Action::ScrollUp(ScrollAmount::Page)),
        KeyCode::PageDown => Some(Action::ScrollDown(ScrollAmount::Page)),
        KeyCode::F(n) => function_key(n),
        _ => None,
    };
    if global.is_some() || ctrl {
        return global;
    }

    if focus == FormField::Concept {
        return match key.code {
            KeyCode::Char(c) => Some(Action::InsertChar(c)),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Delete => Some(Action::Delete),
            KeyCode::Left => Some(Action::CursorLeft),
            KeyCode::Right => Some(Action::CursorRight),
            KeyCode::Home => Some(Action::CursorHome),
            KeyCode::End => Some(Action::CursorEnd),
            KeyCode::Enter => Some(Action::Generate(StrategyKind::Custom)),
            KeyCode::Up => Some(Action::ScrollUp(ScrollAmount::Lines(1))),
            KeyCode::Down => Some(Action::ScrollDown(ScrollAmount::Lines(1))),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            Some(Action::Generate(StrategyKind::ALL[index]))
        }
        KeyCode::Char('c') => Some(Action::Copy),
        KeyCode::Char('x') => Some(Action::Clear),
        KeyCode::Char('s') => Some(Action::Save),
        KeyCode::Char('e') => Some(Action::Execute),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp(ScrollAmount::Lines(1))),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown(ScrollAmount::Lines(1))),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::ScrollTop),
        KeyCode::Char('G') | KeyCode::End => Some(Action::ScrollBottom),
        KeyCode::Left | KeyCode::Char('h') => match focus {
            FormField::Phase | FormField::Project => Some(Action::SelectPrev),
            _ => None,
        },
        KeyCode::Right | KeyCode::Char('l') => match focus {
            FormField::Phase | FormField::Project => Some(Action::SelectNext),
            _ => None,
        },
        KeyCode::Enter => match focus {
            FormField::Phase | FormField::Project => Some(Action::FocusNext),
            _ => None,
        },
        _ => None,
    }
}

fn function_key(n: u8) -> Option<Action> {
    match n {
        1..=5 => Some(Action::Generate(StrategyKind::ALL[usize::from(n - 1)])),
        6 => Some(Action::Copy),
        7 => Some(Action::Clear),
        8 => Some(Action::Save),
        9 => Some(Action::Execute),
        _ => None,
    }
}

/// Map a mouse event to a scroll action. Ignored while a notice is open.
pub fn map_mouse(mouse: MouseEvent, notice_open: bool) -> Option<Action> {
    if notice_open {
        return None;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => Some(Action::ScrollUp(ScrollAmount::Lines(WHEEL_LINES))),
        MouseEventKind::ScrollDown => Some(Action::ScrollDown(ScrollAmount::Lines(WHEEL_LINES))),
        _ => None,
    }
}
