use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Frame;
use tui_textarea::Input;
use tui_textarea::Key;
use tui_textarea::TextArea;

use crate::domain::models::Event;

const PLACEHOLDER: &str = "Enter url";

/// Single-line text input. Only character input and paste events touch it.
#[derive(Debug, Clone)]
pub struct TextEntry<'a> {
    textarea: TextArea<'a>,
}

impl<'a> Default for TextEntry<'a> {
    fn default() -> TextEntry<'a> {
        return TextEntry {
            textarea: new_textarea(),
        };
    }
}

fn new_textarea<'a>() -> TextArea<'a> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea.set_cursor_line_style(Style::default());

    return textarea;
}

fn is_line_break(input: &Input) -> bool {
    return match input {
        Input {
            key: Key::Enter, ..
        } => true,
        Input {
            key: Key::Char('m'),
            ctrl: true,
            ..
        } => true,
        Input {
            key: Key::Char('j'),
            ctrl: true,
            ..
        } => true,
        _ => false,
    };
}

impl<'a> TextEntry<'a> {
    pub fn update(&mut self, event: &Event) {
        match event {
            Event::KeyboardCharInput(input) => {
                if is_line_break(input) {
                    return;
                }
                self.textarea.input(input.clone());
            }
            Event::KeyboardPaste(text) => {
                let single_line = text.replace(['\r', '\n'], "");
                self.textarea.insert_str(single_line);
            }
            _ => {}
        }
    }

    pub fn value(&self) -> String {
        return self.textarea.lines().join("");
    }

    pub fn clear(&mut self) {
        self.textarea = new_textarea();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_input(c: char) -> Event {
        return Event::KeyboardCharInput(Input {
            key: Key::Char(c),
            ..Default::default()
        });
    }

    #[test]
    fn it_collects_typed_characters() {
        let mut entry = TextEntry::default();
        for c in "example.com".chars() {
            entry.update(&char_input(c));
        }

        assert_eq!(entry.value(), "example.com");
    }

    #[test]
    fn it_applies_backspace() {
        let mut entry = TextEntry::default();
        entry.update(&char_input('a'));
        entry.update(&char_input('b'));
        entry.update(&Event::KeyboardCharInput(Input {
            key: Key::Backspace,
            ..Default::default()
        }));

        assert_eq!(entry.value(), "a");
    }

    #[test]
    fn it_never_breaks_lines() {
        let mut entry = TextEntry::default();
        entry.update(&char_input('a'));
        entry.update(&Event::KeyboardCharInput(Input {
            key: Key::Enter,
            ..Default::default()
        }));
        entry.update(&Event::KeyboardPaste("b\nc\r\n".to_string()));

        assert_eq!(entry.value(), "abc");
    }

    #[test]
    fn it_ignores_other_events() {
        let mut entry = TextEntry::default();
        entry.update(&Event::KeyboardConfirm);
        entry.update(&Event::WindowResize {
            width: 10,
            height: 10,
        });

        assert_eq!(entry.value(), "");
    }

    #[test]
    fn it_clears() {
        let mut entry = TextEntry::default();
        entry.update(&Event::KeyboardPaste("example.com".to_string()));
        entry.clear();

        assert_eq!(entry.value(), "");
    }
}
