use std::str::FromStr;

use anyhow::anyhow;
use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Padding;

/// A bordered box of fixed inner width. `height` is the inner height, if fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxTemplate {
    pub border_type: BorderType,
    pub padding: u16,
    pub width: u16,
    pub height: Option<u16>,
}

impl BoxTemplate {
    /// Outer size including padding and border, for the given content height.
    pub fn outer_size(&self, content_height: u16) -> (u16, u16) {
        let inner_height = self
            .height
            .unwrap_or_else(|| return content_height.saturating_add(self.padding * 2));

        return (self.width.saturating_add(2), inner_height.saturating_add(2));
    }

    pub fn block<'a>(&self, accent: Color) -> Block<'a> {
        return Block::bordered()
            .border_type(self.border_type)
            .border_style(Style::default().fg(accent))
            .padding(Padding::uniform(self.padding));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    pub accent: Color,
    pub input: BoxTemplate,
    pub view: BoxTemplate,
    pub busy: BoxTemplate,
}

impl Default for Styles {
    fn default() -> Styles {
        return Styles::new(Color::Indexed(36));
    }
}

impl Styles {
    pub fn new(accent: Color) -> Styles {
        return Styles {
            accent,
            input: BoxTemplate {
                border_type: BorderType::Plain,
                padding: 1,
                width: 80,
                height: None,
            },
            view: BoxTemplate {
                border_type: BorderType::Rounded,
                padding: 1,
                width: 80,
                height: Some(20),
            },
            busy: BoxTemplate {
                border_type: BorderType::Rounded,
                padding: 1,
                width: 80,
                height: Some(20),
            },
        };
    }

    pub fn from_accent(accent: &str) -> Result<Styles> {
        let color = Color::from_str(accent)
            .map_err(|_| return anyhow!("Invalid accent color: {accent}"))?;

        return Ok(Styles::new(color));
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit when `area` is smaller.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    return Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_indexed_named_and_hex_accents() {
        assert_eq!(Styles::from_accent("36").unwrap().accent, Color::Indexed(36));
        assert_eq!(Styles::from_accent("red").unwrap().accent, Color::Red);
        assert_eq!(
            Styles::from_accent("#00aa88").unwrap().accent,
            Color::Rgb(0, 170, 136)
        );
        assert!(Styles::from_accent("not-a-color").is_err());
    }

    #[test]
    fn it_sizes_boxes_with_border_and_padding() {
        let styles = Styles::default();

        assert_eq!(styles.input.outer_size(1), (82, 5));
        assert_eq!(styles.view.outer_size(3), (82, 22));
    }

    #[test]
    fn it_centers_within_the_area() {
        let rect = centered(Rect::new(0, 0, 100, 30), 82, 22);
        assert_eq!(rect, Rect::new(9, 4, 82, 22));
    }

    #[test]
    fn it_clamps_to_small_areas() {
        let rect = centered(Rect::new(0, 0, 40, 10), 82, 22);
        assert_eq!(rect, Rect::new(0, 0, 40, 10));
    }
}
