use std::str::FromStr;

use anyhow::anyhow;
use anyhow::Result;
use ratatui::layout::Alignment;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;

use super::centered;
use super::Spinner;
use super::SpinnerStyle;
use super::Styles;
use super::TextEntry;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Command;
use crate::domain::models::Event;
use crate::domain::models::FetchResult;
use crate::domain::models::InteractionState;
use crate::domain::models::RepeatPolicy;
use crate::domain::models::SpinnerTick;

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;

pub const LOADING_TEXT: &str = "Loading...";

pub struct ControllerProps {
    pub styles: Styles,
    pub spinner_style: SpinnerStyle,
    pub repeat_policy: RepeatPolicy,
    pub title: String,
}

impl Default for ControllerProps {
    fn default() -> ControllerProps {
        return ControllerProps {
            styles: Styles::default(),
            spinner_style: SpinnerStyle::default(),
            repeat_policy: RepeatPolicy::default(),
            title: "Website check".to_string(),
        };
    }
}

impl ControllerProps {
    pub fn from_config(config: &Config) -> Result<ControllerProps> {
        let styles = Styles::from_accent(&config.get(ConfigKey::AccentColor))?;

        let spinner = config.get(ConfigKey::Spinner);
        let spinner_style = SpinnerStyle::from_str(&spinner)
            .map_err(|_| return anyhow!("Invalid spinner: {spinner}"))?;

        let after_result = config.get(ConfigKey::AfterResult);
        let repeat_policy = RepeatPolicy::from_str(&after_result)
            .map_err(|_| return anyhow!("Invalid after-result policy: {after_result}"))?;

        return Ok(ControllerProps {
            styles,
            spinner_style,
            repeat_policy,
            title: config.get(ConfigKey::Title),
        });
    }
}

/// The form's state machine. `update` is the only place any field changes,
/// and `render` only reads.
pub struct Controller<'a> {
    pub state: InteractionState,
    pub input: TextEntry<'a>,
    pub spinner: Spinner,
    pub result: String,
    pub error: Option<String>,
    pub last_known_width: u16,
    pub last_known_height: u16,
    repeat_policy: RepeatPolicy,
    styles: Styles,
    title: String,
}

impl<'a> Controller<'a> {
    pub fn new(props: ControllerProps) -> Controller<'a> {
        return Controller {
            state: InteractionState::AwaitingInput,
            input: TextEntry::default(),
            spinner: Spinner::new(props.spinner_style),
            result: "".to_string(),
            error: None,
            last_known_width: 0,
            last_known_height: 0,
            repeat_policy: props.repeat_policy,
            styles: props.styles,
            title: props.title,
        };
    }

    pub fn update(&mut self, event: Event) -> Vec<Command> {
        // No wildcard arms: every state and event kind pairing is spelled out.
        let commands = match (self.state, &event) {
            (_, Event::KeyboardQuit) => {
                return vec![Command::Quit];
            }
            (_, Event::WindowResize { width, height }) => {
                self.last_known_width = *width;
                self.last_known_height = *height;
                vec![]
            }
            (InteractionState::AwaitingInput, Event::KeyboardConfirm) => {
                return self.begin_request();
            }
            (InteractionState::Pending, Event::KeyboardConfirm) => vec![],
            (InteractionState::Displaying, Event::KeyboardConfirm) => {
                if self.repeat_policy == RepeatPolicy::Reset {
                    self.reset();
                }
                return vec![];
            }
            (InteractionState::Pending, Event::SpinnerTick(tick)) => {
                return self.advance_spinner(*tick);
            }
            (InteractionState::AwaitingInput, Event::SpinnerTick(_))
            | (InteractionState::Displaying, Event::SpinnerTick(_)) => {
                return vec![];
            }
            (InteractionState::Pending, Event::FetchCompleted(res)) => {
                self.complete_request(res.clone());
                vec![]
            }
            (InteractionState::AwaitingInput, Event::FetchCompleted(_))
            | (InteractionState::Displaying, Event::FetchCompleted(_)) => {
                tracing::debug!(state = %self.state, "dropping fetch result outside of pending");
                vec![]
            }
            (_, Event::KeyboardCharInput(_)) | (_, Event::KeyboardPaste(_)) => vec![],
        };

        self.input.update(&event);
        return commands;
    }

    fn begin_request(&mut self) -> Vec<Command> {
        let query = self.input.value();
        tracing::info!(input = %query, "input");

        self.state = InteractionState::Pending;
        let tick = self.spinner.start();

        return vec![
            Command::ScheduleTick {
                tick,
                after: self.spinner.interval(),
            },
            Command::Fetch { query },
        ];
    }

    fn advance_spinner(&mut self, tick: SpinnerTick) -> Vec<Command> {
        if let Some(next) = self.spinner.update(tick) {
            return vec![Command::ScheduleTick {
                tick: next,
                after: self.spinner.interval(),
            }];
        }

        return vec![];
    }

    fn complete_request(&mut self, res: FetchResult) {
        match res {
            FetchResult::Success(report) => {
                tracing::info!(host = %report.host, trustscore = report.trustscore, "fetch succeeded");
                self.result = report.to_pretty_text();
                self.error = None;
            }
            FetchResult::Failure(message) => {
                tracing::warn!(error = %message, "fetch failed");
                self.result = message.clone();
                self.error = Some(message);
            }
        }

        self.state = InteractionState::Displaying;
    }

    fn reset(&mut self) {
        self.input.clear();
        self.result = "".to_string();
        self.state = InteractionState::AwaitingInput;
    }

    pub fn render(&self, frame: &mut Frame) {
        let frame_area = frame.area();
        if self.last_known_width == 0 || self.last_known_height == 0 {
            frame.render_widget(Paragraph::new(LOADING_TEXT), frame_area);
            return;
        }

        let area = Rect {
            x: frame_area.x,
            y: frame_area.y,
            width: self.last_known_width.min(frame_area.width),
            height: self.last_known_height.min(frame_area.height),
        };

        match self.state {
            InteractionState::AwaitingInput => self.render_form(frame, area),
            InteractionState::Pending => self.render_busy(frame, area),
            InteractionState::Displaying => self.render_result(frame, area),
        }
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let (box_width, box_height) = self.styles.input.outer_size(1);
        let title_width = self.title.chars().count() as u16;
        let column = centered(area, box_width.max(title_width), box_height + 1);

        let title_rect = Rect {
            height: column.height.min(1),
            ..column
        };
        frame.render_widget(
            Paragraph::new(self.title.as_str()).alignment(Alignment::Center),
            title_rect,
        );

        let below_title = Rect {
            y: column.y + title_rect.height,
            height: column.height - title_rect.height,
            ..column
        };
        let input_rect = centered(below_title, box_width, box_height);
        let block = self.styles.input.block(self.styles.accent);
        let inner = block.inner(input_rect);
        frame.render_widget(block, input_rect);
        self.input.render(frame, inner);
    }

    fn render_busy(&self, frame: &mut Frame, area: Rect) {
        let (box_width, box_height) = self.styles.busy.outer_size(1);
        let busy_rect = centered(area, box_width, box_height);
        let block = self.styles.busy.block(self.styles.accent);
        let inner = block.inner(busy_rect);
        frame.render_widget(block, busy_rect);

        frame.render_widget(
            Paragraph::new(self.spinner.frame()).alignment(Alignment::Center),
            centered(inner, inner.width, 1),
        );
    }

    fn render_result(&self, frame: &mut Frame, area: Rect) {
        let content_height = self.result.lines().count() as u16;
        let (box_width, box_height) = self.styles.view.outer_size(content_height);
        let view_rect = centered(area, box_width, box_height);

        frame.render_widget(
            Paragraph::new(self.result.as_str())
                .wrap(Wrap { trim: false })
                .block(self.styles.view.block(self.styles.accent)),
            view_rect,
        );
    }
}
