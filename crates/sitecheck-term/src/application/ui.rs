use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::EnableBracketedPaste;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::configuration::Config;
use crate::domain::models::ClientSettings;
use crate::domain::models::Command;
use crate::domain::models::Event;
use crate::domain::models::RequestClient;
use crate::domain::models::RequestClientBox;
use crate::domain::models::SpinnerTick;
use crate::domain::services::Controller;
use crate::domain::services::ControllerProps;
use crate::domain::services::EventsService;
use crate::infrastructure::clients::TrustApi;

#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

/// Runs `client.fetch` off the loop and posts the result back as an event.
pub fn spawn_fetch(
    client: Arc<dyn RequestClient>,
    query: String,
    tx: mpsc::UnboundedSender<Event>,
) -> JoinHandle<()> {
    return tokio::spawn(async move {
        let res = client.fetch(&query).await;
        if tx.send(Event::FetchCompleted(res)).is_err() {
            tracing::debug!("event loop closed before the fetch finished");
        }
    });
}

pub fn spawn_tick(
    tick: SpinnerTick,
    after: Duration,
    tx: mpsc::UnboundedSender<Event>,
) -> JoinHandle<()> {
    return tokio::spawn(async move {
        tokio::time::sleep(after).await;
        let _ = tx.send(Event::SpinnerTick(tick));
    });
}

/// Carries out one command. Returns false when the loop should stop.
pub fn run_command(
    command: Command,
    client: &Arc<dyn RequestClient>,
    tx: &mpsc::UnboundedSender<Event>,
) -> bool {
    match command {
        Command::Quit => {
            return false;
        }
        Command::Fetch { query } => {
            spawn_fetch(client.clone(), query, tx.clone());
        }
        Command::ScheduleTick { tick, after } => {
            spawn_tick(tick, after, tx.clone());
        }
    }

    return true;
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    mut controller: Controller<'_>,
    client: RequestClientBox,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let client: Arc<dyn RequestClient> = Arc::from(client);
    let mut events_service = EventsService::new(rx);

    let size = terminal.size()?;
    tx.send(Event::WindowResize {
        width: size.width,
        height: size.height,
    })?;

    loop {
        terminal.draw(|frame| controller.render(frame))?;

        let event = events_service.next().await?;
        for command in controller.update(event) {
            if !run_command(command, &client, &tx) {
                tracing::info!(state = %controller.state, "quit");
                return Ok(());
            }
        }
    }
}

pub async fn start(config: Config) -> Result<()> {
    let props = ControllerProps::from_config(&config)?;
    let client: RequestClientBox = Box::new(TrustApi::new(ClientSettings::from_config(&config)));
    let (tx, rx) = mpsc::unbounded_channel::<Event>();

    enable_raw_mode()?;
    let result = run_in_alternate_screen(props, client, tx, rx).await;
    destruct_terminal_for_panic();

    return result;
}

async fn run_in_alternate_screen(
    props: ControllerProps,
    client: RequestClientBox,
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    return start_loop(&mut terminal, Controller::new(props), client, tx, rx).await;
}
