use crate::config::Config;
use crate::gateway::{HttpGateway, ProductSource};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;
use tokio::runtime::Handle;

const COMMAND_QUEUE: usize = 8;

pub fn run(config: Config, runtime: &Handle, shutdown: ShutdownHandle) -> anyhow::Result<()> {
    let gateway = HttpGateway::new(&config.api)?;
    tracing::info!(url = gateway.url(), "Starting catalog UI");

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let (command_tx, command_rx) = tokio::sync::mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(fetch_worker(
        gateway,
        command_rx,
        events.sender(),
        shutdown.clone(),
    ));

    let mut app = App::new(config);
    app.set_command_sender(command_tx);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.request_fetch();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::FetchCompleted(result)) => app.on_fetch_completed(result),
            Ok(AppEvent::Shutdown) => break,
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}

/// Serves fetch commands until shutdown or until the UI drops its sender.
async fn fetch_worker<S: ProductSource>(
    source: S,
    mut commands: tokio::sync::mpsc::Receiver<UiCommand>,
    events: mpsc::Sender<AppEvent>,
    shutdown: ShutdownHandle,
) {
    loop {
        let command = tokio::select! {
            _ = shutdown.wait() => break,
            command = commands.recv() => command,
        };
        let Some(UiCommand::Fetch) = command else {
            break;
        };

        let result = tokio::select! {
            _ = shutdown.wait() => break,
            result = source.fetch_products() => result,
        };
        if events.send(AppEvent::FetchCompleted(result)).is_err() {
            break;
        }
    }
    tracing::debug!("Fetch worker stopped");
}
