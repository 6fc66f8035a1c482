use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;

use crate::input::handle_key;
use crate::render::render;
use crate::ui::{App, Tui};

/// Drives redraws and the clock/notification expiry.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Draw, then wait for either a terminal event or a tick. Intents are handled
/// inline, so each one is fully applied before the next event is read.
pub async fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(TICK_RATE);

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        handle_key(app, key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        tracing::info!("terminal event stream closed");
                        app.quit();
                    }
                }
            }
            _ = tick_interval.tick() => {
                app.tick();
            }
        }
    }

    Ok(())
}
