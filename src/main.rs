//! Grid agent runner (default binary).
//!
//! This is the view-layer entrypoint: it connects to the simulation server,
//! then runs a fixed-timestep frame loop that applies at most one server
//! command per frame and redraws the grid. All intelligence lives on the
//! server side; this process only moves the marker.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use grid_agent::client::{Client, ClientConfig, SessionEvent};
use grid_agent::core::Agent;
use grid_agent::term::{GridView, TerminalRenderer};
use grid_agent::types::FRAME_MS;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if ClientConfig::is_disabled() {
        info!("client disabled via GRID_AGENT_DISABLED");
        return Ok(());
    }

    let config = ClientConfig::from_env();
    let mut agent = Agent::new(config.table);

    // Connect failure propagates: without a server there is nothing to view.
    let mut client = Client::connect(config)?;
    agent.connected();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut agent, &mut client);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, agent: &mut Agent, client: &mut Client) -> Result<()> {
    let view = GridView;
    let frame_duration = Duration::from_millis(FRAME_MS as u64);

    loop {
        let frame_start = Instant::now();

        // At most one command is applied per frame.
        let mut session_over = false;
        match client.try_recv() {
            Some(SessionEvent::Ready) => {
                agent.handshake_complete();
                info!("session ready");
            }
            Some(SessionEvent::Command(command)) => {
                agent.apply(command);
            }
            Some(SessionEvent::Fault(e)) => {
                warn!(error = %e, "protocol fault, position unchanged");
            }
            Some(SessionEvent::Ended) => {
                agent.terminate();
                info!("session ended");
                session_over = true;
            }
            Some(SessionEvent::Closed) => {
                agent.terminate();
                warn!("connection closed without end signal");
                session_over = true;
            }
            None => {}
        }

        term.draw(&view.render(agent))?;

        if session_over {
            break;
        }

        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(frame_start.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return Ok(());
                }
            }
        }
    }

    // Leave the final frame up until the user dismisses it.
    loop {
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return Ok(());
                }
            }
        }
    }
}

fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
