use std::sync::mpsc;

use greet_core::{update, Msg, SessionState};
use greet_logging::greet_info;

use crate::effects::EffectRunner;
use crate::render::Renderer;

/// Backend base address baked in at compile time, if the build set one.
fn resolve_backend_url() -> Option<String> {
    option_env!("GREET_BACKEND_URL")
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

/// Drives one session: mount, at most one fetch, render until settled.
pub fn run() {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx);

    let mut renderer = Renderer::new(std::io::stdout());
    let mut state = SessionState::new();

    let (next, effects) = update(
        state,
        Msg::Mounted {
            backend_url: resolve_backend_url(),
        },
    );
    state = next;
    renderer.draw(&state.view());
    runner.enqueue(effects);

    while !state.is_settled() {
        // No timeout: a hung request leaves the log in its attempting state.
        let Ok(msg) = msg_rx.recv() else {
            break;
        };
        let (next, effects) = update(state, msg);
        state = next;
        runner.enqueue(effects);
        renderer.draw(&state.view());
    }

    greet_info!("session settled outcome={:?}", state.outcome());
}
