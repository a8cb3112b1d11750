use std::sync::mpsc;
use std::thread;

use greet_core::{Effect, Msg};
use greet_engine::{EngineEvent, EngineHandle, FetchSettings};
use greet_logging::{greet_info, greet_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        let (engine, events) = EngineHandle::new(FetchSettings::default());
        spawn_event_loop(events, msg_tx);
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchMessage { url } => {
                    greet_info!("FetchMessage url={}", url);
                    self.engine.fetch(url);
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            let msg = match event {
                EngineEvent::FetchCompleted { result } => match result {
                    Ok(message) => Msg::FetchSucceeded { message },
                    Err(err) => {
                        greet_warn!("fetch failed: {}", err);
                        Msg::FetchFailed {
                            detail: err.to_string(),
                        }
                    }
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}
