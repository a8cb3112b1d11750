use std::sync::{mpsc, Arc};
use std::thread;

use greet_logging::greet_debug;

use crate::fetch::{FetchSettings, Fetcher, ReqwestFetcher};
use crate::EngineEvent;

enum EngineCommand {
    Fetch { url: String },
}

/// Command side of the engine; events arrive on the receiver returned by
/// [`EngineHandle::new`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(ReqwestFetcher::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn fetch(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Fetch { url: url.into() });
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { url } => {
            greet_debug!("fetch started url={}", url);
            let result = fetcher.fetch_message(&url).await;
            let _ = event_tx.send(EngineEvent::FetchCompleted { result });
        }
    }
}
