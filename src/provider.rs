use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::scouting_fetch;
use crate::state::{Delta, ProviderCommand};

/// Runs analysis requests off the UI thread. The thread exits once every
/// command sender is dropped.
pub fn spawn_scout_provider(
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
    api_base: String,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let _ = tx.send(Delta::Log(format!("[INFO] Analytics backend: {api_base}")));

        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                ProviderCommand::Analyze { seq, request } => {
                    let delta = match scouting_fetch::analyze_players(&api_base, &request) {
                        Ok(report) => Delta::AnalysisReady { seq, report },
                        Err(err) => Delta::AnalysisFailed {
                            seq,
                            detail: format!("{err:#}"),
                        },
                    };
                    if tx.send(delta).is_err() {
                        return;
                    }
                }
            }
        }
    })
}
