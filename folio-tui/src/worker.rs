//! Background worker thread - the submission service runs here so the
//! delay never blocks rendering.
//!
//! Communication with the TUI main thread is via `mpsc` channels.

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use tracing::{debug, info};

use folio_core::{FormData, SubmissionError, SubmissionService};

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    Submit { data: FormData },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    SubmissionDone {
        result: Result<(), SubmissionError>,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    service: Box<dyn SubmissionService>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("folio-worker".into())
        .spawn(move || worker_loop(rx, tx, service))
}

fn worker_loop(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    service: Box<dyn SubmissionService>,
) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Submit { data }) => {
                debug!(email = %data.email, "worker received submission");
                let result = service.submit(&data);
                if tx.send(WorkerResponse::SubmissionDone { result }).is_err() {
                    break;
                }
            }
        }
    }
    info!("submission worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    use folio_core::SimulatedSubmission;

    struct Refusing;

    impl SubmissionService for Refusing {
        fn submit(&self, _form: &FormData) -> Result<(), SubmissionError> {
            Err(SubmissionError::Rejected("closed".into()))
        }
    }

    fn data() -> FormData {
        FormData {
            name: "Dev".into(),
            email: "dev@example.com".into(),
            service: None,
            budget: 15_500,
            message: "Hi".into(),
        }
    }

    #[test]
    fn submits_and_replies() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = spawn_worker(
            cmd_rx,
            resp_tx,
            Box::new(SimulatedSubmission::new(Duration::from_millis(5))),
        )
        .unwrap();

        cmd_tx.send(WorkerCommand::Submit { data: data() }).unwrap();
        let resp = resp_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(resp, WorkerResponse::SubmissionDone { result: Ok(()) }));

        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn forwards_service_errors() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = spawn_worker(cmd_rx, resp_tx, Box::new(Refusing)).unwrap();

        cmd_tx.send(WorkerCommand::Submit { data: data() }).unwrap();
        let WorkerResponse::SubmissionDone { result } =
            resp_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(result, Err(SubmissionError::Rejected("closed".into())));

        drop(cmd_tx);
        handle.join().unwrap();
    }
}
