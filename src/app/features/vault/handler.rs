use crate::app::{action::Action, command::Command};
use crate::domain::models::FetchOutcome;
use crate::domain::vault::VaultClient;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Execute a command on a background task, reporting back as actions.
/// Nothing here is awaited by the caller: responses race freely and the
/// reducer applies whichever lands last (last-write-wins).
pub fn handle_command(command: Command, client: Arc<dyn VaultClient>, tx: mpsc::Sender<Action>) {
    match command {
        Command::LoadServices => {
            tokio::spawn(async move {
                match client.list_services().await {
                    Ok(services) => {
                        let _ = tx.send(Action::ServicesLoaded(Box::new(services))).await;
                    }
                    Err(e) => {
                        let _ = tx
                            .send(Action::ErrorOccurred(format!(
                                "Failed to load service list: {e:#}"
                            )))
                            .await;
                    }
                }
            });
        }
        Command::FetchEntry(index) => {
            tokio::spawn(async move {
                match client.fetch_entry(index).await {
                    Ok(FetchOutcome::Entry(record)) => {
                        let _ = tx.send(Action::EntryLoaded(index, Box::new(record))).await;
                    }
                    Ok(FetchOutcome::Rejected(message)) => {
                        let _ = tx.send(Action::FetchRejected(message)).await;
                    }
                    Err(e) => {
                        let _ = tx.send(Action::FetchFailed(format!("{e:#}"))).await;
                    }
                }
            });
        }
    }
}
