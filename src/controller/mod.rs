use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::error::{ControllerError, ControllerResult};
use crate::models::{FileSlot, SelectedFile};
use crate::services::{ArtifactStore, ParseClient};
use crate::view::DisplayState;

/// Blocking-notification surface for workflow errors. The CLI front end
/// prints to stderr; tests record the messages instead.
pub trait Notifier {
    fn alert(&self, message: &str);
}

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("[!] {}", message);
    }
}

/// Drives the single parse / render / download / reset workflow against the
/// extraction service. Each entry point is triggered by a distinct user
/// action; nothing here runs concurrently with anything else.
pub struct Controller<N: Notifier> {
    client: ParseClient,
    artifacts: ArtifactStore,
    notifier: N,
    display: DisplayState,
    file_input: Option<FileSlot>,
}

impl<N: Notifier> Controller<N> {
    pub fn new(client: ParseClient, artifacts: ArtifactStore, notifier: N) -> Self {
        Self::with_file_input(client, artifacts, notifier, Some(FileSlot::new()))
    }

    /// Wires the controller against an explicit file-selection slot. Passing
    /// `None` models a deployment where the expected input is missing, which
    /// `reset` reports as an integrity defect.
    pub fn with_file_input(
        client: ParseClient,
        artifacts: ArtifactStore,
        notifier: N,
        file_input: Option<FileSlot>,
    ) -> Self {
        Self {
            client,
            artifacts,
            notifier,
            display: DisplayState::new(),
            file_input,
        }
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file_input.as_ref().and_then(|slot| slot.current())
    }

    /// Places a file in the selection slot, replacing any prior choice.
    pub fn select_file(&mut self, file: SelectedFile) -> ControllerResult<()> {
        match self.file_input.as_mut() {
            Some(slot) => {
                info!(file_name = %file.name, file_size = file.size(), "File selected");
                slot.select(file);
                Ok(())
            }
            None => {
                let err = ControllerError::config("file input not wired");
                error!(error_code = err.error_code(), "Cannot select a file without an input slot");
                Err(err)
            }
        }
    }

    /// Submits the selected file to the parse endpoint and renders the
    /// first returned record. The display is mutated only on the success
    /// path; every failure leaves it exactly as it was.
    pub async fn submit(&mut self) -> ControllerResult<()> {
        let request_id = request_id();

        let Some(file) = self.file_input.as_ref().and_then(|slot| slot.current()) else {
            let err = ControllerError::MissingInput;
            self.report(&request_id, &err);
            return Err(err);
        };

        info!(
            request_id = %request_id,
            file_name = %file.name,
            file_size = file.size(),
            "Submitting document for parsing"
        );

        let response = match self.client.parse(file).await {
            Ok(response) => response,
            Err(err) => {
                self.report(&request_id, &err);
                return Err(err);
            }
        };

        match response.first_result() {
            Some(record) => {
                info!(
                    request_id = %request_id,
                    result_count = response.results.len(),
                    "Parse completed, rendering first result"
                );
                self.display.set(record);
                Ok(())
            }
            None => {
                let err = ControllerError::EmptyResult;
                self.report(&request_id, &err);
                Err(err)
            }
        }
    }

    /// Downloads the metadata artifact for the currently rendered file name
    /// and saves it as `{file_name}_metadata.json`. Never contacts the
    /// server while the file name field is empty or shows the placeholder.
    pub async fn retrieve(&mut self) -> ControllerResult<PathBuf> {
        let request_id = request_id();

        let Some(file_name) = self.display.rendered_file_name().map(str::to_string) else {
            let err = ControllerError::NoFileSelected;
            self.report(&request_id, &err);
            return Err(err);
        };

        info!(request_id = %request_id, file_name = %file_name, "Downloading metadata artifact");

        let payload = match self.client.download(&file_name).await {
            Ok(payload) => payload,
            Err(err) => {
                self.report(&request_id, &err);
                return Err(err);
            }
        };

        match self.artifacts.save_metadata(&file_name, &payload) {
            Ok(path) => {
                info!(
                    request_id = %request_id,
                    path = %path.display(),
                    size = payload.len(),
                    "Artifact saved"
                );
                Ok(path)
            }
            Err(err) => {
                self.report(&request_id, &err);
                Err(err)
            }
        }
    }

    /// Clears every rendered field, hides the results, and restores the
    /// file-selection slot to a pristine state. Always succeeds from the
    /// user's perspective; a missing slot is logged as a deployment defect.
    pub fn reset(&mut self) {
        self.display.clear();

        match self.file_input.as_mut() {
            Some(slot) => slot.reset(),
            None => {
                let err = ControllerError::config("file input element not found");
                error!(error_code = err.error_code(), "File input missing during reset");
            }
        }
    }

    fn report(&self, request_id: &str, err: &ControllerError) {
        if err.is_user_facing() {
            warn!(
                request_id = %request_id,
                error_code = err.error_code(),
                error = %err,
                "Workflow error"
            );
            self.notifier.alert(err.user_message());
        } else {
            error!(
                request_id = %request_id,
                error_code = err.error_code(),
                error = %err,
                "Integrity defect"
            );
        }
    }
}

fn request_id() -> String {
    uuid::Uuid::new_v4().to_string()[..8].to_string()
}
