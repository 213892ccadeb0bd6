use thiserror::Error;

pub type ControllerResult<T> = Result<T, ControllerError>;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("No file selected for upload")]
    MissingInput,

    #[error("Server returned zero results")]
    EmptyResult,

    #[error("Parse request failed: {message}")]
    RequestFailed { message: String },

    #[error("No file name available for download")]
    NoFileSelected,

    #[error("Download failed: {message}")]
    DownloadFailed { message: String },

    #[error("Configuration defect: {message}")]
    Config { message: String },
}

impl ControllerError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ControllerError::MissingInput => "MISSING_INPUT",
            ControllerError::EmptyResult => "EMPTY_RESULT",
            ControllerError::RequestFailed { .. } => "REQUEST_FAILED",
            ControllerError::NoFileSelected => "NO_FILE_SELECTED",
            ControllerError::DownloadFailed { .. } => "DOWNLOAD_FAILED",
            ControllerError::Config { .. } => "CONFIG_DEFECT",
        }
    }

    /// Text shown in the blocking notification for user-triggered workflows.
    pub fn user_message(&self) -> &'static str {
        match self {
            ControllerError::MissingInput => "Please upload a PDF file.",
            ControllerError::EmptyResult => "Error: No results returned from the server.",
            ControllerError::RequestFailed { .. } => "An error occurred while parsing the PDF.",
            ControllerError::NoFileSelected => "No file name available for download.",
            ControllerError::DownloadFailed { .. } => "Failed to download the JSON file.",
            ControllerError::Config { .. } => "Internal configuration error.",
        }
    }

    /// Config defects are deployment bugs, logged but never alerted.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, ControllerError::Config { .. })
    }
}

// Convert common errors to ControllerError
impl From<serde_json::Error> for ControllerError {
    fn from(err: serde_json::Error) -> Self {
        ControllerError::RequestFailed {
            message: format!("JSON parsing error: {}", err),
        }
    }
}

impl From<std::io::Error> for ControllerError {
    fn from(err: std::io::Error) -> Self {
        ControllerError::DownloadFailed {
            message: format!("IO error: {}", err),
        }
    }
}

// Helper methods for creating specific errors
impl ControllerError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        ControllerError::RequestFailed {
            message: message.into(),
        }
    }

    pub fn download_failed(message: impl Into<String>) -> Self {
        ControllerError::DownloadFailed {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ControllerError::Config {
            message: message.into(),
        }
    }
}
