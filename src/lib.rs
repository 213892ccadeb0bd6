//! Metaview PDF Metadata Client
//!
//! A client-side controller for a remote PDF metadata extraction service:
//! submit a document, render the returned metadata, download the generated
//! artifact, or reset the view.

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod services;
pub mod view;

pub use config::Config;
pub use controller::{ConsoleNotifier, Controller, Notifier};
pub use error::{ControllerError, ControllerResult};
