mod types;

pub use types::{ControllerError, ControllerResult};
