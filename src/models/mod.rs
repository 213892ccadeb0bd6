mod request;
mod response;

pub use request::{FileSlot, SelectedFile};
pub use response::{ParseResponse, ResultRecord};
