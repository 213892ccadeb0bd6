mod artifact;
mod parse_client;

pub use artifact::ArtifactStore;
pub use parse_client::ParseClient;
