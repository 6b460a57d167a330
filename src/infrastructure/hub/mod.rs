pub mod local_file;
pub mod model_hub;

pub use local_file::LocalArtifactSource;
pub use model_hub::HubArtifactSource;
