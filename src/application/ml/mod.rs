pub mod model_loader;
#[cfg(feature = "onnx")]
pub mod onnx_predictor;
pub mod predictor;
pub mod smartcore_predictor;

pub use model_loader::{ModelFormat, load_model, model_from_artifact};
pub use predictor::PriceModel;
pub use smartcore_predictor::SmartCorePriceModel;
