pub mod cpu_features;
pub mod float_ext;

pub use float_ext::{Accuracy, FloatExt, relative_accuracy};
