pub mod catalog;
mod classifier;
mod openapi;

pub use classifier::{AnalyzeError, analyze};
