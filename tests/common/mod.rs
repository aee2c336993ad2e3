pub mod fixtures;
pub mod pptx_assertions;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
