use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed XML: {source}")]
    Xml {
        #[source]
        source: roxmltree::Error,
    },
    #[error("Race file does not contain a <race> element.")]
    MissingRace,
    #[error("Race file does not contain a <course> element.")]
    MissingCourse,
    #[error("Course ratio '{value}' is not a positive number and no aspect_ratio override is set.")]
    InvalidRatio { value: String },
    #[error("Invalid color '{value}'. Expected '#rrggbb' or '#rgb'.")]
    InvalidColor { value: String },
    #[error("Race does not contain a single valid position sample.")]
    NoSamples,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
