use super::{ConfigError, DatasetError, ExportError, GeoError, ValidationError};

impl From<&'static str> for ValidationError {
    fn from(message: &'static str) -> Self {
        ValidationError::TestExpectation { message }
    }
}

impl From<String> for ValidationError {
    fn from(value: String) -> Self {
        ValidationError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ConfigError {
    fn from(message: &'static str) -> Self {
        ConfigError::TestExpectation { message }
    }
}

impl From<String> for ConfigError {
    fn from(value: String) -> Self {
        ConfigError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for DatasetError {
    fn from(message: &'static str) -> Self {
        DatasetError::TestExpectation { message }
    }
}

impl From<String> for DatasetError {
    fn from(value: String) -> Self {
        DatasetError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for GeoError {
    fn from(message: &'static str) -> Self {
        GeoError::TestExpectation { message }
    }
}

impl From<String> for GeoError {
    fn from(value: String) -> Self {
        GeoError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}

impl From<&'static str> for ExportError {
    fn from(message: &'static str) -> Self {
        ExportError::TestExpectation { message }
    }
}

impl From<String> for ExportError {
    fn from(value: String) -> Self {
        ExportError::TestExpectationValue {
            message: "Test expectation failed",
            value,
        }
    }
}
