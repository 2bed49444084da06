//! Document model error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}
