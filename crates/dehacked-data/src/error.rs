//! Errors that abandon the rest of a patch.
//!
//! End of input and unrecognized section headers are not errors: the line
//! reader reports the former as `None` and [`crate::section::Section`]
//! classifies the latter as `Unknown`.

#[derive(Debug, thiserror::Error)]
pub enum DehError {
    #[error("line {line}: {msg}")]
    Syntax { line: usize, msg: String },
}

impl DehError {
    pub fn syntax(line: usize, msg: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            msg: msg.into(),
        }
    }
}
