// SPDX-License-Identifier: Apache-2.0 OR MIT
use thiserror::Error;

/// Failures raised while turning helper arguments into markup.
///
/// The engine crates translate these into their own render errors, so the
/// messages are written to stand on their own inside a template error report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{helper}: missing required argument `{argument}`")]
    MissingArgument {
        helper: &'static str,
        argument: &'static str,
    },
    #[error("{helper}: {message}")]
    InvalidArgument {
        helper: &'static str,
        message: String,
    },
    #[error("{helper} used outside of an x-if chain")]
    ConditionOutsideChain { helper: &'static str },
}

impl Error {
    pub fn missing(helper: &'static str, argument: &'static str) -> Self {
        Error::MissingArgument { helper, argument }
    }

    pub fn invalid(helper: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            helper,
            message: message.into(),
        }
    }
}
