// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use tether_axis::InvalidAxis;

/// Result alias for fallible frame operations.
pub type FrameResult<T> = Result<T, FrameError>;

/// Errors raised by frame configuration and axis dispatch.
///
/// Both kinds are caller bugs rather than runtime conditions: nothing here is
/// transient, and nothing should be retried.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum FrameError {
    /// An axis token was neither `"x"` nor `"y"`.
    #[error(transparent)]
    InvalidAxis(#[from] InvalidAxis),

    /// A configuration value failed validation; the frame is not created.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl FrameError {
    /// Shorthand for [`FrameError::InvalidConfiguration`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
