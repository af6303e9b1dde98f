// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Reasons a color could not be constructed.
///
/// Channel and opacity values are clamped rather than rejected, so the
/// only way to fail is a hex string of the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// After trimming and dropping a leading `#`, the input was not exactly
    /// six hexadecimal digits. `input` holds that cleaned form.
    #[error("malformed hex color {input:?}: expected 6 hexadecimal digits")]
    MalformedHex { input: String },
}
