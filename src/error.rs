//! Error types for the initializer
//!
//! This module defines error types for configuration resolution
//! ([`ConfigError`]) and the initialization sequence ([`Error`]).
//!
//! ## Error Types
//!
//! - [`ConfigError`] - Errors raised before any driver call is attempted
//! - [`Error`] - Errors of the full initialization sequence, generic over the
//!   hardware capability so the driver's own error type is preserved
//!
//! ## Example
//!
//! ```
//! use matrix_portal::{Builder, ConfigError, PinName};
//!
//! // Zero height is rejected at build time
//! let result = Builder::<PinName>::new().height(0).build();
//! assert!(matches!(
//!     result,
//!     Err(ConfigError::InvalidDimensions { height: 0, .. })
//! ));
//! ```

use crate::board::PinName;
use crate::hardware::MatrixHardware;

/// Errors that can occur while resolving the configuration
///
/// These errors occur before the matrix driver is invoked; the hardware is
/// untouched when one is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is zero
    InvalidDimensions {
        /// Requested width in pixels
        width: u16,
        /// Requested height in pixels
        height: u16,
    },
    /// Bit depth is zero
    InvalidBitDepth {
        /// Requested bits per color channel
        bit_depth: u8,
    },
    /// The detected wiring scheme cannot drive this geometry
    ///
    /// Raised for PinD7Style boards with height <= 16: the named address pin
    /// is not wired for that scan mode. Supplying
    /// [`alt_addr_pins`](crate::config::Builder::alt_addr_pins) bypasses the
    /// derived table entirely.
    AddressPinUnavailable {
        /// The pin the derived table would need but the wiring lacks
        pin: PinName,
    },
    /// The board does not expose a pin its profile requires
    MissingPin {
        /// The absent pin
        pin: PinName,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions: {width}x{height} (must be non-zero)")
            }
            Self::InvalidBitDepth { bit_depth } => {
                write!(f, "Invalid bit depth: {bit_depth} (must be non-zero)")
            }
            Self::AddressPinUnavailable { pin } => {
                write!(
                    f,
                    "Pin {pin} unavailable in this mode, please specify alt_addr_pins"
                )
            }
            Self::MissingPin { pin } => write!(f, "Board does not expose pin {pin}"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Errors of the full initialization sequence
///
/// Generic over the hardware capability so the driver's own error type is
/// carried in [`Error::Initialization`]. The user-facing message for a driver
/// rejection is deliberately generic; the cause stays reachable through the
/// variant (and [`Error::initialization_cause`]) for diagnostics.
#[derive(Debug)]
pub enum Error<H: MatrixHardware> {
    /// Configuration was rejected before the driver was invoked
    Config(ConfigError),
    /// The driver or framebuffer capability rejected the assembled
    /// pin/geometry configuration
    Initialization(H::Error),
}

impl<H: MatrixHardware> Error<H> {
    /// The underlying driver error, when initialization failed in the driver
    pub fn initialization_cause(&self) -> Option<&H::Error> {
        match self {
            Self::Initialization(cause) => Some(cause),
            Self::Config(_) => None,
        }
    }
}

impl<H: MatrixHardware> From<ConfigError> for Error<H> {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl<H: MatrixHardware> core::fmt::Display for Error<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{err}"),
            Self::Initialization(_) => write!(f, "Failed to initialize RGB matrix"),
        }
    }
}

impl<H: MatrixHardware + core::fmt::Debug> core::error::Error for Error<H> {}
