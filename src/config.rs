//! Display configuration types and builder

pub use crate::error::ConfigError;

/// Default matrix width in pixels
pub const DEFAULT_WIDTH: u16 = 64;
/// Default matrix height in pixels
pub const DEFAULT_HEIGHT: u16 = 32;
/// Default bits per color channel
pub const DEFAULT_BIT_DEPTH: u8 = 2;

/// Logical matrix configuration
///
/// One immutable input per initialization call. Width, height, and bit depth
/// are handed through to the driver uninterpreted; height additionally drives
/// how many address pins the wiring tables derive. Use [`Builder`] to create
/// a validated configuration.
///
/// `P` is the board's pin identifier type; `alt_addr_pins` borrows from the
/// caller for the duration of the call.
#[derive(Clone, Copy, Debug)]
pub struct MatrixConfig<'a, P> {
    /// Width of the display in pixels
    pub width: u16,
    /// Height of the display in pixels
    pub height: u16,
    /// Bits per color channel
    pub bit_depth: u8,
    /// Alternate address pins, replacing the derived table entirely
    pub alt_addr_pins: Option<&'a [P]>,
}

impl<P> Default for MatrixConfig<'_, P> {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            bit_depth: DEFAULT_BIT_DEPTH,
            alt_addr_pins: None,
        }
    }
}

impl<P> MatrixConfig<'_, P> {
    /// Check the geometry constraints
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDimensions` if width or height is zero,
    /// `ConfigError::InvalidBitDepth` if the bit depth is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.bit_depth == 0 {
            return Err(ConfigError::InvalidBitDepth {
                bit_depth: self.bit_depth,
            });
        }
        Ok(())
    }
}

/// Builder for constructing a matrix configuration
///
/// All fields have defaults (64x32, 2 bit); setting any of them is optional.
///
/// # Example
///
/// ```rust
/// use matrix_portal::{Builder, PinName};
///
/// let config = match Builder::<PinName>::new().width(64).height(64).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.bit_depth, 2);
/// ```
#[must_use]
pub struct Builder<'a, P> {
    /// Width of the display in pixels
    width: u16,
    /// Height of the display in pixels
    height: u16,
    /// Bits per color channel
    bit_depth: u8,
    /// Alternate address pins
    alt_addr_pins: Option<&'a [P]>,
}

impl<P> Default for Builder<'_, P> {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            bit_depth: DEFAULT_BIT_DEPTH,
            alt_addr_pins: None,
        }
    }
}

impl<'a, P> Builder<'a, P> {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display width in pixels
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set display height in pixels
    ///
    /// Heights above 16 (and, on the MatrixPortal M4, above 32) widen the
    /// derived address-pin table.
    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    /// Set bits per color channel
    pub fn bit_depth(mut self, bit_depth: u8) -> Self {
        self.bit_depth = bit_depth;
        self
    }

    /// Use a custom address-pin set instead of the board's wiring table
    ///
    /// The override replaces the derived pins unconditionally, at any length,
    /// and no length validation is performed; the driver checks the final
    /// assignment against the geometry.
    pub fn alt_addr_pins(mut self, pins: &'a [P]) -> Self {
        self.alt_addr_pins = Some(pins);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDimensions` or
    /// `ConfigError::InvalidBitDepth` if a zero value was set.
    pub fn build(self) -> Result<MatrixConfig<'a, P>, ConfigError> {
        let config = MatrixConfig {
            width: self.width,
            height: self.height,
            bit_depth: self.bit_depth,
            alt_addr_pins: self.alt_addr_pins,
        };
        config.validate()?;
        Ok(config)
    }
}
