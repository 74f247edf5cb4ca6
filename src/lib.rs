//! Board-aware HUB75 RGB LED matrix initialization
//!
//! Maps a logical matrix configuration (width, height, bit depth, optional
//! custom address pins) onto the fixed wiring scheme of the detected board,
//! releases any prior display claim, constructs the scan-driven surface
//! through the platform's matrix driver, and hands back a framebuffer
//! display object.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - Three wiring schemes: MatrixPortal M4, Metro/Grand Central shield
//!   style, Feather style - selected by pin presence, never configured
//! - `alt_addr_pins` override for nonstandard wiring
//! - `embedded-graphics` draw-target access (with `graphics` feature)
//!
//! The timing-critical matrix scanning itself lives behind the platform's
//! [`MatrixHardware`] implementation; this crate only selects pins and runs
//! the bring-up sequence.
//!
//! ## Usage
//!
//! ```rust
//! use matrix_portal::{
//!     Board, Builder, MatrixHardware, MatrixInitializer, PinName, SurfaceSpec,
//! };
//! # use core::convert::Infallible;
//! # struct MyBoard;
//! # impl Board for MyBoard {
//! #     type Pin = PinName;
//! #     fn pin(&self, name: PinName) -> Option<PinName> {
//! #         name.as_str().starts_with("MTX_").then_some(name)
//! #     }
//! # }
//! # struct MyHardware;
//! # struct Surface;
//! # struct Display;
//! # impl MatrixHardware for MyHardware {
//! #     type Pin = PinName;
//! #     type Surface = Surface;
//! #     type Display = Display;
//! #     type Error = Infallible;
//! #     fn release_displays(&mut self) {}
//! #     fn create_surface(
//! #         &mut self,
//! #         _spec: &SurfaceSpec<'_, PinName>,
//! #     ) -> Result<Surface, Infallible> {
//! #         Ok(Surface)
//! #     }
//! #     fn wrap_framebuffer(&mut self, _surface: Surface) -> Result<Display, Infallible> {
//! #         Ok(Display)
//! #     }
//! # }
//! # let board = MyBoard;
//! # let hardware = MyHardware;
//! let config = match Builder::new().width(64).height(32).bit_depth(2).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut matrix = MatrixInitializer::new(hardware);
//! match matrix.initialize(&board, &config) {
//!     Ok(_display) => { /* draw through the display object */ }
//!     Err(err) => { /* correct the configuration and re-invoke */ let _ = err; }
//! }
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Board profiles, pin names, and capability detection
pub mod board;
/// Display configuration types and builder
pub mod config;
/// Error types for the initializer
pub mod error;
/// Hardware capability abstraction
pub mod hardware;
/// Board pin layout resolution
pub mod layout;
/// Matrix initialization sequence
pub mod matrix;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use board::{Board, BoardProfile, PinName};
pub use config::{Builder, DEFAULT_BIT_DEPTH, DEFAULT_HEIGHT, DEFAULT_WIDTH, MatrixConfig};
pub use error::{ConfigError, Error};
pub use hardware::{MatrixHardware, SurfaceSpec};
pub use layout::{MAX_ADDR_PINS, PinLayout};
pub use matrix::MatrixInitializer;
