//! Hardware capability abstraction
//!
//! This module provides the [`MatrixHardware`] trait, the seam between the
//! initializer and the platform: the process-wide display release, the
//! scan-driven matrix driver, and the framebuffer wrapper are all supplied by
//! the platform layer behind this one trait.
//!
//! ## Implementing
//!
//! A platform binding maps the three methods onto its vendor driver:
//! `release_displays` onto the global display release (must be safe to call
//! when nothing is claimed), `create_surface` onto the matrix driver's
//! constructor, and `wrap_framebuffer` onto the framebuffer display wrapper.
//! The driver validates pin/geometry consistency itself; this crate only
//! assembles the assignment.

use core::fmt::Debug;

/// Assembled pin and geometry assignment for one surface construction
///
/// Borrowed views into the resolved [`PinLayout`](crate::layout::PinLayout)
/// and the caller's configuration; lives for one `create_surface` call.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceSpec<'a, P: Copy> {
    /// Width of the display in pixels
    pub width: u16,
    /// Height of the display in pixels
    pub height: u16,
    /// Bits per color channel
    pub bit_depth: u8,
    /// The six color data lines: R1, G1, B1, R2, G2, B2
    pub rgb_pins: [P; 6],
    /// Row-select lines, 3 to 5 derived entries or the caller's override
    pub addr_pins: &'a [P],
    /// Pixel clock
    pub clock_pin: P,
    /// Latch
    pub latch_pin: P,
    /// Output enable
    pub output_enable_pin: P,
}

/// Platform capabilities needed to bring up a matrix display
///
/// The associated types tie the board's pin identifiers to the driver's
/// surface and display objects. `Error` covers both construction and
/// wrapping; the initializer reports it behind a generic message while
/// keeping it reachable for diagnostics.
pub trait MatrixHardware {
    /// Pin identifier accepted by the driver
    type Pin: Copy;
    /// Scan-driven pixel surface produced by the driver
    type Surface;
    /// Framebuffer display object handed to the caller
    type Display;
    /// Error of surface construction and framebuffer wrapping
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Release any currently claimed display resource
    ///
    /// Must be idempotent: calling with no active claim is a no-op.
    fn release_displays(&mut self);

    /// Construct the scan-driven matrix surface
    ///
    /// # Errors
    ///
    /// Returns the driver's error if the assembled pin/geometry combination
    /// is invalid.
    fn create_surface(&mut self, spec: &SurfaceSpec<'_, Self::Pin>)
    -> Result<Self::Surface, Self::Error>;

    /// Wrap a surface as a framebuffer display object
    ///
    /// Consumes the surface; the returned display owns it exclusively.
    ///
    /// # Errors
    ///
    /// Returns the platform's error if the surface cannot be bound.
    fn wrap_framebuffer(&mut self, surface: Self::Surface) -> Result<Self::Display, Self::Error>;
}
