//! embedded-graphics integration (requires `graphics` feature)
//!
//! Pixel drawing is out of scope for this crate; the display object the
//! platform hands back is what higher-level graphics code draws into. When
//! that object implements [`DrawTarget`] over [`Rgb888`], the initializer
//! exposes it directly as a draw target.

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::pixelcolor::Rgb888;

use crate::hardware::MatrixHardware;
use crate::matrix::MatrixInitializer;

impl<H> MatrixInitializer<H>
where
    H: MatrixHardware,
    H::Display: DrawTarget<Color = Rgb888>,
{
    /// The active display as an embedded-graphics draw target, if initialized
    pub fn draw_target(&mut self) -> Option<&mut H::Display> {
        self.display_mut()
    }
}
