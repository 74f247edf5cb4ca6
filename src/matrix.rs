//! Matrix initialization sequence
//!
//! [`MatrixInitializer`] runs the single linear bring-up sequence: detect the
//! board profile, resolve the pin layout, release any prior display claim,
//! construct the scan surface through the driver, and wrap it as a
//! framebuffer display. Either a fully wrapped display comes out, or an error
//! and no handle. Nothing is retried; a driver rejection means the
//! configuration must be corrected and the call repeated.
//!
//! The initializer owns the display exclusively. Reinitializing drops the
//! previous handle before the platform-level release runs, so there is one
//! claim on the panel at a time. Callers must not invoke `initialize` from
//! multiple execution contexts at once.

use log::{debug, info};

use crate::board::{Board, BoardProfile};
use crate::config::MatrixConfig;
use crate::error::Error;
use crate::hardware::{MatrixHardware, SurfaceSpec};
use crate::layout::PinLayout;

/// Board-aware matrix display initializer
///
/// Holds the platform hardware capability and, after a successful
/// [`initialize`](Self::initialize), the framebuffer display object.
pub struct MatrixInitializer<H: MatrixHardware> {
    hardware: H,
    display: Option<H::Display>,
}

impl<H: MatrixHardware> MatrixInitializer<H> {
    /// Create an initializer over the platform hardware
    pub fn new(hardware: H) -> Self {
        Self {
            hardware,
            display: None,
        }
    }

    /// Bring up the matrix display for the given board and configuration
    ///
    /// Detects the board profile, resolves the pin layout (the caller's
    /// `alt_addr_pins` override replaces the derived table), releases any
    /// prior display claim, and constructs and wraps the surface. The
    /// returned reference is also available afterwards through
    /// [`display`](Self::display).
    ///
    /// A display held from a previous call is dropped before construction is
    /// attempted, so a driver failure leaves no handle exposed. A
    /// configuration error returns before the hardware is touched and leaves
    /// an earlier display valid.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if the configuration does not fit the detected
    ///   board; the hardware is untouched
    /// - [`Error::Initialization`] if the driver or framebuffer capability
    ///   rejected the assembled configuration
    pub fn initialize<B>(
        &mut self,
        board: &B,
        config: &MatrixConfig<'_, H::Pin>,
    ) -> Result<&H::Display, Error<H>>
    where
        B: Board<Pin = H::Pin>,
    {
        config.validate()?;

        let profile = BoardProfile::detect(board);
        debug!("detected board profile {profile:?}");
        let layout = PinLayout::resolve(board, profile, config)?;

        // The previous claim must be gone before the driver can bind the
        // pins: our handle first, then the process-wide release.
        self.display = None;
        self.hardware.release_displays();

        let spec = SurfaceSpec {
            width: config.width,
            height: config.height,
            bit_depth: config.bit_depth,
            rgb_pins: layout.rgb_pins,
            addr_pins: layout.addr_pins(),
            clock_pin: layout.clock_pin,
            latch_pin: layout.latch_pin,
            output_enable_pin: layout.output_enable_pin,
        };
        let surface = self
            .hardware
            .create_surface(&spec)
            .map_err(Error::Initialization)?;
        let display = self
            .hardware
            .wrap_framebuffer(surface)
            .map_err(Error::Initialization)?;

        info!(
            "initialized {}x{} matrix, bit depth {}",
            config.width, config.height, config.bit_depth
        );
        Ok(&*self.display.insert(display))
    }

    /// The active display, if initialized
    pub fn display(&self) -> Option<&H::Display> {
        self.display.as_ref()
    }

    /// Mutable access to the active display, if initialized
    pub fn display_mut(&mut self) -> Option<&mut H::Display> {
        self.display.as_mut()
    }

    /// Drop the display and release the platform claim
    ///
    /// Safe to call with no active display.
    pub fn release(&mut self) {
        self.display = None;
        self.hardware.release_displays();
    }

    /// The platform hardware capability
    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    /// Consume the initializer, dropping any held display
    pub fn into_hardware(self) -> H {
        self.hardware
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PinName;
    use crate::config::Builder;
    use crate::error::ConfigError;
    use alloc::vec::Vec;

    struct PortalBoard;

    impl Board for PortalBoard {
        type Pin = PinName;

        fn pin(&self, name: PinName) -> Option<PinName> {
            name.as_str().starts_with("MTX_").then_some(name)
        }
    }

    struct MetroBoard;

    impl Board for MetroBoard {
        type Pin = PinName;

        fn pin(&self, name: PinName) -> Option<PinName> {
            (!name.as_str().starts_with("MTX_")).then_some(name)
        }
    }

    #[derive(Debug)]
    struct RecordedSpec {
        width: u16,
        height: u16,
        bit_depth: u8,
        addr_pins: Vec<PinName>,
    }

    #[derive(Debug)]
    struct MockSurface;

    #[derive(Debug)]
    struct MockDisplay {
        width: u16,
        height: u16,
    }

    #[derive(Debug, Default)]
    struct MockHardware {
        releases: usize,
        created: Vec<RecordedSpec>,
        fail_create: bool,
        fail_wrap: bool,
        last_geometry: Option<(u16, u16)>,
    }

    impl MatrixHardware for MockHardware {
        type Pin = PinName;
        type Surface = MockSurface;
        type Display = MockDisplay;
        type Error = &'static str;

        fn release_displays(&mut self) {
            self.releases += 1;
        }

        fn create_surface(
            &mut self,
            spec: &SurfaceSpec<'_, PinName>,
        ) -> Result<MockSurface, &'static str> {
            self.created.push(RecordedSpec {
                width: spec.width,
                height: spec.height,
                bit_depth: spec.bit_depth,
                addr_pins: spec.addr_pins.to_vec(),
            });
            if self.fail_create {
                return Err("invalid geometry");
            }
            self.last_geometry = Some((spec.width, spec.height));
            Ok(MockSurface)
        }

        fn wrap_framebuffer(&mut self, _surface: MockSurface) -> Result<MockDisplay, &'static str> {
            if self.fail_wrap {
                return Err("framebuffer rejected surface");
            }
            let (width, height) = self.last_geometry.unwrap_or((0, 0));
            Ok(MockDisplay { width, height })
        }
    }

    #[test]
    fn test_initialize_with_defaults() {
        let mut matrix = MatrixInitializer::new(MockHardware::default());
        let config = Builder::new().build().unwrap();

        let display = matrix.initialize(&PortalBoard, &config).unwrap();
        assert_eq!(display.width, 64);
        assert_eq!(display.height, 32);

        let hardware = matrix.hardware();
        assert_eq!(hardware.releases, 1);
        assert_eq!(hardware.created.len(), 1);
        assert_eq!(hardware.created[0].bit_depth, 2);
        assert_eq!(
            hardware.created[0].addr_pins,
            &[PinName::MtxAddrA, PinName::MtxAddrB, PinName::MtxAddrC, PinName::MtxAddrD]
        );
        assert!(matrix.display().is_some());
    }

    #[test]
    fn test_config_error_before_any_hardware_call() {
        let mut matrix = MatrixInitializer::new(MockHardware::default());
        let config = Builder::new().height(16).build().unwrap();

        let result = matrix.initialize(&MetroBoard, &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::AddressPinUnavailable {
                pin: PinName::A2
            }))
        ));

        let hardware = matrix.hardware();
        assert_eq!(hardware.releases, 0);
        assert!(hardware.created.is_empty());
        assert!(matrix.display().is_none());
    }

    #[test]
    fn test_override_bypasses_height_check() {
        let mut matrix = MatrixInitializer::new(MockHardware::default());
        let alt = [PinName::D0, PinName::D1];
        let config = Builder::new().height(16).alt_addr_pins(&alt).build().unwrap();

        assert!(matrix.initialize(&MetroBoard, &config).is_ok());
        assert_eq!(matrix.hardware().created[0].addr_pins, &alt);
    }

    #[test]
    fn test_single_pin_override_wins_on_any_profile() {
        let mut matrix = MatrixInitializer::new(MockHardware::default());
        let alt = [PinName::D3];
        let config = Builder::new().height(64).alt_addr_pins(&alt).build().unwrap();

        assert!(matrix.initialize(&PortalBoard, &config).is_ok());
        assert_eq!(matrix.hardware().created[0].addr_pins, &alt);
    }

    #[test]
    fn test_driver_rejection_is_initialization_error() {
        let mut matrix = MatrixInitializer::new(MockHardware {
            fail_create: true,
            ..MockHardware::default()
        });
        let config = Builder::new().build().unwrap();

        let err = match matrix.initialize(&PortalBoard, &config) {
            Err(err) => err,
            Ok(_) => panic!("expected driver rejection"),
        };
        assert!(matches!(err, Error::Initialization(_)));
        assert_eq!(alloc::format!("{err}"), "Failed to initialize RGB matrix");
        assert_eq!(err.initialization_cause(), Some(&"invalid geometry"));
        assert!(matrix.display().is_none());
    }

    #[test]
    fn test_wrap_rejection_is_initialization_error() {
        let mut matrix = MatrixInitializer::new(MockHardware {
            fail_wrap: true,
            ..MockHardware::default()
        });
        let config = Builder::new().build().unwrap();

        let result = matrix.initialize(&PortalBoard, &config);
        assert!(matches!(result, Err(Error::Initialization(_))));
        assert!(matrix.display().is_none());
    }

    #[test]
    fn test_sequential_initialize_releases_each_time() {
        let mut matrix = MatrixInitializer::new(MockHardware::default());
        let config = Builder::new().build().unwrap();

        assert!(matrix.initialize(&PortalBoard, &config).is_ok());
        assert!(matrix.initialize(&PortalBoard, &config).is_ok());

        assert_eq!(matrix.hardware().releases, 2);
        assert_eq!(matrix.hardware().created.len(), 2);
        assert!(matrix.display().is_some());
    }

    #[test]
    fn test_failed_reinitialize_drops_previous_display() {
        let mut matrix = MatrixInitializer::new(MockHardware::default());
        let config = Builder::new().build().unwrap();

        assert!(matrix.initialize(&PortalBoard, &config).is_ok());
        assert!(matrix.display().is_some());

        // A config error leaves the old display in place; the hardware is
        // untouched.
        let bad = Builder::new().height(16).build().unwrap();
        assert!(matrix.initialize(&MetroBoard, &bad).is_err());
        assert!(matrix.display().is_some());
    }

    #[test]
    fn test_failed_driver_call_leaves_no_display() {
        let mut matrix = MatrixInitializer::new(MockHardware::default());
        let config = Builder::new().build().unwrap();
        assert!(matrix.initialize(&PortalBoard, &config).is_ok());

        matrix.hardware.fail_create = true;
        assert!(matrix.initialize(&PortalBoard, &config).is_err());
        assert!(matrix.display().is_none());
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut matrix = MatrixInitializer::new(MockHardware::default());
        matrix.release();
        matrix.release();
        assert_eq!(matrix.hardware().releases, 2);

        let config = Builder::new().build().unwrap();
        assert!(matrix.initialize(&PortalBoard, &config).is_ok());
        matrix.release();
        assert!(matrix.display().is_none());
    }

    #[test]
    fn test_invalid_geometry_rejected_before_detection() {
        let mut matrix = MatrixInitializer::new(MockHardware::default());
        let config = MatrixConfig::<PinName> {
            width: 0,
            ..MatrixConfig::default()
        };

        let result = matrix.initialize(&PortalBoard, &config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidDimensions { width: 0, .. }))
        ));
        assert!(matrix.hardware().created.is_empty());
    }
}
