//! Board pin layout resolution
//!
//! Maps a detected [`BoardProfile`] and the requested height onto the fixed
//! HUB75 wiring table of that board: 3 to 5 row-select (address) pins, the
//! six color data lines, and the clock/latch/output-enable trio. A caller's
//! `alt_addr_pins` override replaces the derived address pins unconditionally.

use heapless::Vec;
use log::debug;

use crate::board::{Board, BoardProfile, PinName};
use crate::config::MatrixConfig;
use crate::error::ConfigError;

/// Most address pins any wiring table derives (MatrixPortal M4, height > 32)
pub const MAX_ADDR_PINS: usize = 5;

const MATRIX_PORTAL_ADDR: [PinName; 5] = [
    PinName::MtxAddrA,
    PinName::MtxAddrB,
    PinName::MtxAddrC,
    PinName::MtxAddrD,
    PinName::MtxAddrE,
];
const MATRIX_PORTAL_RGB: [PinName; 6] = [
    PinName::MtxR1,
    PinName::MtxG1,
    PinName::MtxB1,
    PinName::MtxR2,
    PinName::MtxG2,
    PinName::MtxB2,
];

const PIN_D7_ADDR: [PinName; 4] = [PinName::A0, PinName::A1, PinName::A2, PinName::A3];
const PIN_D7_RGB: [PinName; 6] = [
    PinName::D2,
    PinName::D3,
    PinName::D4,
    PinName::D5,
    PinName::D6,
    PinName::D7,
];

const FEATHER_ADDR: [PinName; 4] = [PinName::A5, PinName::A4, PinName::A3, PinName::A2];
const FEATHER_RGB: [PinName; 6] = [
    PinName::D6,
    PinName::D5,
    PinName::D9,
    PinName::D11,
    PinName::D10,
    PinName::D12,
];

/// Resolved pin assignment for one initialization
///
/// Derived deterministically from the profile and the configured height;
/// never persisted. Address pins are reachable through
/// [`addr_pins`](Self::addr_pins) whether derived or overridden.
#[derive(Clone, Debug)]
pub struct PinLayout<'a, P: Copy> {
    addr_pins: AddrPins<'a, P>,
    /// The six color data lines: R1, G1, B1, R2, G2, B2
    pub rgb_pins: [P; 6],
    /// Pixel clock
    pub clock_pin: P,
    /// Latch
    pub latch_pin: P,
    /// Output enable
    pub output_enable_pin: P,
}

#[derive(Clone, Debug)]
enum AddrPins<'a, P: Copy> {
    Derived(Vec<P, MAX_ADDR_PINS>),
    Custom(&'a [P]),
}

impl<'a, P: Copy> PinLayout<'a, P> {
    /// Resolve the pin assignment for a profile and configuration
    ///
    /// When `config.alt_addr_pins` is set the derived address table is never
    /// consulted, so the PinD7Style height restriction does not apply.
    ///
    /// # Errors
    ///
    /// - `ConfigError::AddressPinUnavailable` for PinD7Style with
    ///   height <= 16 and no override
    /// - `ConfigError::MissingPin` if the board lacks a pin its wiring
    ///   table names
    pub fn resolve<B>(
        board: &B,
        profile: BoardProfile,
        config: &MatrixConfig<'a, P>,
    ) -> Result<Self, ConfigError>
    where
        B: Board<Pin = P>,
    {
        let addr_pins = match config.alt_addr_pins {
            Some(pins) => AddrPins::Custom(pins),
            None => AddrPins::Derived(derive_addr_pins(board, profile, config.height)?),
        };

        let (rgb_names, clock_name, latch_name, oe_name) = match profile {
            BoardProfile::MatrixPortalM4 => (
                &MATRIX_PORTAL_RGB,
                PinName::MtxClk,
                PinName::MtxLat,
                PinName::MtxOe,
            ),
            BoardProfile::PinD7Style => (&PIN_D7_RGB, PinName::A4, PinName::D10, PinName::D9),
            BoardProfile::FeatherStyle => (&FEATHER_RGB, PinName::D13, PinName::D0, PinName::D1),
        };

        let layout = Self {
            addr_pins,
            rgb_pins: [
                require(board, rgb_names[0])?,
                require(board, rgb_names[1])?,
                require(board, rgb_names[2])?,
                require(board, rgb_names[3])?,
                require(board, rgb_names[4])?,
                require(board, rgb_names[5])?,
            ],
            clock_pin: require(board, clock_name)?,
            latch_pin: require(board, latch_name)?,
            output_enable_pin: require(board, oe_name)?,
        };
        debug!(
            "resolved {} address pins for {profile:?}",
            layout.addr_pins().len()
        );
        Ok(layout)
    }

    /// The row-select pins, derived or overridden
    pub fn addr_pins(&self) -> &[P] {
        match &self.addr_pins {
            AddrPins::Derived(pins) => pins.as_slice(),
            AddrPins::Custom(pins) => *pins,
        }
    }

    /// Whether the address pins come from the caller's override
    pub fn is_custom_addr(&self) -> bool {
        matches!(self.addr_pins, AddrPins::Custom(_))
    }
}

fn require<B: Board>(board: &B, name: PinName) -> Result<B::Pin, ConfigError> {
    board.pin(name).ok_or(ConfigError::MissingPin { pin: name })
}

fn derive_addr_pins<B: Board>(
    board: &B,
    profile: BoardProfile,
    height: u16,
) -> Result<Vec<B::Pin, MAX_ADDR_PINS>, ConfigError> {
    let names: &[PinName] = match profile {
        BoardProfile::MatrixPortalM4 => {
            let mut count = 3;
            if height > 16 {
                count += 1;
            }
            if height > 32 {
                count += 1;
            }
            &MATRIX_PORTAL_ADDR[..count]
        }
        BoardProfile::PinD7Style => {
            // The shield hardwires four row-select lines; A2 is not usable
            // for heights of 16 rows or fewer.
            if height <= 16 {
                return Err(ConfigError::AddressPinUnavailable { pin: PinName::A2 });
            }
            &PIN_D7_ADDR
        }
        BoardProfile::FeatherStyle => {
            let count = if height > 16 { 4 } else { 3 };
            &FEATHER_ADDR[..count]
        }
    };

    let mut pins = Vec::new();
    for &name in names {
        // No table is longer than MAX_ADDR_PINS, so push cannot fail.
        let _ = pins.push(require(board, name)?);
    }
    Ok(pins)
}
