//! Board profiles and pin identity
//!
//! A board profile is a fixed HUB75 wiring scheme. The profile is not
//! configured by the caller; it is detected by probing which named pins the
//! board exposes, in a fixed priority order:
//!
//! 1. [`BoardProfile::MatrixPortalM4`] if `MTX_ADDRA` exists (dedicated
//!    matrix header)
//! 2. [`BoardProfile::PinD7Style`] if `D7` exists (Metro / Grand Central
//!    style shield wiring)
//! 3. [`BoardProfile::FeatherStyle`] otherwise (fallback, no probe needed)
//!
//! The platform layer provides the probe by implementing [`Board`].

/// Named pins a board may expose
///
/// Only the pins referenced by the three wiring schemes are listed. The
/// `Mtx*` names are the dedicated matrix header of the MatrixPortal M4; the
/// `A*`/`D*` names are the usual Arduino-style analog and digital positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinName {
    /// Matrix header address line A
    MtxAddrA,
    /// Matrix header address line B
    MtxAddrB,
    /// Matrix header address line C
    MtxAddrC,
    /// Matrix header address line D
    MtxAddrD,
    /// Matrix header address line E
    MtxAddrE,
    /// Matrix header red data, upper half
    MtxR1,
    /// Matrix header green data, upper half
    MtxG1,
    /// Matrix header blue data, upper half
    MtxB1,
    /// Matrix header red data, lower half
    MtxR2,
    /// Matrix header green data, lower half
    MtxG2,
    /// Matrix header blue data, lower half
    MtxB2,
    /// Matrix header pixel clock
    MtxClk,
    /// Matrix header latch
    MtxLat,
    /// Matrix header output enable
    MtxOe,
    /// Analog pin A0
    A0,
    /// Analog pin A1
    A1,
    /// Analog pin A2
    A2,
    /// Analog pin A3
    A3,
    /// Analog pin A4
    A4,
    /// Analog pin A5
    A5,
    /// Digital pin D0
    D0,
    /// Digital pin D1
    D1,
    /// Digital pin D2
    D2,
    /// Digital pin D3
    D3,
    /// Digital pin D4
    D4,
    /// Digital pin D5
    D5,
    /// Digital pin D6
    D6,
    /// Digital pin D7
    D7,
    /// Digital pin D9
    D9,
    /// Digital pin D10
    D10,
    /// Digital pin D11
    D11,
    /// Digital pin D12
    D12,
    /// Digital pin D13
    D13,
}

impl PinName {
    /// Conventional silkscreen name of the pin
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MtxAddrA => "MTX_ADDRA",
            Self::MtxAddrB => "MTX_ADDRB",
            Self::MtxAddrC => "MTX_ADDRC",
            Self::MtxAddrD => "MTX_ADDRD",
            Self::MtxAddrE => "MTX_ADDRE",
            Self::MtxR1 => "MTX_R1",
            Self::MtxG1 => "MTX_G1",
            Self::MtxB1 => "MTX_B1",
            Self::MtxR2 => "MTX_R2",
            Self::MtxG2 => "MTX_G2",
            Self::MtxB2 => "MTX_B2",
            Self::MtxClk => "MTX_CLK",
            Self::MtxLat => "MTX_LAT",
            Self::MtxOe => "MTX_OE",
            Self::A0 => "A0",
            Self::A1 => "A1",
            Self::A2 => "A2",
            Self::A3 => "A3",
            Self::A4 => "A4",
            Self::A5 => "A5",
            Self::D0 => "D0",
            Self::D1 => "D1",
            Self::D2 => "D2",
            Self::D3 => "D3",
            Self::D4 => "D4",
            Self::D5 => "D5",
            Self::D6 => "D6",
            Self::D7 => "D7",
            Self::D9 => "D9",
            Self::D10 => "D10",
            Self::D11 => "D11",
            Self::D12 => "D12",
            Self::D13 => "D13",
        }
    }
}

impl core::fmt::Display for PinName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board pin-identity provider
///
/// The platform layer implements this for its board definition. `pin` returns
/// the board's identifier for a named pin, or `None` if the board does not
/// expose that pin. Presence of a pin doubles as the capability probe used by
/// [`BoardProfile::detect`].
pub trait Board {
    /// Opaque pin identifier handed through to the matrix driver
    type Pin: Copy;

    /// Look up a named pin, `None` if the board does not expose it
    fn pin(&self, name: PinName) -> Option<Self::Pin>;
}

/// Fixed HUB75 wiring scheme of a detected board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardProfile {
    /// MatrixPortal M4 with its dedicated matrix header
    MatrixPortalM4,
    /// Metro / Grand Central style board wired through a matrix shield
    PinD7Style,
    /// Feather style board, the default when no probe pin matches
    FeatherStyle,
}

impl BoardProfile {
    /// Detect the active profile by pin presence
    ///
    /// Exactly one profile is selected, first match in priority order:
    /// `MTX_ADDRA` wins over `D7`, and FeatherStyle is the fallback.
    pub fn detect<B: Board>(board: &B) -> Self {
        if board.pin(PinName::MtxAddrA).is_some() {
            Self::MatrixPortalM4
        } else if board.pin(PinName::D7).is_some() {
            Self::PinD7Style
        } else {
            Self::FeatherStyle
        }
    }
}
