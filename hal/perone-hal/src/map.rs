//! Bank registry and pin lookup
//!
//! Two constant tables describe a chip's pin topology: the bank registry
//! (the register addresses of each GPIO bank) and the pin lookup table
//! (which bank and bit each logical pin number lives on). The logical
//! numbering is an external convention overlaid on the physical topology;
//! keeping the tables separate lets the resolver walk both directions -
//! number to registers on the fast path, registers back to number for
//! tooling and debugging.
//!
//! All three register addresses of a bank always come from the table.
//! They happen to be contiguous on the reference chip, but the resolver
//! never assumes that.

use crate::pin::{Direction, Level, PinState, ResolvedPin};
use crate::registers::RegisterFile;

/// One GPIO bank: the I/O addresses of its three control registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bank {
    /// PINx input register
    pub pin: u8,
    /// DDRx direction register
    pub ddr: u8,
    /// PORTx output / pull-up register
    pub port: u8,
}

/// One logical pin: its bank and bit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinEntry {
    /// Index into the bank registry
    pub bank: u8,
    /// Bit position within the bank registers (0-7)
    pub bit: u8,
}

/// Error from pin resolution or allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Register address matches no bank
    UnknownRegister,
    /// Bit position greater than 7
    BitOutOfRange,
    /// No logical pin for this (bank, bit) pair, or number out of range
    NoSuchLogicalPin,
    /// Logical pin already claimed from the allocator
    AlreadyInUse,
}

/// The fixed pin topology of a chip.
///
/// Chip crates export one of these as a `const`; see
/// `perone-hal-atmega328p` for the reference instance.
#[derive(Debug, Clone, Copy)]
pub struct PinMap {
    /// Bank registry
    pub banks: &'static [Bank],
    /// Pin lookup table, indexed by logical pin number
    pub pins: &'static [PinEntry],
}

impl PinMap {
    /// Number of logical pins in the map.
    pub const fn len(&self) -> usize {
        self.pins.len()
    }

    /// Whether the map defines no pins.
    pub const fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Resolve a (PIN-register address, bit) pair back to a pin.
    ///
    /// The reverse path: searches the bank registry for a bank whose input
    /// register matches `pin_reg`, validates the bit position, then
    /// searches the lookup table for the logical pin on that (bank, bit).
    /// A bank bit with no logical pin assigned fails with
    /// [`PinError::NoSuchLogicalPin`] even though bank and bit are
    /// individually valid.
    pub fn resolve(&self, pin_reg: u8, bit: u8) -> Result<ResolvedPin, PinError> {
        // Bit range first: an impossible bit is reported as such no matter
        // what address it came with.
        if bit > 7 {
            return Err(PinError::BitOutOfRange);
        }

        let bank_idx = self
            .banks
            .iter()
            .position(|b| b.pin == pin_reg)
            .ok_or(PinError::UnknownRegister)?;

        let logical = self
            .pins
            .iter()
            .position(|e| usize::from(e.bank) == bank_idx && e.bit == bit)
            .ok_or(PinError::NoSuchLogicalPin)?;

        let bank = &self.banks[bank_idx];
        Ok(ResolvedPin {
            logical: logical as u8,
            pin_reg: bank.pin,
            ddr_reg: bank.ddr,
            port_reg: bank.port,
            bit,
            mask: 1 << bit,
        })
    }

    /// Resolve a logical pin number.
    ///
    /// The fast path: a direct index into the lookup table, no searching.
    pub fn resolve_logical(&self, n: u8) -> Result<ResolvedPin, PinError> {
        let entry = self
            .pins
            .get(usize::from(n))
            .ok_or(PinError::NoSuchLogicalPin)?;
        let bank = self
            .banks
            .get(usize::from(entry.bank))
            .ok_or(PinError::NoSuchLogicalPin)?;

        Ok(ResolvedPin {
            logical: n,
            pin_reg: bank.pin,
            ddr_reg: bank.ddr,
            port_reg: bank.port,
            bit: entry.bit,
            mask: 1 << entry.bit,
        })
    }

    /// Set the direction of logical pin `n`.
    ///
    /// Like the other by-number operations below, this resolves a
    /// transient descriptor, applies the operation, and discards it.
    pub fn set_direction(
        &self,
        regs: &impl RegisterFile,
        n: u8,
        dir: Direction,
    ) -> Result<(), PinError> {
        self.resolve_logical(n).map(|p| p.set_direction(regs, dir))
    }

    /// Set the output level of logical pin `n`.
    pub fn set_level(&self, regs: &impl RegisterFile, n: u8, level: Level) -> Result<(), PinError> {
        self.resolve_logical(n).map(|p| p.set_level(regs, level))
    }

    /// Read the input level of logical pin `n`.
    pub fn level(&self, regs: &impl RegisterFile, n: u8) -> Result<Level, PinError> {
        self.resolve_logical(n).map(|p| p.level(regs))
    }

    /// Enable or disable the pull-up of logical pin `n`.
    pub fn set_pull_up(
        &self,
        regs: &impl RegisterFile,
        n: u8,
        enabled: bool,
    ) -> Result<(), PinError> {
        self.resolve_logical(n).map(|p| p.set_pull_up(regs, enabled))
    }

    /// Set logical pin `n` to one of the four pin states.
    pub fn set_state(
        &self,
        regs: &impl RegisterFile,
        n: u8,
        state: PinState,
    ) -> Result<(), PinError> {
        self.resolve_logical(n).map(|p| p.set_state(regs, state))
    }
}
