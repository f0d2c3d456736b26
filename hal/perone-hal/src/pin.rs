//! Resolved pin descriptor and register operations
//!
//! A [`ResolvedPin`] is produced by the resolvers in [`crate::map`] and
//! carries the three register addresses of its bank plus the bit mask. Its
//! existence is proof that resolution succeeded, so the operations here
//! cannot fail and take the descriptor by shared reference.
//!
//! Every read-modify-write sequence runs inside `critical_section::with`.
//! The original target is a single-core chip without an OS, but an
//! interrupt handler touching the same bank between the read and the write
//! would lose one of the updates, so the whole sequence is kept atomic.

use crate::registers::RegisterFile;

/// Pin direction (the DDR bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Input (DDR bit 0)
    Input,
    /// Output (DDR bit 1)
    Output,
}

/// Logical level of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic low / 0
    Low,
    /// Logic high / 1
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Complete pin configuration: the four (direction, output) combinations.
///
/// On AVR the PORT bit doubles as the pull-up enable while the pin is an
/// input, so these four states cover everything a GPIO pin can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// Input, pull-up off (high impedance): DDR 0, PORT 0
    Floating,
    /// Input with the internal pull-up enabled: DDR 0, PORT 1
    PullUp,
    /// Output driven low: DDR 1, PORT 0
    OutputLow,
    /// Output driven high: DDR 1, PORT 1
    OutputHigh,
}

/// A validated pin: resolved register addresses and bit mask.
///
/// Constructed only by [`PinMap::resolve`] and [`PinMap::resolve_logical`];
/// there is no way to hold one for a pin that does not exist.
///
/// [`PinMap::resolve`]: crate::map::PinMap::resolve
/// [`PinMap::resolve_logical`]: crate::map::PinMap::resolve_logical
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResolvedPin {
    /// Logical pin number this descriptor resolves
    pub logical: u8,
    /// PINx input register address
    pub pin_reg: u8,
    /// DDRx direction register address
    pub ddr_reg: u8,
    /// PORTx output register address
    pub port_reg: u8,
    /// Bit position within the bank registers (0-7)
    pub bit: u8,
    /// `1 << bit`, used for all register updates
    pub mask: u8,
}

impl ResolvedPin {
    /// Set or clear the pin's bit in the direction register.
    pub fn set_direction(&self, regs: &impl RegisterFile, dir: Direction) {
        critical_section::with(|_| {
            let v = regs.read(self.ddr_reg);
            match dir {
                Direction::Output => regs.write(self.ddr_reg, v | self.mask),
                Direction::Input => regs.write(self.ddr_reg, v & !self.mask),
            }
        });
    }

    /// Set or clear the pin's bit in the output register.
    ///
    /// Drives the pin when it is an output; controls the pull-up when it
    /// is an input.
    pub fn set_level(&self, regs: &impl RegisterFile, level: Level) {
        critical_section::with(|_| {
            let v = regs.read(self.port_reg);
            match level {
                Level::High => regs.write(self.port_reg, v | self.mask),
                Level::Low => regs.write(self.port_reg, v & !self.mask),
            }
        });
    }

    /// Read the electrical level from the input register.
    ///
    /// The masked byte is shifted down to a strict 0/1 before conversion,
    /// so the result is independent of the bit position.
    pub fn level(&self, regs: &impl RegisterFile) -> Level {
        // Single register read; no critical section needed.
        Level::from((regs.read(self.pin_reg) & self.mask) >> self.bit != 0)
    }

    /// Read back the pin's bit from the output register.
    pub fn output_level(&self, regs: &impl RegisterFile) -> Level {
        Level::from(regs.read(self.port_reg) & self.mask != 0)
    }

    /// Invert the pin's bit in the output register.
    pub fn toggle(&self, regs: &impl RegisterFile) {
        critical_section::with(|_| {
            let v = regs.read(self.port_reg);
            regs.write(self.port_reg, v ^ self.mask);
        });
    }

    /// Enable or disable the internal pull-up, preserving the direction.
    ///
    /// The PORT bit only acts as a pull-up control while the pin is an
    /// input, so the direction is forced to input for the PORT update and
    /// the saved direction register is written back afterwards. The whole
    /// save/update/restore sequence is one critical section; interrupting
    /// it midway would leave the direction register inconsistent.
    pub fn set_pull_up(&self, regs: &impl RegisterFile, enabled: bool) {
        critical_section::with(|_| {
            let saved_ddr = regs.read(self.ddr_reg);
            regs.write(self.ddr_reg, saved_ddr & !self.mask);

            let port = regs.read(self.port_reg);
            if enabled {
                regs.write(self.port_reg, port | self.mask);
            } else {
                regs.write(self.port_reg, port & !self.mask);
            }

            regs.write(self.ddr_reg, saved_ddr);
        });
    }

    /// Set both the direction and output bits to the given state.
    ///
    /// PORT is written before DDR, so a pin entering output mode carries
    /// the intended level from the first driven cycle.
    pub fn set_state(&self, regs: &impl RegisterFile, state: PinState) {
        let (ddr_bit, port_bit) = match state {
            PinState::Floating => (false, false),
            PinState::PullUp => (false, true),
            PinState::OutputLow => (true, false),
            PinState::OutputHigh => (true, true),
        };

        critical_section::with(|_| {
            let port = regs.read(self.port_reg);
            if port_bit {
                regs.write(self.port_reg, port | self.mask);
            } else {
                regs.write(self.port_reg, port & !self.mask);
            }

            let ddr = regs.read(self.ddr_reg);
            if ddr_bit {
                regs.write(self.ddr_reg, ddr | self.mask);
            } else {
                regs.write(self.ddr_reg, ddr & !self.mask);
            }
        });
    }
}
