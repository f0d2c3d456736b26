//! Pin handle with `embedded-hal` digital traits
//!
//! [`Pin`] bundles a resolved descriptor with the register file it operates
//! on, giving driver crates the standard `embedded-hal` 1.0 surface:
//! [`InputPin`], [`OutputPin`] and [`StatefulOutputPin`]. Operations cannot
//! fail once the pin is resolved, so the error type is [`Infallible`].

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::map::{PinError, PinMap};
use crate::pin::{Direction, Level, PinState, ResolvedPin};
use crate::registers::RegisterFile;

/// A logical pin bound to a register file.
///
/// Several handles may share one register file; every register update is
/// a critical section, so handles on different bits of the same bank do
/// not corrupt each other.
pub struct Pin<'a, R: RegisterFile> {
    desc: ResolvedPin,
    regs: &'a R,
}

impl<'a, R: RegisterFile> Pin<'a, R> {
    /// Resolve logical pin `n` on `map` and bind it to `regs`.
    pub fn new(regs: &'a R, map: &PinMap, n: u8) -> Result<Self, PinError> {
        Ok(Self {
            desc: map.resolve_logical(n)?,
            regs,
        })
    }

    /// Bind an already-resolved descriptor to `regs`.
    pub fn from_resolved(regs: &'a R, desc: ResolvedPin) -> Self {
        Self { desc, regs }
    }

    /// The resolved descriptor backing this handle.
    pub fn resolved(&self) -> &ResolvedPin {
        &self.desc
    }

    /// Set the pin direction.
    pub fn set_direction(&mut self, dir: Direction) {
        self.desc.set_direction(self.regs, dir);
    }

    /// Enable or disable the internal pull-up.
    pub fn set_pull_up(&mut self, enabled: bool) {
        self.desc.set_pull_up(self.regs, enabled);
    }

    /// Set direction and output in one call.
    pub fn set_state(&mut self, state: PinState) {
        self.desc.set_state(self.regs, state);
    }
}

impl<R: RegisterFile> ErrorType for Pin<'_, R> {
    type Error = Infallible;
}

impl<R: RegisterFile> OutputPin for Pin<'_, R> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.desc.set_level(self.regs, Level::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.desc.set_level(self.regs, Level::High);
        Ok(())
    }
}

impl<R: RegisterFile> StatefulOutputPin for Pin<'_, R> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.desc.output_level(self.regs) == Level::High)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.desc.output_level(self.regs) == Level::Low)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        // Single read-modify-write instead of the default read-then-set
        self.desc.toggle(self.regs);
        Ok(())
    }
}

impl<R: RegisterFile> InputPin for Pin<'_, R> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.desc.level(self.regs) == Level::High)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.desc.level(self.regs) == Level::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Bank, PinEntry};
    use crate::registers::MockRegisterFile;

    const BANKS: [Bank; 1] = [Bank {
        pin: 0x03,
        ddr: 0x04,
        port: 0x05,
    }];
    const PINS: [PinEntry; 2] = [PinEntry { bank: 0, bit: 0 }, PinEntry { bank: 0, bit: 6 }];
    const MAP: PinMap = PinMap {
        banks: &BANKS,
        pins: &PINS,
    };

    #[test]
    fn output_pin_drives_and_reads_back() {
        let regs = MockRegisterFile::new();
        let mut pin = Pin::new(&regs, &MAP, 1).unwrap();

        pin.set_direction(Direction::Output);
        pin.set_high().unwrap();
        assert_eq!(regs.read(0x05), 0x40);
        assert!(pin.is_set_high().unwrap());

        pin.set_low().unwrap();
        assert_eq!(regs.read(0x05), 0);
        assert!(pin.is_set_low().unwrap());

        pin.toggle().unwrap();
        assert!(pin.is_set_high().unwrap());
    }

    #[test]
    fn input_pin_reads_the_pin_register() {
        let regs = MockRegisterFile::new();
        let mut pin = Pin::new(&regs, &MAP, 1).unwrap();

        assert!(pin.is_low().unwrap());
        regs.write(0x03, 0x40);
        assert!(pin.is_high().unwrap());
    }

    #[test]
    fn two_handles_share_one_register_file() {
        let regs = MockRegisterFile::new();
        let mut d0 = Pin::new(&regs, &MAP, 0).unwrap();
        let mut d1 = Pin::new(&regs, &MAP, 1).unwrap();

        d0.set_high().unwrap();
        d1.set_high().unwrap();
        assert_eq!(regs.read(0x05), 0x41);

        d0.set_low().unwrap();
        assert_eq!(regs.read(0x05), 0x40);
    }

    #[test]
    fn new_rejects_unknown_pins() {
        let regs = MockRegisterFile::new();
        assert!(Pin::new(&regs, &MAP, 2).is_err());
    }
}
