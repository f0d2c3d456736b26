//! Memory-mapped register access
//!
//! AVR I/O registers are visible in the data address space at a fixed
//! offset (I/O address + 0x20); [`IoRegisterFile`] performs volatile
//! accesses through that window.

use avr_device::atmega328p::{PORTB, PORTC, PORTD};
use perone_hal::RegisterFile;

/// Offset of the I/O register window within the data address space.
const SFR_OFFSET: usize = 0x20;

/// Register file backed by the real ATmega328P I/O space.
///
/// Construction consumes the three PORT peripherals, so at most one value
/// exists and no other code holds the PAC handles for those banks. Only
/// the GPIO addresses in [`crate::pins::reg`] are meaningful; the driver
/// never passes anything else.
pub struct IoRegisterFile {
    _portb: PORTB,
    _portc: PORTC,
    _portd: PORTD,
}

impl IoRegisterFile {
    /// Claim the three GPIO banks.
    pub fn new(portb: PORTB, portc: PORTC, portd: PORTD) -> Self {
        Self {
            _portb: portb,
            _portc: portc,
            _portd: portd,
        }
    }
}

impl RegisterFile for IoRegisterFile {
    fn read(&self, addr: u8) -> u8 {
        let p = (usize::from(addr) + SFR_OFFSET) as *const u8;
        // SAFETY: the data-space window over the I/O registers is always
        // mapped, and constructing this type claimed the GPIO banks.
        unsafe { core::ptr::read_volatile(p) }
    }

    fn write(&self, addr: u8, value: u8) {
        let p = (usize::from(addr) + SFR_OFFSET) as *mut u8;
        // SAFETY: as above.
        unsafe { core::ptr::write_volatile(p, value) }
    }
}

/// Build an [`IoRegisterFile`] from the PAC peripherals.
///
/// Usage:
/// ```ignore
/// let dp = avr_device::atmega328p::Peripherals::take().unwrap();
/// let regs = perone_hal_atmega328p::io_regs!(dp);
/// ```
#[macro_export]
macro_rules! io_regs {
    ($p:expr) => {
        $crate::mmio::IoRegisterFile::new($p.PORTB, $p.PORTC, $p.PORTD)
    };
}
