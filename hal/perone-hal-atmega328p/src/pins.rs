//! ATmega328P pin topology
//!
//! The bank registry and the Arduino-numbering lookup table for the
//! ATmega328P. The numbering contract is fixed: logical pins 0-7 sit on
//! bank D bits 0-7, 8-13 on bank B bits 0-5, 14-19 on bank C bits 0-5.
//! Bits B6/B7 carry the crystal and C6 the reset line, so they have no
//! logical pin.

use perone_hal::{Bank, PinEntry, PinMap};

/// I/O-space addresses of the GPIO registers.
///
/// These are ATmega328P values; other models differ. The three registers
/// of a bank are contiguous on this chip, but nothing below relies on
/// that - every address is spelled out.
pub mod reg {
    /// Bank B input register
    pub const PINB: u8 = 0x03;
    /// Bank B direction register
    pub const DDRB: u8 = 0x04;
    /// Bank B output register
    pub const PORTB: u8 = 0x05;
    /// Bank C input register
    pub const PINC: u8 = 0x06;
    /// Bank C direction register
    pub const DDRC: u8 = 0x07;
    /// Bank C output register
    pub const PORTC: u8 = 0x08;
    /// Bank D input register
    pub const PIND: u8 = 0x09;
    /// Bank D direction register
    pub const DDRD: u8 = 0x0A;
    /// Bank D output register
    pub const PORTD: u8 = 0x0B;
}

/// Index of bank B in [`BANKS`]
pub const BANK_B: u8 = 0;
/// Index of bank C in [`BANKS`]
pub const BANK_C: u8 = 1;
/// Index of bank D in [`BANKS`]
pub const BANK_D: u8 = 2;

/// The three GPIO banks of the ATmega328P.
pub const BANKS: [Bank; 3] = [
    Bank {
        pin: reg::PINB,
        ddr: reg::DDRB,
        port: reg::PORTB,
    },
    Bank {
        pin: reg::PINC,
        ddr: reg::DDRC,
        port: reg::PORTC,
    },
    Bank {
        pin: reg::PIND,
        ddr: reg::DDRD,
        port: reg::PORTD,
    },
];

/// Pin lookup table - the Arduino pin number is the index.
pub const PIN_TABLE: [PinEntry; 20] = [
    PinEntry { bank: BANK_D, bit: 0 }, // d0 / RX
    PinEntry { bank: BANK_D, bit: 1 }, // d1 / TX
    PinEntry { bank: BANK_D, bit: 2 },
    PinEntry { bank: BANK_D, bit: 3 },
    PinEntry { bank: BANK_D, bit: 4 },
    PinEntry { bank: BANK_D, bit: 5 },
    PinEntry { bank: BANK_D, bit: 6 },
    PinEntry { bank: BANK_D, bit: 7 },
    PinEntry { bank: BANK_B, bit: 0 }, // d8
    PinEntry { bank: BANK_B, bit: 1 },
    PinEntry { bank: BANK_B, bit: 2 }, // d10 / SS
    PinEntry { bank: BANK_B, bit: 3 }, // d11 / MOSI
    PinEntry { bank: BANK_B, bit: 4 }, // d12 / MISO
    PinEntry { bank: BANK_B, bit: 5 }, // d13 / SCK / on-board LED
    PinEntry { bank: BANK_C, bit: 0 }, // a0
    PinEntry { bank: BANK_C, bit: 1 },
    PinEntry { bank: BANK_C, bit: 2 },
    PinEntry { bank: BANK_C, bit: 3 },
    PinEntry { bank: BANK_C, bit: 4 }, // a4 / SDA
    PinEntry { bank: BANK_C, bit: 5 }, // a5 / SCL
];

/// The complete ATmega328P pin map.
pub const PIN_MAP: PinMap = PinMap {
    banks: &BANKS,
    pins: &PIN_TABLE,
};

/// `D0` / `RX`
pub const D0: u8 = 0;
/// `D1` / `TX`
pub const D1: u8 = 1;
/// `D2`
pub const D2: u8 = 2;
/// `D3`
pub const D3: u8 = 3;
/// `D4`
pub const D4: u8 = 4;
/// `D5`
pub const D5: u8 = 5;
/// `D6`
pub const D6: u8 = 6;
/// `D7`
pub const D7: u8 = 7;
/// `D8`
pub const D8: u8 = 8;
/// `D9`
pub const D9: u8 = 9;
/// `D10` / `SS`
pub const D10: u8 = 10;
/// `D11` / `MOSI`
pub const D11: u8 = 11;
/// `D12` / `MISO`
pub const D12: u8 = 12;
/// `D13` / `SCK`
pub const D13: u8 = 13;
/// `A0`
pub const A0: u8 = 14;
/// `A1`
pub const A1: u8 = 15;
/// `A2`
pub const A2: u8 = 16;
/// `A3`
pub const A3: u8 = 17;
/// `A4` / `SDA`
pub const A4: u8 = 18;
/// `A5` / `SCL`
pub const A5: u8 = 19;
/// On-board LED of Uno/Nano class boards (= [`D13`])
pub const LED: u8 = D13;

/// Parse a pin name from config.
///
/// Supports formats:
/// - "d13" -> 13
/// - "a4" -> 18
/// - "led" -> 13
/// - "7" -> 7 (bare logical number)
pub fn parse_pin_name(s: &str) -> Option<u8> {
    let s = s.trim();

    if s == "led" {
        return Some(LED);
    }

    if let Some(num_str) = s.strip_prefix('d') {
        let n: u8 = num_str.parse().ok()?;
        if n > D13 {
            return None;
        }
        return Some(n);
    }

    if let Some(num_str) = s.strip_prefix('a') {
        let n: u8 = num_str.parse().ok()?;
        if n > 5 {
            return None;
        }
        return Some(A0 + n);
    }

    let n: u8 = s.parse().ok()?;
    if usize::from(n) >= PIN_MAP.len() {
        return None;
    }
    Some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use perone_hal::PinError;

    #[test]
    fn numbering_contract_is_exact() {
        // 0-7 -> bank D bits 0-7
        for n in 0u8..8 {
            let pin = PIN_MAP.resolve_logical(n).unwrap();
            assert_eq!(pin.pin_reg, reg::PIND);
            assert_eq!(pin.bit, n);
        }
        // 8-13 -> bank B bits 0-5
        for n in 8u8..14 {
            let pin = PIN_MAP.resolve_logical(n).unwrap();
            assert_eq!(pin.pin_reg, reg::PINB);
            assert_eq!(pin.bit, n - 8);
        }
        // 14-19 -> bank C bits 0-5
        for n in 14u8..20 {
            let pin = PIN_MAP.resolve_logical(n).unwrap();
            assert_eq!(pin.pin_reg, reg::PINC);
            assert_eq!(pin.bit, n - 14);
        }
    }

    #[test]
    fn every_pin_round_trips_through_the_reverse_path() {
        for n in 0u8..20 {
            let desc = PIN_MAP.resolve_logical(n).unwrap();
            let back = PIN_MAP.resolve(desc.pin_reg, desc.bit).unwrap();
            assert_eq!(back.logical, n);
            assert_eq!(back, desc);
        }
    }

    #[test]
    fn pin_count_boundary() {
        assert!(PIN_MAP.resolve_logical(19).is_ok());
        assert_eq!(
            PIN_MAP.resolve_logical(20),
            Err(PinError::NoSuchLogicalPin)
        );
    }

    #[test]
    fn d13_is_bank_b_bit_5() {
        let led = PIN_MAP.resolve_logical(D13).unwrap();
        assert_eq!(led.pin_reg, reg::PINB);
        assert_eq!(led.ddr_reg, reg::DDRB);
        assert_eq!(led.port_reg, reg::PORTB);
        assert_eq!(led.bit, 5);
        assert_eq!(led.mask, 0x20);
    }

    #[test]
    fn crystal_and_reset_bits_have_no_logical_pin() {
        // B6/B7: crystal, C6: reset
        assert_eq!(
            PIN_MAP.resolve(reg::PINB, 6),
            Err(PinError::NoSuchLogicalPin)
        );
        assert_eq!(
            PIN_MAP.resolve(reg::PINB, 7),
            Err(PinError::NoSuchLogicalPin)
        );
        assert_eq!(
            PIN_MAP.resolve(reg::PINC, 6),
            Err(PinError::NoSuchLogicalPin)
        );
    }

    #[test]
    fn bank_registers_are_distinct() {
        let mut seen = [false; 0x40];
        for bank in BANKS {
            for addr in [bank.pin, bank.ddr, bank.port] {
                assert!(!seen[usize::from(addr)], "duplicate register address");
                seen[usize::from(addr)] = true;
            }
        }
    }

    #[test]
    fn test_parse_pin_name() {
        assert_eq!(parse_pin_name("d13"), Some(13));
        assert_eq!(parse_pin_name("d0"), Some(0));
        assert_eq!(parse_pin_name("a0"), Some(14));
        assert_eq!(parse_pin_name("a5"), Some(19));
        assert_eq!(parse_pin_name("led"), Some(13));
        assert_eq!(parse_pin_name("7"), Some(7));
        assert_eq!(parse_pin_name(" d2 "), Some(2));

        // Invalid
        assert_eq!(parse_pin_name("d14"), None);
        assert_eq!(parse_pin_name("a6"), None);
        assert_eq!(parse_pin_name("20"), None);
        assert_eq!(parse_pin_name("pb5"), None);
        assert_eq!(parse_pin_name(""), None);
    }
}
