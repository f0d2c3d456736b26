//! ATmega328P binding for the Perone GPIO driver
//!
//! This crate pins the hardware-agnostic logic of `perone-hal` to the
//! 28-pin ATmega328P (Arduino Uno / Nano class boards):
//!
//! - [`pins::PIN_MAP`] - the bank registry and Arduino-numbering lookup table
//! - [`mmio::IoRegisterFile`] - register access over real memory-mapped I/O
//! - Named pin constants ([`pins::D13`], [`pins::A0`], [`pins::LED`], ...)
//!
//! # Features
//!
//! - `critical-section-impl` - interrupt-disable critical sections via
//!   `avr-device`; enable in the final firmware binary
//! - `rt` - `avr-device` runtime (interrupt vectors, entry point)
//! - `defmt` - debug formatting support
//!
//! # Usage
//!
//! ```ignore
//! let dp = avr_device::atmega328p::Peripherals::take().unwrap();
//! let regs = perone_hal_atmega328p::io_regs!(dp);
//!
//! let mut led = Pin::new(&regs, &pins::PIN_MAP, pins::LED)?;
//! led.set_state(PinState::OutputHigh);
//! ```

#![no_std]

pub mod mmio;
pub mod pins;

pub use mmio::IoRegisterFile;
pub use pins::PIN_MAP;
