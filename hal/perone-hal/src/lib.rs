//! Perone pin mapping core
//!
//! This crate contains everything about the driver that does not depend on
//! a specific chip: the bank/pin lookup tables and their resolvers, the
//! register operations, and the register-file abstraction that the chip
//! crates bind to real memory-mapped I/O. Because hardware access goes
//! through the [`RegisterFile`] trait, the whole crate is testable on the
//! host against an in-memory register file.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application                            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  perone-hal (this crate - logic)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ perone-hal-   │       │ MockRegister- │
//! │ atmega328p    │       │ File (tests)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Types
//!
//! - [`PinMap`] - a chip's bank registry and pin lookup table
//! - [`ResolvedPin`] - a validated pin descriptor, ready for register access
//! - [`Pin`] - a pin handle implementing the `embedded-hal` digital traits
//! - [`RegisterFile`] - byte-level register access, real or mocked

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod allocator;
pub mod gpio;
pub mod map;
pub mod pin;
pub mod registers;

// Re-export key types at crate root for convenience
pub use allocator::PinAllocator;
pub use gpio::Pin;
pub use map::{Bank, PinEntry, PinError, PinMap};
pub use pin::{Direction, Level, PinState, ResolvedPin};
pub use registers::{MockRegisterFile, RegisterFile};
