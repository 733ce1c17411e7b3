//! Generic CRC computation for arbitrary polynomials and widths up to 32 bits.
//!
//! This crate covers the full algebra of CRC polynomial representations and
//! both ways of computing a checksum: bit-by-bit (any width, any data run
//! length) and table-driven (byte streams for 8/16/32-bit registers).
//!
//! # Layers
//!
//! | Layer | Type / function | Purpose |
//! |-------|-----------------|---------|
//! | representation | [`Poly`] | normal / reversed / reciprocal conversions |
//! | bit engine | [`update_bitwise`] | per-bit update, sub-byte data runs |
//! | tables | [`Table`], [`TableOptions`] | per-chunk lookup tables |
//! | memoization | [`TableCache`] | share built tables process-wide |
//! | byte streams | [`Strategy`] | 8/16/32-bit table-driven update + serialization |
//! | façade | [`Model`], [`Instance`] | presets, inversion bookkeeping, streaming |
//!
//! # Example
//!
//! ```
//! use checksum::catalog;
//!
//! // Polynomial representations (CCITT-16).
//! let reversed = catalog::CCITT16.reversed_form();
//! assert_eq!(reversed.word(), 0x8408);
//! assert_eq!(catalog::CCITT16.reciprocal_form().word(), 0x0811);
//!
//! // A Modbus frame checksum via the preset model.
//! let crc = catalog::MODBUS.checksum(&[0x02, 0x07]).unwrap();
//! assert_eq!(crc, 0x1241);
//! ```
//!
//! # no_std Support
//!
//! The representation algebra and the bitwise engine are `no_std`; table
//! building needs `alloc`, and the [`TableCache`] needs `std`:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod bitwise;
#[cfg(feature = "std")]
mod cache;
pub mod catalog;
mod error;
mod implicit1;
mod model;
mod poly;
#[cfg(all(test, feature = "std"))]
mod proptests;
#[cfg(feature = "alloc")]
mod table;
mod wordwise;

pub use bitwise::update_bitwise;
#[cfg(feature = "std")]
pub use cache::TableCache;
pub use error::CrcError;
pub use implicit1::{from_implicit1, from_implicit1_reciprocal};
#[cfg(feature = "alloc")]
pub use model::Instance;
pub use model::Model;
pub use poly::Poly;
#[cfg(feature = "alloc")]
pub use table::{Table, TableOptions};
pub use wordwise::Strategy;

// Re-export the streaming trait for convenience.
pub use traits::Checksum;
