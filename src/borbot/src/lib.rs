//! # borbot
//!
//! Borbot save converter library - decoding, encoding, and platform conversion.
//!
//! This library provides functionality to:
//! - Detect which compression scheme produced a pasted save blob
//! - Decode a save blob into a structured record (rubies, platform, origin)
//! - Re-encode a record under either supported scheme
//! - Convert a save between the PC and mobile platforms
//!
//! ## Example
//!
//! ```
//! use borbot::{convert, Save, SaveRecord, Scheme};
//!
//! # fn main() -> Result<(), borbot::SaveError> {
//! let record = SaveRecord {
//!     rubies: 100,
//!     platform: "pc".to_string(),
//!     save_origin: "pc".to_string(),
//! };
//!
//! // Encode, then decode the blob back
//! let blob = record.encode(Scheme::ZlibDeflate)?;
//! let save = Save::decode(&blob)?;
//! assert_eq!(save.data, record);
//! assert_eq!(save.scheme, Scheme::ZlibDeflate);
//!
//! // Convert to the other platform (rubies are rescaled)
//! let converted = convert(&save.data);
//! assert_eq!(converted.rubies, 1000);
//! assert_eq!(converted.platform, "mobile");
//! # Ok(())
//! # }
//! ```

pub mod convert;
pub mod save;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use convert::{convert, convert_to, Platform, RUBY_SCALE};
#[doc(inline)]
pub use save::{detect_scheme, Save, SaveError, SaveRecord, Scheme, MAGIC_LEN};
