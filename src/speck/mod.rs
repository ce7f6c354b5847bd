//! Speck128/128 primitives driving the generator.
//!
//! ```text
//! round          (one ARX mixing step over two 64-bit words)
//!     ↓ reused by
//! KeySchedule    (two key words → 32 subkeys)
//!     ↓ feeds
//! BlockTransform (32 rounds over a 16-byte block)
//! ```

mod block;
mod key_schedule;
mod round;

pub use block::BlockTransform;
pub use key_schedule::{KeySchedule, KEY_BYTES, ROUNDS};
pub use round::round;
