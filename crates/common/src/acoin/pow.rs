//! Proof-of-work targets.
//!
//! A Target is a 256-bit value that a block header hash, read as a
//! little-endian integer, must not exceed. The lower the target, the higher
//! the difficulty. Block headers carry it in the 32-bit compact ("bits")
//! encoding.

use bitcoin::{BlockHash, CompactTarget};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::acoin::hashes::Hash;

/// Represents a target value expressed as an unsigned 256-bit integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Target(U256);

impl Target {
    /// The largest possible target.
    pub const MAX: Self = Target(U256::MAX);

    /// Creates a new Target instance with the specified U256 value.
    pub const fn new(target: U256) -> Self {
        Target(target)
    }

    /// The all-ones target shifted right by `bits`, i.e. a target whose
    /// hashes must start with `bits` zero bits.
    ///
    /// Shifts of 256 or more yield the zero target.
    pub fn with_leading_zeros(bits: u32) -> Self {
        if bits >= 256 {
            return Self::zero();
        }
        #[allow(clippy::arithmetic_side_effects, reason = "Shift is below 256")]
        let target = U256::MAX >> bits;
        Target(target)
    }

    /// Creates a new `Target` from a hexadecimal string representation.
    ///
    /// Returns `None` if the string is not valid hex or exceeds 256 bits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        U256::from_str_radix(hex, 16).ok().map(Target)
    }

    /// Creates a Target from bytes (big-endian).
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self(U256::from_big_endian(bytes))
    }

    /// The zero target, which no hash satisfies except the all-zero hash.
    pub const fn zero() -> Self {
        Target(U256::zero())
    }

    /// Returns the target as a 64-digit, zero-padded hexadecimal string.
    pub fn to_hex(self) -> String {
        let mut bytes = [0u8; 32];
        self.0.to_big_endian(&mut bytes);
        hex::encode(bytes)
    }

    /// Reports whether a block hash satisfies this target.
    ///
    /// Block hashes are interpreted as 256-bit little-endian integers, the
    /// same way they are compared during proof-of-work validation.
    pub fn is_met_by(self, hash: &BlockHash) -> bool {
        U256::from_little_endian(hash.as_byte_array()) <= self.0
    }

    /// Converts a compact target representation into a Target instance.
    ///
    /// The compact format stores a 1-byte exponent and a 3-byte mantissa; the
    /// target is `mantissa * 256^(exponent - 3)`.
    ///
    /// # Returns
    ///
    /// * `Some(Target)` - The parsed target value if valid
    /// * `None` - If the sign bit is set, the mantissa is zero, or the value
    ///   does not fit in 256 bits
    pub fn from_compact(compact: CompactTarget) -> Option<Self> {
        let n = compact.to_consensus();
        let exponent = n >> 24;
        let mantissa = n & 0x007fffff;

        if n & 0x00800000 != 0 {
            return None; // Negative targets are invalid
        }

        if mantissa == 0 {
            return None;
        }

        if exponent > 32 {
            return None;
        }

        let base = U256::from(mantissa);

        #[allow(clippy::arithmetic_side_effects, reason = "Checked U256 shift handle overflows")]
        let target = if exponent <= 3 {
            let shift_bits = 3u32.checked_sub(exponent)?.checked_mul(8)?;
            base >> shift_bits
        } else {
            let shift_bits = exponent.checked_sub(3)?.checked_mul(8)?;
            if shift_bits >= 256 {
                return None;
            }
            let shifted = base << shift_bits;
            // Bits pushed past the top of the 256-bit word are lost.
            if shifted >> shift_bits != base {
                return None;
            }
            shifted
        };

        Some(Target(target))
    }

    /// Converts a target value into its compact representation.
    ///
    /// Precision below the three most significant bytes is discarded, so the
    /// conversion is lossy for most targets. If the high bit of the mantissa
    /// would be set it is shifted down one byte and the exponent bumped,
    /// keeping the encoded value non-negative.
    pub fn to_compact(self) -> Option<CompactTarget> {
        if self.0.is_zero() {
            return Some(CompactTarget::from_consensus(0));
        }

        let bit_length = u32::try_from(self.0.bits()).ok()?;
        let size = bit_length.checked_add(7)?.checked_div(8)?;

        let mantissa = if size <= 3 {
            let shift_bits = 3u32.checked_sub(size)?.checked_mul(8)?;
            self.0.low_u32().checked_shl(shift_bits)? & 0x00ffffff
        } else {
            let shift_bits = size.checked_sub(3)?.checked_mul(8)?;
            #[allow(clippy::arithmetic_side_effects, reason = "Shift is below 256")]
            let shifted = self.0 >> shift_bits;
            shifted.low_u32() & 0x00ffffff
        };

        let (mantissa, size) = if mantissa & 0x00800000 != 0 {
            (mantissa.checked_shr(8)?, size.checked_add(1)?)
        } else {
            (mantissa, size)
        };

        let compact = size.checked_shl(24)?.checked_add(mantissa)?;
        Some(CompactTarget::from_consensus(compact))
    }
}

impl From<U256> for Target {
    fn from(value: U256) -> Self {
        Target(value)
    }
}
