//! Binary/Gray code conversion.
//!
//! Gray-coded pointers change exactly one bit per increment, which is what
//! makes sampling them through a synchronizer in a foreign clock domain
//! safe: a mid-transition sample yields either the old or the new value,
//! never a phantom third value.

/// Converts a binary value to its reflected-binary (Gray) encoding.
#[inline]
pub fn to_gray(bin: u32) -> u32 {
    bin ^ (bin >> 1)
}

/// Converts a Gray-coded value back to binary.
#[inline]
pub fn from_gray(gray: u32) -> u32 {
    let mut bin = gray;
    let mut shift = 1;
    while shift < 32 {
        bin ^= bin >> shift;
        shift <<= 1;
    }
    bin
}
