//! The NAND primitive.
//!
//! NAND is the sole primitive gate of the engine: it is functionally
//! complete, so every other gate in [`super::composite`] is a fixed
//! wiring of NAND instances and, transitively, any digital circuit can
//! be reduced to NAND alone.

use crate::circuit::Signal;

/// Two-input NAND.
///
/// Pure and total over its two-valued domain. Truth table:
///
/// | a     | b     | nand(a, b) |
/// |-------|-------|------------|
/// | false | false | true       |
/// | false | true  | true       |
/// | true  | false | true       |
/// | true  | true  | false      |
pub fn nand(a: Signal, b: Signal) -> Signal {
    !(a && b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nand_truth_table() {
        assert!(nand(false, false));
        assert!(nand(false, true));
        assert!(nand(true, false));
        assert!(!nand(true, true));
    }
}
