//! Composite gates built from NAND.
//!
//! Every function in this module is expressed strictly as a composition
//! of [`nand`] calls, never as independent boolean logic. The NAND count
//! documented on each gate is the minimal two-input NAND realization.

use crate::circuit::Signal;

use super::primitive::nand;

/// NOT(a) = nand(a, a). 1 NAND.
pub fn not(a: Signal) -> Signal {
    nand(a, a)
}

/// AND(a, b) = NOT(NAND(a, b)). 2 NANDs.
pub fn and(a: Signal, b: Signal) -> Signal {
    let n = nand(a, b);
    nand(n, n)
}

/// OR(a, b) = nand(NOT(a), NOT(b)). 3 NANDs.
pub fn or(a: Signal, b: Signal) -> Signal {
    nand(nand(a, a), nand(b, b))
}

/// NOR(a, b) = NOT(OR(a, b)). 4 NANDs.
pub fn nor(a: Signal, b: Signal) -> Signal {
    let o = or(a, b);
    nand(o, o)
}

/// XOR(a, b) = nand(nand(a, n), nand(b, n)) with n = nand(a, b). 4 NANDs.
///
/// The inner nand(a, b) is shared between both branches.
pub fn xor(a: Signal, b: Signal) -> Signal {
    let n = nand(a, b);
    nand(nand(a, n), nand(b, n))
}

/// XNOR(a, b) = NOT(XOR(a, b)). 5 NANDs.
pub fn xnor(a: Signal, b: Signal) -> Signal {
    let x = xor(a, b);
    nand(x, x)
}
