//! WASM bindings for Gatesim Core.
//!
//! This module provides JavaScript-friendly bindings for the gate
//! library and a ready-made SR latch.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { nand, xor, WasmLatch } from 'gatesim_core';
//!
//! await init();
//!
//! nand(true, true);   // false
//! xor(true, false);   // true
//!
//! const latch = new WasmLatch();
//! latch.tick(true, false);   // set -> true
//! latch.tick(false, false);  // hold -> true
//! ```

use std::collections::HashMap;

use wasm_bindgen::prelude::*;

use crate::circuit::library;
use crate::gates;
use crate::sim::SequentialElement;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Two-input NAND, the engine's primitive.
#[wasm_bindgen]
pub fn nand(a: bool, b: bool) -> bool {
    gates::nand(a, b)
}

/// NOT from one NAND.
#[wasm_bindgen]
pub fn not(a: bool) -> bool {
    gates::not(a)
}

/// AND from two NANDs.
#[wasm_bindgen]
pub fn and(a: bool, b: bool) -> bool {
    gates::and(a, b)
}

/// OR from three NANDs.
#[wasm_bindgen]
pub fn or(a: bool, b: bool) -> bool {
    gates::or(a, b)
}

/// NOR from four NANDs.
#[wasm_bindgen]
pub fn nor(a: bool, b: bool) -> bool {
    gates::nor(a, b)
}

/// XOR from four NANDs.
#[wasm_bindgen]
pub fn xor(a: bool, b: bool) -> bool {
    gates::xor(a, b)
}

/// XNOR from five NANDs.
#[wasm_bindgen]
pub fn xnor(a: bool, b: bool) -> bool {
    gates::xnor(a, b)
}

/// WASM-compatible SR latch built from cross-coupled NAND gates.
///
/// Wraps a native [`SequentialElement`] over the library latch and
/// exposes a tick/reset API to JavaScript.
#[wasm_bindgen]
pub struct WasmLatch {
    element: SequentialElement,
}

#[wasm_bindgen]
impl WasmLatch {
    /// Create a cleared latch (q = false).
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmLatch, JsValue> {
        let graph = library::sr_latch().map_err(|e| JsValue::from_str(&e.to_string()))?;
        let element =
            SequentialElement::new(graph).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmLatch { element })
    }

    /// Advance the latch one tick and return the q output.
    #[wasm_bindgen]
    pub fn tick(&mut self, set: bool, reset: bool) -> Result<bool, JsValue> {
        let inputs = HashMap::from([("set".to_string(), set), ("reset".to_string(), reset)]);
        let out = self
            .element
            .tick(&inputs)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(out["q"])
    }

    /// Clear the latch back to its initial state.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.element.reset();
    }

    /// Ticks since construction or the last reset.
    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u64 {
        self.element.ticks()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
