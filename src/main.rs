//! Gatesim - Digital Logic Simulator
//!
//! Demonstration driver for the gatesim engine: a NAND smoke test,
//! truth tables for the composite gate library, and an SR-latch demo.
//!
//! # Usage
//!
//! ```bash
//! gatesim                 # nand(true, true) smoke test
//! gatesim --a true --b false
//! gatesim --tables        # truth tables of the gate library
//! gatesim --latch         # drive an SR latch through a tick script
//! ```

use clap::Parser;
use gatesim_core::{circuit::library, error::Result, gates, GateKind, SequentialElement, Signal};

/// Digital logic simulator built on the NAND primitive
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First input signal
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    a: bool,

    /// Second input signal
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    b: bool,

    /// Print the truth table of every library gate
    #[arg(long)]
    tables: bool,

    /// Drive an SR latch through a set/hold/reset tick script
    #[arg(long)]
    latch: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.tables {
        print_tables();
        return Ok(());
    }

    if args.latch {
        return latch_demo();
    }

    smoke_test(args.a, args.b);
    Ok(())
}

/// Exercise the primitive directly, the minimal end-to-end check that
/// the engine is wired up.
fn smoke_test(a: Signal, b: Signal) {
    let result = gates::nand(a, b);
    let expected = !(a && b);

    println!("--- NAND smoke test ---");
    println!("input a     : {a}");
    println!("input b     : {b}");
    println!("nand(a, b)  : {result} (expected: {expected})");
    println!(
        "{}",
        if result == expected {
            "engine answered correctly"
        } else {
            "LOGIC ERROR: engine disagrees with the truth table"
        }
    );
}

fn print_tables() {
    for kind in GateKind::library() {
        println!("{} ({} NAND)", kind.name(), kind.nand_count());
        if kind.arity() == 1 {
            for a in [false, true] {
                // eval only returns None for subcircuit kinds
                let out = kind.eval(&[a]).unwrap_or_default();
                println!("  {:5} -> {}", a, out);
            }
        } else {
            for a in [false, true] {
                for b in [false, true] {
                    let out = kind.eval(&[a, b]).unwrap_or_default();
                    println!("  {:5} {:5} -> {}", a, b, out);
                }
            }
        }
        println!();
    }
}

fn latch_demo() -> Result<()> {
    let mut latch = SequentialElement::new(library::sr_latch()?)?;

    println!("--- SR latch (cross-coupled NAND) ---");
    let script = [
        ("set", true, false),
        ("hold", false, false),
        ("reset", false, true),
        ("hold", false, false),
    ];
    for (label, set, reset) in script {
        let inputs = std::collections::HashMap::from([
            ("set".to_string(), set),
            ("reset".to_string(), reset),
        ]);
        let out = latch.tick(&inputs)?;
        println!(
            "tick {:>2} {:5}  set={:5} reset={:5}  q={:5} qn={}",
            latch.ticks(),
            label,
            set,
            reset,
            out["q"],
            out["qn"]
        );
    }
    Ok(())
}
