//! # qrom-rs: Minimal-Control QROM Synthesis in Rust
//!
//! **`qrom-rs`** is a small, exact library for synthesizing gate sequences that compute
//! boolean lookup functions f: {0,1}^n -> {0,1} ("quantum read-only memory") with the
//! fewest possible **control points**: the control inputs summed over all conditional
//! inversion gates in the sequence.
//!
//! ## What is ANF?
//!
//! The Algebraic Normal Form of a boolean function is its unique representation as a
//! XOR of AND-monomials over the inputs. Because the representation is canonical, the
//! number of controls it needs is a well-defined cost of the function itself, and
//! comparing costs across input transformations is meaningful. This library reduces a
//! function to ANF, measures that cost, and searches all 2^n per-input inversions for
//! the one whose ANF is cheapest. The search is exhaustive, so the reported minimum is
//! the true minimum over input inversions.
//!
//! ## Key Features
//!
//! - **Exact Reduction**: [`Anf::reduce`][crate::anf::Anf::reduce] computes the mod-2
//!   polynomial by minterm expansion with toggle-on-collision accumulation.
//! - **Exact Optimization**: [`optimize_flips`][crate::search::optimize_flips] scans
//!   every inversion mask and breaks cost ties toward the smallest mask, so results
//!   are deterministic. A rayon-based variant behind the `parallel` feature returns
//!   bit-identical answers.
//! - **Backend-Agnostic Emission**: [`synthesize`][crate::synth::synthesize] drives
//!   any [`GateSink`][crate::synth::GateSink], so gates can be recorded, simulated,
//!   pretty-printed, or handed to an external circuit builder.
//! - **Deterministic Output**: set semantics over ordered monomials make the emitted
//!   gate sequence a pure function of the input patterns.
//!
//! ## Quick Start
//!
//! Add `qrom-rs` to your `Cargo.toml` and start synthesizing:
//!
//! ```toml
//! [dependencies]
//! qrom-rs = "0.1"
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use qrom_rs::anf::Anf;
//! use qrom_rs::circuit::GateList;
//! use qrom_rs::search::optimize_flips;
//! use qrom_rs::synth::{synthesize, Flips};
//!
//! // 1. Describe the function by its satisfying patterns: f = NOT (x0 OR x1)
//! let patterns = [0b00];
//!
//! // 2. Reduce to the mod-2 polynomial and inspect its cost
//! let poly = Anf::reduce(patterns, 2);
//! assert_eq!(poly.to_string(), "1 ^ x0 ^ x1 ^ x0*x1");
//! assert_eq!(poly.cost(), 4);
//!
//! // 3. Inverting both inputs yields a strictly cheaper realization
//! let best = optimize_flips(&patterns, 2);
//! assert_eq!(best.mask, 0b11);
//! assert_eq!(best.cost, 2);
//!
//! // 4. Emit the gate sequence into a recording sink
//! let mut gates = GateList::new();
//! let run = synthesize(&patterns, 2, Flips::Best, &mut gates);
//! assert_eq!(run.cost, 2);
//!
//! // 5. The recorded sequence computes f on every input
//! assert!((0..4).all(|x| gates.evaluate(x, 2) == patterns.contains(&x)));
//! ```
//!
//! ## Core Components
//!
//! - **[`anf`]**: The heart of the library. The [`Anf`][crate::anf::Anf] polynomial type and the reduction algorithm.
//! - **[`search`]**: Exhaustive optimization over input inversion masks.
//! - **[`synth`]**: Gate emission through the [`GateSink`][crate::synth::GateSink] trait.
//! - **[`circuit`]**: A recording sink with classical simulation.
//! - **[`bits`]**: Fixed-width bit-position decoding shared by the other modules.
//!
//! For a deep dive into the reduction details, check the [`anf`] module documentation.

pub mod anf;
pub mod bits;
pub mod circuit;
pub mod cost;
pub mod search;
pub mod synth;
