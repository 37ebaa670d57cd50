use std::fmt::{Display, Formatter};

use crate::bits::width_mask;
use crate::synth::GateSink;

/// One operation in a recorded gate sequence.
///
/// The vocabulary matches the emitter: NOT gates on input carriers (flips),
/// NOT gates on the output carrier (constant monomial), and multi-controlled
/// NOT gates on the output (non-constant monomials).
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Gate {
    /// Unconditional NOT on an input carrier.
    InvertInput(usize),
    /// Unconditional NOT on the output carrier.
    InvertOutput,
    /// NOT on the output carrier, controlled by the listed input carriers.
    ConditionalInvert(Box<[usize]>),
}

// Constructors
impl Gate {
    pub fn invert_input(index: usize) -> Gate {
        Gate::InvertInput(index)
    }

    pub fn invert_output() -> Gate {
        Gate::InvertOutput
    }

    pub fn conditional_invert(controls: &[usize]) -> Gate {
        Gate::ConditionalInvert(controls.into())
    }
}

// Getters
impl Gate {
    /// Control carriers of the gate (empty for the unconditional inverts).
    pub fn controls(&self) -> &[usize] {
        match self {
            Gate::ConditionalInvert(controls) => controls,
            _ => &[],
        }
    }
}

impl Display for Gate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Gate::InvertInput(i) => write!(f, "X(x{})", i),
            Gate::InvertOutput => write!(f, "X(y)"),
            Gate::ConditionalInvert(controls) => {
                write!(f, "MCX(")?;
                for (k, i) in controls.iter().enumerate() {
                    if k > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "x{}", i)?;
                }
                write!(f, " -> y)")
            }
        }
    }
}

/// A [`GateSink`] that records appended gates in application order.
///
/// Useful as a stand-in for a real circuit backend: tests simulate the
/// recorded sequence with [`evaluate`](GateList::evaluate) and demos print
/// it.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct GateList {
    gates: Vec<Gate>,
}

impl GateList {
    pub fn new() -> Self {
        Self { gates: Vec::new() }
    }

    /// The recorded gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of recorded gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Total number of control points across all recorded gates.
    pub fn control_count(&self) -> u64 {
        self.gates.iter().map(|g| g.controls().len() as u64).sum()
    }

    /// Classically simulate the sequence on one input pattern.
    ///
    /// Input carriers start at the bits of `input` and the output carrier at
    /// 0; the result is the final output carrier. A synthesized sequence both
    /// computes f(input) and leaves the input carriers restored, since its
    /// input inverts come in pairs around the monomial block.
    ///
    /// # Panics
    ///
    /// Panics if `n` is out of `1..=63`, `input` does not fit in `n` bits,
    /// or a recorded gate touches a carrier outside `0..n`.
    pub fn evaluate(&self, input: u64, n: u32) -> bool {
        assert!(
            input <= width_mask(n),
            "Value {:#b} does not fit in {} bits",
            input,
            n
        );

        let mut x = input;
        let mut y = false;
        for gate in &self.gates {
            match gate {
                Gate::InvertInput(i) => {
                    assert!(*i < n as usize, "Input carrier {} out of range for {} bits", i, n);
                    x ^= 1u64 << i;
                }
                Gate::InvertOutput => {
                    y = !y;
                }
                Gate::ConditionalInvert(controls) => {
                    let mut all_set = true;
                    for &i in controls.iter() {
                        assert!(i < n as usize, "Input carrier {} out of range for {} bits", i, n);
                        if (x >> i) & 1 == 0 {
                            all_set = false;
                        }
                    }
                    if all_set {
                        y = !y;
                    }
                }
            }
        }
        y
    }
}

impl GateSink for GateList {
    fn invert_input(&mut self, index: usize) {
        self.gates.push(Gate::InvertInput(index));
    }

    fn invert_output(&mut self) {
        self.gates.push(Gate::InvertOutput);
    }

    fn conditional_invert(&mut self, controls: &[usize]) {
        self.gates.push(Gate::conditional_invert(controls));
    }
}
