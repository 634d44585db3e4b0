//! Human-readable schedule dumps.
use crate::schedule::{KeccakSchedule, RoundSchedule};
use std::fmt::Write as _;

impl RoundSchedule {
    /// Render this round as `"θ(THETA) → ρπ(RHOPI) → χ(CHI) → ι(IOTA)"`,
    /// prefixed with the round index.
    pub fn report_line(&self, round_index: usize) -> String {
        let steps = self
            .step_order
            .iter()
            .map(|step| step.symbol())
            .collect::<Vec<_>>()
            .join(" → ");
        format!("round {round_index:2}: {steps} (variants {:?})", self.variants)
    }
}

impl KeccakSchedule {
    /// Render the seed (lowercase hex) followed by one line per round.
    pub fn report(&self) -> String {
        let mut out = String::new();
        for byte in self.seed {
            let _ = write!(out, "{byte:02x}");
        }
        out.push('\n');
        for (i, round) in self.rounds.iter().enumerate() {
            out.push_str(&round.report_line(i));
            out.push('\n');
        }
        out
    }
}
