//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use line_diff::DiffReport;

pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Flattens a report into `(prefix, text)` pairs in display order.
pub fn rendered(report: &DiffReport<'_>) -> Vec<(&'static str, String)> {
    report
        .rendered_lines()
        .into_iter()
        .map(|line| (line.marker.prefix(), line.text.to_string()))
        .collect()
}

/// Deterministic xorshift generator so property-style tests are reproducible.
pub struct LineGen {
    state: u64,
}

impl LineGen {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1,
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    pub fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }

    /// Up to `max_len` lines drawn from a small alphabet so matches are common.
    pub fn sequence(&mut self, max_len: usize, alphabet: usize) -> Vec<String> {
        let len = self.below(max_len + 1);
        (0..len)
            .map(|_| format!("line-{}", self.below(alphabet)))
            .collect()
    }

    /// A copy of `base` with a handful of single-line edits applied.
    pub fn mutate(&mut self, base: &[String], edits: usize) -> Vec<String> {
        let mut out = base.to_vec();
        for _ in 0..edits {
            match self.below(3) {
                0 if !out.is_empty() => {
                    let at = self.below(out.len());
                    out.remove(at);
                }
                1 => {
                    let at = self.below(out.len() + 1);
                    out.insert(at, format!("new-{}", self.below(1_000)));
                }
                _ if !out.is_empty() => {
                    let at = self.below(out.len());
                    out[at] = format!("changed-{}", self.below(1_000));
                }
                _ => out.push(format!("new-{}", self.below(1_000))),
            }
        }
        out
    }
}
