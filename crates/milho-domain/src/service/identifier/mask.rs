//! Progressive input masks
//!
//! A mask is an ordered table of steps. The first step whose `max_len`
//! covers the cleaned input supplies the template; inputs longer than
//! the last step are truncated to it. In a template `#` is a slot for
//! one input character and everything else is a literal separator.
//! A literal is emitted only when a character follows it, so partial
//! input never ends in a dangling separator.

/// Slot marker inside a template
pub const SLOT: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskStep {
    pub max_len: usize,
    pub template: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Mask {
    steps: &'static [MaskStep],
}

impl Mask {
    /// `steps` must be non-empty and sorted by `max_len`.
    pub const fn new(steps: &'static [MaskStep]) -> Self {
        Self { steps }
    }

    /// Longest input the mask accepts
    pub fn max_len(&self) -> usize {
        self.steps.last().map(|s| s.max_len).unwrap_or(0)
    }

    /// Template used for an input of `len` characters
    pub fn template_for(&self, len: usize) -> &'static str {
        self.steps
            .iter()
            .find(|s| len <= s.max_len)
            .or_else(|| self.steps.last())
            .map(|s| s.template)
            .unwrap_or("")
    }

    /// Mask already-cleaned input, truncating to `max_len`.
    pub fn apply(&self, cleaned: &str) -> String {
        let limited: String = cleaned.chars().take(self.max_len()).collect();
        let template = self.template_for(limited.chars().count());
        fill(template, &limited)
    }
}

fn fill(template: &str, input: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut pending = String::new();
    let mut chars = input.chars();

    for t in template.chars() {
        if t != SLOT {
            pending.push(t);
            continue;
        }
        match chars.next() {
            Some(c) => {
                out.push_str(&pending);
                pending.clear();
                out.push(c);
            }
            None => break,
        }
    }
    out
}

/// Keep ASCII digits only
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Uppercase, then keep ASCII letters and digits only
pub fn alphanumeric_upper(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}
