/// Per-level heading counters producing path-style identifiers.
///
/// Slot `n` counts headings of level `n + 1`. Level-1 headings are never
/// numbered, so slot 0 stays at zero and every identifier starts with `0`.
#[derive(Debug, Default, Clone)]
pub struct HeadingCounter {
    slots: [u32; 6],
}

impl HeadingCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a heading of `level` (2-6) and return its identifier.
    ///
    /// Deeper slots are reset, so `## A`, `### A1`, `## B` yield
    /// `0-1`, `0-1-1`, `0-2`.
    pub fn advance(&mut self, level: u8) -> String {
        let index = usize::from(level.clamp(2, 6)) - 1;
        self.slots[index] += 1;
        for slot in &mut self.slots[index + 1..] {
            *slot = 0;
        }

        self.slots[..=index]
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join("-")
    }
}
