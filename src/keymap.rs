// Pure key -> action mapping for the keyboard shortcuts.
// Kept free of web-sys so host tests can include it directly.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Select a catalog entry by digit (`1..=9`, `0` = tenth).
    Digit(u8),
    NextPattern,
    PrevPattern,
    CycleColor,
}

// Base colours cycled by the `c` key
pub const PALETTE: [[f32; 3]; 5] = [
    [0.0, 0.8, 1.0], // cyan
    [1.0, 0.35, 0.6], // pink
    [1.0, 0.7, 0.1], // amber
    [0.4, 1.0, 0.5], // mint
    [0.7, 0.5, 1.0], // violet
];

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowRight" | "." => Some(KeyAction::NextPattern),
        "ArrowLeft" | "," => Some(KeyAction::PrevPattern),
        "c" | "C" => Some(KeyAction::CycleColor),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c.to_digit(10).map(|d| KeyAction::Digit(d as u8)),
                _ => None,
            }
        }
    }
}

#[inline]
pub fn next_palette_index(current: usize) -> usize {
    (current + 1) % PALETTE.len()
}
