//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how quantization error is distributed to
//! neighboring pixels that the raster scan has not reached yet.

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`; the neighbor at `(x + dx, y + dy)`
/// receives `error * weight / divisor`. Entries are applied in the order
/// listed, which fixes the floating-point accumulation order.
///
/// The total error propagated is `sum(weights) / divisor`. Floyd-Steinberg
/// propagates all of it, Atkinson only 6/8.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],

    /// Each neighbor receives `error * weight / divisor`.
    pub divisor: u8,
}

impl Kernel {
    /// Fraction of the quantization error this kernel passes on.
    pub fn propagation(&self) -> f32 {
        let total: u32 = self.entries.iter().map(|&(_, _, w)| w as u32).sum();
        total as f32 / self.divisor as f32
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Atkinson dithering kernel.
///
/// Six neighbors receive 1/8 each; the remaining 2/8 is dropped, which
/// keeps local contrast higher than Floyd-Steinberg.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
};
