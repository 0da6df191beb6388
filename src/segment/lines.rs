use std::ops::Range;

use crate::foundation::core::Rect;

/// Tolerance used when grouping word boxes into text lines.
pub const DEFAULT_LINE_TOLERANCE: f64 = 1.0;

/// Groups consecutive boxes into visual rows.
///
/// Implementations only see geometry, so grouping is testable without a layout engine.
pub trait LineGrouper {
    /// Split `boxes` (in document order) into contiguous index ranges, one per row.
    fn group(&self, boxes: &[Rect]) -> Vec<Range<usize>>;
}

/// Groups boxes whose top edge is within `tolerance` px of the current row's first box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TopAligned {
    /// Maximum distance between tops in px.
    pub tolerance: f64,
}

impl TopAligned {
    /// Grouper with an explicit tolerance; negative or non-finite values become `0`.
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance: if tolerance.is_finite() {
                tolerance.max(0.0)
            } else {
                0.0
            },
        }
    }
}

impl Default for TopAligned {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_TOLERANCE)
    }
}

impl LineGrouper for TopAligned {
    fn group(&self, boxes: &[Rect]) -> Vec<Range<usize>> {
        let Some(first) = boxes.first() else {
            return Vec::new();
        };
        let mut rows = Vec::new();
        let mut row_start = 0;
        let mut row_top = first.y0;
        for (i, b) in boxes.iter().enumerate().skip(1) {
            if (b.y0 - row_top).abs() > self.tolerance {
                rows.push(row_start..i);
                row_start = i;
                row_top = b.y0;
            }
        }
        rows.push(row_start..boxes.len());
        rows
    }
}

#[cfg(test)]
#[path = "../../tests/unit/segment/lines.rs"]
mod tests;
