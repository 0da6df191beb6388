/// Start-time spread across the targets of one stage.
///
/// Offsets follow the order targets were given in, which callers keep equal to
/// document order.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stagger {
    /// Fixed gap in seconds between consecutive targets.
    Each(f64),
    /// Total spread in seconds between the first and the last target.
    Total(f64),
}

impl Stagger {
    /// Start offset of target `index` out of `count`.
    pub fn offset(self, index: usize, count: usize) -> f64 {
        match self {
            Self::Each(gap) => gap.max(0.0) * index as f64,
            Self::Total(amount) if count > 1 => {
                amount.max(0.0) * index as f64 / (count - 1) as f64
            }
            Self::Total(_) => 0.0,
        }
    }

    /// Offset of the last target.
    pub fn spread(self, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        self.offset(count - 1, count)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/stagger.rs"]
mod tests;
