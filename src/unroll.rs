//! Splitting a row count into unrolled blocks plus a remainder.

/// How a k×-unrolled kernel walks `rows` rows: `blocks` passes of `factor`
/// rows each, then `remainder` rows one at a time.
///
/// ```
/// use linalg_bench::UnrollPlan;
///
/// let plan = UnrollPlan::new(9, 4);
/// assert_eq!((plan.blocks, plan.remainder), (2, 1));
/// assert_eq!(plan.remainder_start(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnrollPlan {
    pub factor: usize,
    pub blocks: usize,
    pub remainder: usize,
}

impl UnrollPlan {
    /// # Panics
    ///
    /// Panics if `factor` is zero.
    pub fn new(rows: usize, factor: usize) -> Self {
        assert!(factor > 0, "unroll factor must be positive");
        Self {
            factor,
            blocks: rows / factor,
            remainder: rows % factor,
        }
    }

    /// Index of the first row left over after the unrolled blocks.
    pub fn remainder_start(&self) -> usize {
        self.blocks * self.factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiple_has_no_remainder() {
        let plan = UnrollPlan::new(8, 4);
        assert_eq!(plan.blocks, 2);
        assert_eq!(plan.remainder, 0);
    }

    #[test]
    fn one_leftover_row() {
        let plan = UnrollPlan::new(9, 4);
        assert_eq!(plan.blocks, 2);
        assert_eq!(plan.remainder, 1);
        assert_eq!(plan.remainder_start(), 8);
    }

    #[test]
    fn fewer_rows_than_factor() {
        let plan = UnrollPlan::new(3, 4);
        assert_eq!((plan.blocks, plan.remainder), (0, 3));
    }
}
