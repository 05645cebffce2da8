use polars::prelude::{col, lit, LazyFrame};

/// Name of the helper column holding each row's calendar month during partitioning.
pub(crate) const MONTH_COLUMN: &str = "__windrose_month";

pub trait MonthFilterExt {
    /// Keeps rows whose month column lies in `first..=last` (1-indexed).
    ///
    /// Rows with a null month never match.
    fn filter_months(self, first: u32, last: u32) -> LazyFrame;

    /// Keeps rows of a single calendar month.
    fn filter_month(self, month: u32) -> LazyFrame;
}

impl MonthFilterExt for LazyFrame {
    fn filter_months(self, first: u32, last: u32) -> LazyFrame {
        self.filter(
            col(MONTH_COLUMN)
                .gt_eq(lit(first))
                .and(col(MONTH_COLUMN).lt_eq(lit(last))),
        )
    }

    fn filter_month(self, month: u32) -> LazyFrame {
        self.filter(col(MONTH_COLUMN).eq(lit(month)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn tagged_frame() -> PolarsResult<DataFrame> {
        df!(
            "speed" => ["1", "2", "3", "4", "5"],
            MONTH_COLUMN => [Some(1u32), Some(2), None, Some(3), Some(4)],
        )
    }

    #[test]
    fn filter_months_is_inclusive_and_skips_nulls() -> PolarsResult<()> {
        let filtered = tagged_frame()?.lazy().filter_months(1, 3).collect()?;
        let speeds: Vec<Option<&str>> = filtered.column("speed")?.str()?.into_iter().collect();
        assert_eq!(speeds, vec![Some("1"), Some("2"), Some("4")]);
        Ok(())
    }

    #[test]
    fn filter_month_matches_exactly() -> PolarsResult<()> {
        let filtered = tagged_frame()?.lazy().filter_month(4).collect()?;
        assert_eq!(filtered.height(), 1);
        assert_eq!(filtered.column("speed")?.str()?.get(0), Some("5"));
        Ok(())
    }
}
