//! Spending trend series
//!
//! The trend chart renders a fixed six-point demo series. It is placeholder
//! decoration carried over from the product design: no historical spending is
//! recorded anywhere in the app, so the series is independent of the tracked
//! services and must not be read as real data.

/// One bar of the trend chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    /// Month abbreviation used as the bar label
    pub month: &'static str,
    /// Spending value in whole dollars
    pub spending: u64,
}

/// The fixed placeholder series shown by the trend chart
#[derive(Debug, Clone)]
pub struct TrendSeries {
    pub points: Vec<TrendPoint>,
}

impl TrendSeries {
    /// The six-point demo series (not derived from tracked services)
    pub fn placeholder() -> Self {
        Self {
            points: vec![
                TrendPoint { month: "Jan", spending: 45 },
                TrendPoint { month: "Feb", spending: 52 },
                TrendPoint { month: "Mar", spending: 48 },
                TrendPoint { month: "Apr", spending: 61 },
                TrendPoint { month: "May", spending: 55 },
                TrendPoint { month: "Jun", spending: 67 },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_shape() {
        let series = TrendSeries::placeholder();
        assert_eq!(series.points.len(), 6);
        assert_eq!(series.points[0].month, "Jan");
        assert_eq!(series.points[5].spending, 67);
    }
}
