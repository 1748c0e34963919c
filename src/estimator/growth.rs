//! Five-year revenue projection

use serde::Serialize;

/// Number of projected years after the current one
pub const PROJECTION_YEARS: u32 = 5;

/// One point of the revenue chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthPoint {
    pub label: String,
    #[serde(serialize_with = "crate::non_finite::serialize")]
    pub revenue: f64,
}

/// "Current" followed by Year 1..=5
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ProjectedGrowthSeries {
    points: Vec<GrowthPoint>,
}

impl ProjectedGrowthSeries {
    /// Compound current revenue by `1 + total_savings / annual_revenue` per year
    ///
    /// A zero revenue makes the factor non-finite; that propagates into
    /// every projected point.
    pub fn project(annual_revenue: f64, total_savings: f64) -> Self {
        let rate = growth_rate(annual_revenue, total_savings);

        let mut points = Vec::with_capacity(PROJECTION_YEARS as usize + 1);
        points.push(GrowthPoint {
            label: "Current".to_string(),
            revenue: annual_revenue,
        });

        for year in 1..=PROJECTION_YEARS {
            points.push(GrowthPoint {
                label: format!("Year {}", year),
                revenue: annual_revenue * rate.powi(year as i32),
            });
        }

        Self { points }
    }

    pub fn points(&self) -> &[GrowthPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Revenue at the end of the projection
    pub fn final_revenue(&self) -> Option<f64> {
        self.points.last().map(|p| p.revenue)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GrowthPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a ProjectedGrowthSeries {
    type Item = &'a GrowthPoint;
    type IntoIter = std::slice::Iter<'a, GrowthPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Annual growth factor
pub fn growth_rate(annual_revenue: f64, total_savings: f64) -> f64 {
    1.0 + total_savings / annual_revenue
}
