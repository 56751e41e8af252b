use crate::models::lines::{MarathonTime, RevenuePoint};

pub const MARATHON_KM: f64 = 42.195;
pub const PROJECTION_MONTHS: u32 = 12;

/// Below this magnitude the main street is treated as flat.
const FLAT_SLOPE_THRESHOLD: f64 = 0.01;

pub fn cross_street_slope(main_slope: f64) -> f64 {
    if main_slope.abs() > FLAT_SLOPE_THRESHOLD {
        -1.0 / main_slope
    } else {
        0.0
    }
}

/// Linear revenue for months `0..=PROJECTION_MONTHS`.
pub fn revenue_projection(start: u32, growth: u32) -> Vec<RevenuePoint> {
    (0..=PROJECTION_MONTHS)
        .map(|month| RevenuePoint {
            month,
            revenue: start as u64 + growth as u64 * month as u64,
        })
        .collect()
}

pub fn revenue_equation(start: u32, growth: u32) -> String {
    format!("Revenue = {}x + {}", growth, start)
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    9.0 / 5.0 * celsius + 32.0
}

pub fn marathon_time(pace_min_per_km: f64) -> MarathonTime {
    let total_minutes = pace_min_per_km * MARATHON_KM;
    MarathonTime {
        total_minutes,
        hours: (total_minutes / 60.0).floor() as u32,
        minutes: (total_minutes % 60.0).floor() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_street_slope() {
        assert_eq!(cross_street_slope(1.0), -1.0);
        assert_eq!(cross_street_slope(-2.0), 0.5);
        assert_eq!(cross_street_slope(0.5), -2.0);
        assert_eq!(cross_street_slope(0.0), 0.0);
        assert_eq!(cross_street_slope(0.01), 0.0);
        assert_eq!(cross_street_slope(-0.005), 0.0);
    }

    #[test]
    fn test_revenue_projection() {
        let projection = revenue_projection(20000, 3000);
        assert_eq!(projection.len(), 13);
        assert_eq!(projection[0], RevenuePoint { month: 0, revenue: 20000 });
        assert_eq!(projection[12], RevenuePoint { month: 12, revenue: 56000 });
        assert_eq!(revenue_equation(20000, 3000), "Revenue = 3000x + 20000");
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        for (celsius, fahrenheit) in [(0.0, 32.0), (100.0, 212.0), (-40.0, -40.0), (20.0, 68.0)] {
            assert!((celsius_to_fahrenheit(celsius) - fahrenheit).abs() < 1e-9);
        }
    }

    #[test]
    fn test_marathon_time() {
        // 5 min/km -> 210.975 min
        let time = marathon_time(5.0);
        assert_eq!(time.hours, 3);
        assert_eq!(time.minutes, 30);
        assert!((time.total_minutes - 210.975).abs() < 1e-9);

        let fast = marathon_time(3.0);
        assert_eq!((fast.hours, fast.minutes), (2, 6));
    }
}
