use crate::models::lines::{Line, LineRelation, Point};

/// Slopes closer than this are treated as equal.
pub const SLOPE_EPSILON: f64 = 1e-6;

pub const DEFAULT_X_MIN: f64 = -10.0;
pub const DEFAULT_X_MAX: f64 = 10.0;
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

impl Line {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    pub fn equation(&self) -> String {
        format!("y = {}x + {}", self.slope, self.intercept)
    }

    /// `count` evenly spaced points over `[x_min, x_max]`, both ends included.
    pub fn sample(&self, x_min: f64, x_max: f64, count: usize) -> Vec<Point> {
        match count {
            0 => Vec::new(),
            1 => vec![Point {
                x: x_min,
                y: self.y_at(x_min),
            }],
            _ => {
                let step = (x_max - x_min) / (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        let x = if i == count - 1 {
                            x_max
                        } else {
                            x_min + step * i as f64
                        };
                        Point { x, y: self.y_at(x) }
                    })
                    .collect()
            }
        }
    }
}

/// Parallel wins over perpendicular, so coincident lines report as parallel.
pub fn classify(a: &Line, b: &Line) -> LineRelation {
    if (a.slope - b.slope).abs() < SLOPE_EPSILON {
        LineRelation::Parallel
    } else if (a.slope * b.slope + 1.0).abs() < SLOPE_EPSILON {
        LineRelation::Perpendicular
    } else {
        LineRelation::Intersecting
    }
}

/// `None` when the lines are parallel (or coincident).
pub fn intersection(a: &Line, b: &Line) -> Option<Point> {
    if (a.slope - b.slope).abs() < SLOPE_EPSILON {
        return None;
    }
    let x = (b.intercept - a.intercept) / (a.slope - b.slope);
    Some(Point { x, y: a.y_at(x) })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_y_at() {
        let line = Line::new(3.0, 2.0);
        assert_eq!(line.y_at(0.0), 2.0);
        assert_eq!(line.y_at(2.0), 8.0);
        assert_eq!(line.y_at(-1.0), -1.0);
    }

    #[test]
    fn test_equation_format() {
        assert_eq!(Line::new(1.5, -2.0).equation(), "y = 1.5x + -2");
    }

    #[test]
    fn test_sample_covers_range() {
        let points = Line::new(1.0, 0.0).sample(DEFAULT_X_MIN, DEFAULT_X_MAX, DEFAULT_SAMPLE_COUNT);
        assert_eq!(points.len(), 200);
        assert_eq!(points[0].x, -10.0);
        assert_eq!(points[199].x, 10.0);
        assert!(points.windows(2).all(|w| w[0].x < w[1].x));
        assert!(points.iter().all(|p| close(p.x, p.y)));
    }

    #[test]
    fn test_sample_degenerate_counts() {
        let line = Line::new(2.0, 1.0);
        assert!(line.sample(-1.0, 1.0, 0).is_empty());
        assert_eq!(line.sample(-1.0, 1.0, 1), vec![Point { x: -1.0, y: -1.0 }]);
    }

    #[test]
    fn test_classify() {
        assert_eq!(
            classify(&Line::new(2.0, 1.0), &Line::new(2.0, -3.0)),
            LineRelation::Parallel
        );
        assert_eq!(
            classify(&Line::new(2.0, 1.0), &Line::new(-0.5, 4.0)),
            LineRelation::Perpendicular
        );
        assert_eq!(
            classify(&Line::new(1.0, 0.0), &Line::new(3.0, 2.0)),
            LineRelation::Intersecting
        );
        // Coincident lines count as parallel
        assert_eq!(
            classify(&Line::new(1.0, 0.0), &Line::new(1.0, 0.0)),
            LineRelation::Parallel
        );
    }

    #[test]
    fn test_intersection() {
        let point = intersection(&Line::new(1.0, 0.0), &Line::new(-1.0, 2.0)).unwrap();
        assert!(close(point.x, 1.0));
        assert!(close(point.y, 1.0));

        assert_eq!(intersection(&Line::new(4.0, 1.0), &Line::new(4.0, 5.0)), None);
    }

    #[test]
    fn test_intersection_lies_on_both_lines() {
        let a = Line::new(-2.5, 7.0);
        let b = Line::new(0.75, -3.0);
        let point = intersection(&a, &b).unwrap();
        assert!(close(a.y_at(point.x), point.y));
        assert!(close(b.y_at(point.x), point.y));
    }
}
