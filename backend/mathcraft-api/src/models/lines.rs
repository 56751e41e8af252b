use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A line in slope-intercept form, `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRelation {
    Parallel,
    Perpendicular,
    Intersecting,
}

impl LineRelation {
    pub fn message(&self) -> &'static str {
        match self {
            LineRelation::Parallel => "Lines are parallel!",
            LineRelation::Perpendicular => "Lines are perpendicular!",
            LineRelation::Intersecting => {
                "Lines intersect but are neither parallel nor perpendicular."
            }
        }
    }
}

/// `range` lets NaN through since every comparison with it is false.
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite").with_message("Value must be a finite number".into()))
    }
}

// ---------------- Labs ----------------

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct LineInput {
    #[validate(
        custom(function = "validate_finite"),
        range(min = -5.0, max = 5.0, message = "Slope must be between -5 and 5")
    )]
    pub slope: f64,

    #[validate(
        custom(function = "validate_finite"),
        range(min = -10.0, max = 10.0, message = "Intercept must be between -10 and 10")
    )]
    pub intercept: f64,
}

impl From<LineInput> for Line {
    fn from(input: LineInput) -> Self {
        Line {
            slope: input.slope,
            intercept: input.intercept,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct SampleLineRequest {
    #[validate(nested)]
    pub line: LineInput,

    #[validate(range(min = 2, max = 1000, message = "Points must be between 2 and 1000"))]
    pub points: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SampleLineResponse {
    pub equation: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CompareLinesRequest {
    #[validate(nested)]
    pub first: LineInput,

    #[validate(nested)]
    pub second: LineInput,
}

#[derive(Debug, Serialize)]
pub struct CompareLinesResponse {
    pub relation: LineRelation,
    pub message: &'static str,
    pub intersection: Option<Point>,
}

// ---------------- Real world ----------------

#[derive(Debug, Deserialize, Validate)]
pub struct StreetGridQuery {
    #[validate(
        custom(function = "validate_finite"),
        range(min = -2.0, max = 2.0, message = "Main slope must be between -2 and 2")
    )]
    pub main_slope: f64,
}

#[derive(Debug, Serialize)]
pub struct StreetGridResponse {
    pub main_slope: f64,
    pub cross_slope: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BusinessQuery {
    #[validate(range(
        min = 1000,
        max = 10000,
        message = "Monthly growth must be between 1000 and 10000"
    ))]
    pub growth: u32,

    #[validate(range(
        min = 5000,
        max = 50000,
        message = "Starting revenue must be between 5000 and 50000"
    ))]
    pub start: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevenuePoint {
    pub month: u32,
    pub revenue: u64,
}

#[derive(Debug, Serialize)]
pub struct BusinessResponse {
    pub equation: String,
    pub projection: Vec<RevenuePoint>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TemperatureQuery {
    #[validate(range(min = -40, max = 100, message = "Temperature must be between -40 and 100"))]
    pub celsius: i32,
}

#[derive(Debug, Serialize)]
pub struct TemperatureResponse {
    pub celsius: i32,
    pub fahrenheit: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct MarathonQuery {
    #[validate(
        custom(function = "validate_finite"),
        range(min = 3.0, max = 8.0, message = "Pace must be between 3 and 8 min/km")
    )]
    pub pace: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarathonTime {
    pub total_minutes: f64,
    pub hours: u32,
    pub minutes: u32,
}

#[derive(Debug, Serialize)]
pub struct MarathonResponse {
    pub pace: f64,
    #[serde(flatten)]
    pub time: MarathonTime,
}
