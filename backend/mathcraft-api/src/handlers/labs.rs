use axum::{response::IntoResponse, Json};

use crate::{
    extractors::ValidatedJson,
    metrics::record_lab_calculation,
    models::lines::{
        CompareLinesRequest, CompareLinesResponse, Line, SampleLineRequest, SampleLineResponse,
    },
    services::line_lab::{
        classify, intersection, DEFAULT_SAMPLE_COUNT, DEFAULT_X_MAX, DEFAULT_X_MIN,
    },
};

/// POST /api/v1/labs/line - plot data for one line
pub async fn sample_line(
    ValidatedJson(req): ValidatedJson<SampleLineRequest>,
) -> impl IntoResponse {
    record_lab_calculation("sample_line");

    let line = Line::from(req.line);
    let count = req.points.unwrap_or(DEFAULT_SAMPLE_COUNT);

    Json(SampleLineResponse {
        equation: line.equation(),
        points: line.sample(DEFAULT_X_MIN, DEFAULT_X_MAX, count),
    })
}

/// POST /api/v1/labs/compare - parallel/perpendicular check and intersection
pub async fn compare_lines(
    ValidatedJson(req): ValidatedJson<CompareLinesRequest>,
) -> impl IntoResponse {
    record_lab_calculation("compare_lines");

    let first = Line::from(req.first);
    let second = Line::from(req.second);
    let relation = classify(&first, &second);

    Json(CompareLinesResponse {
        relation,
        message: relation.message(),
        intersection: intersection(&first, &second),
    })
}
