use axum::{response::IntoResponse, Json};

use crate::{
    extractors::ValidatedQuery,
    metrics::record_lab_calculation,
    models::lines::{
        BusinessQuery, BusinessResponse, MarathonQuery, MarathonResponse, StreetGridQuery,
        StreetGridResponse, TemperatureQuery, TemperatureResponse,
    },
    services::real_world,
};

pub async fn street_grid(ValidatedQuery(q): ValidatedQuery<StreetGridQuery>) -> impl IntoResponse {
    record_lab_calculation("street_grid");
    Json(StreetGridResponse {
        main_slope: q.main_slope,
        cross_slope: real_world::cross_street_slope(q.main_slope),
    })
}

pub async fn business(ValidatedQuery(q): ValidatedQuery<BusinessQuery>) -> impl IntoResponse {
    record_lab_calculation("business");
    Json(BusinessResponse {
        equation: real_world::revenue_equation(q.start, q.growth),
        projection: real_world::revenue_projection(q.start, q.growth),
    })
}

pub async fn temperature(
    ValidatedQuery(q): ValidatedQuery<TemperatureQuery>,
) -> impl IntoResponse {
    record_lab_calculation("temperature");
    Json(TemperatureResponse {
        celsius: q.celsius,
        fahrenheit: real_world::celsius_to_fahrenheit(q.celsius as f64),
    })
}

pub async fn marathon(ValidatedQuery(q): ValidatedQuery<MarathonQuery>) -> impl IntoResponse {
    record_lab_calculation("marathon");
    Json(MarathonResponse {
        pace: q.pace,
        time: real_world::marathon_time(q.pace),
    })
}
