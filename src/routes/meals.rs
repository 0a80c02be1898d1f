use axum::{http, Json};
use serde::Serialize;

/// A single meal and its energy content.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Meal {
    pub name: &'static str,
    /// Kilocalories.
    pub calories: u32,
}

/// Every meal the service knows about, in the order they are returned.
pub const MEALS: &[Meal] = &[Meal { name: "Banana", calories: 105 }];

#[derive(Serialize, Debug)]
pub struct MealsResponse {
    meals: &'static [Meal],
}

#[tracing::instrument(name = "Listing meals")]
pub async fn meals() -> (http::StatusCode, Json<MealsResponse>) {
    (http::StatusCode::OK, Json(MealsResponse { meals: MEALS }))
}
