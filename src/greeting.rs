use axum::extract::Query;
use serde::Deserialize;

pub const ENDPOINT_GREETING: &str = "/";
pub const DEFAULT_WHO: &str = "World";

#[derive(Debug, Default, Deserialize)]
pub struct GreetingParams {
    pub who: Option<String>,
}

pub fn greeting(who: &str) -> String {
    format!(
        "Hello {}!\nWelcome to a short demo on elasticity and state in cloud native applications.\n",
        who
    )
}

pub async fn handle_greeting(Query(params): Query<GreetingParams>) -> String {
    greeting(params.who.as_deref().unwrap_or(DEFAULT_WHO))
}
