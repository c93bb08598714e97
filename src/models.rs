use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct KeyRequest {
    pub key: String,
    #[serde(default)]
    pub ctrl_key: bool,
    #[serde(default)]
    pub meta_key: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub count: i64,
    pub total_clicks: u64,
    pub max_value: i64,
    pub min_value: i64,
    pub tone: String,
}

#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub action: String,
    pub feedback: String,
    pub count: i64,
    pub total_clicks: u64,
    pub max_value: i64,
    pub min_value: i64,
    pub tone: String,
}
