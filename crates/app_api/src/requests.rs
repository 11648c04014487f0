use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct EmptyRequest {}

#[derive(Debug, Deserialize, Default)]
pub struct PeriodRequest {
    pub range: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct DailyRequest {
    pub range: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    /// Densify the series over the full window for charting.
    pub fill: Option<bool>,
    /// With `fill`, leave gap days at zero instead of carrying forward.
    pub fill_zero: Option<bool>,
}
