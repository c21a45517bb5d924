use serde::Deserialize;

/// One element of the batch endpoint's response array.
#[derive(Debug, Deserialize)]
pub struct SubResponse {
    pub code: i64,
    pub body: String,
}

// API: series_major body of GET /lasereggs/{id} and /sensedges/{id}
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct SeriesBody {
    pub id: Option<String>,
    pub latest: Option<Vec<ParameterSeries>>,
    #[serde(rename = "info.aqi")]
    pub info_aqi: Option<Vec<ParameterSeries>>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct ParameterSeries {
    pub param: String,
    pub units: String,
    pub source: Option<String>,
    pub span: Option<u64>, // seconds covered by each point
    pub points: Vec<SeriesPoint>,
}

#[derive(Debug, Deserialize)]
pub struct SeriesPoint {
    pub ts: String,
    pub value: f64,
    pub aqi: Option<i64>,
}
