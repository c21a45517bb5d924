use crate::domain::{BatchResult, DataPoint, ParameterReading, SensorSnapshot, Unit, parse_timestamp};
use crate::error::FormatError;
use crate::kaiterra::batch_response::{ParameterSeries, SeriesBody, SubResponse};
use serde_json::Value;
use tracing::{debug, warn};

/// Maps the batch endpoint's response array onto one optional snapshot per sub-response.
///
/// The result has the same length and order as the response array. Failed or empty
/// sub-responses become `None`, while unparseable timestamps or unknown units fail the whole batch.
pub fn normalize(response: Value) -> Result<BatchResult, FormatError> {
    let Value::Array(entries) = response else {
        warn!(response = %response, "⚠️ Batch response is not an array");
        return Err(FormatError::UnexpectedResponse {
            reason: "expected a JSON array".to_string(),
        });
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(position, entry)| normalize_entry(position, entry))
        .collect()
}

fn normalize_entry(position: usize, entry: Value) -> Result<Option<SensorSnapshot>, FormatError> {
    let Ok(sub_response) = serde_json::from_value::<SubResponse>(entry) else {
        debug!(position, "Skipping malformed sub-response");
        return Ok(None);
    };

    if !(200..400).contains(&sub_response.code) {
        debug!(position, code = sub_response.code, "Sensor has no readings");
        return Ok(None);
    }

    let body = serde_json::from_str::<SeriesBody>(&sub_response.body)?;
    let Some(series) = select_series(body) else {
        debug!(position, "Sensor has never reported any data");
        return Ok(None);
    };

    let mut snapshot = SensorSnapshot::with_capacity(series.len());
    for parameter in series {
        if let Some((name, reading)) = map_parameter(parameter)? {
            snapshot.insert(name, reading);
        }
    }

    Ok(Some(snapshot))
}

// `latest` wins over `info.aqi` unless it is missing or empty. A field that is present
// but empty still yields an empty snapshot, only two missing fields mean no data.
fn select_series(body: SeriesBody) -> Option<Vec<ParameterSeries>> {
    match (body.latest, body.info_aqi) {
        (Some(latest), _) if !latest.is_empty() => Some(latest),
        (_, Some(info_aqi)) if !info_aqi.is_empty() => Some(info_aqi),
        (None, None) => None,
        _ => Some(Vec::new()),
    }
}

fn map_parameter(parameter: ParameterSeries) -> Result<Option<(String, ParameterReading)>, FormatError> {
    let Some(point) = parameter.points.into_iter().next() else {
        return Ok(None);
    };

    let reading = ParameterReading {
        unit: Unit::from_code(&parameter.units)?,
        source: parameter.source,
        points: vec![DataPoint {
            timestamp: parse_timestamp(&point.ts)?,
            value: point.value,
            aqi: point.aqi,
        }],
    };

    Ok(Some((parameter.param, reading)))
}
