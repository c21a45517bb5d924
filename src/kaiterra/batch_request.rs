use crate::domain::{AqiStandard, Unit, is_valid_sensor_id};
use crate::error::InputError;
use serde::Serialize;

pub const MAX_BATCH_SIZE: usize = 100;

/// Query options shared by all sub-requests of a batch.
#[derive(Debug, Default, Clone)]
pub struct BatchOptions<'a> {
    pub preferred_units: &'a [Unit],
    pub aqi_standard: Option<AqiStandard>,
}

/// A single GET that the batch endpoint executes on the caller's behalf.
#[derive(Debug, PartialEq, Serialize)]
pub struct SubRequest {
    pub method: &'static str,
    pub relative_url: String,
}

/// Builds one sub-request per sensor, in the order of `sensor_ids`.
///
/// Results are matched up with the requested sensors by position, so the order is kept as is.
/// Ids must be given as a list; a single id string is rejected by the compiler:
///
/// ```compile_fail
/// use kaiterra_client::{BatchOptions, build_batch};
///
/// build_batch("/lasereggs/00000000-0001-0001-0000-00007e57c0de", &BatchOptions::default());
/// ```
pub fn build_batch<S: AsRef<str>>(sensor_ids: &[S], options: &BatchOptions) -> Result<Vec<SubRequest>, InputError> {
    if sensor_ids.is_empty() {
        return Err(InputError::EmptyBatch);
    }
    if sensor_ids.len() > MAX_BATCH_SIZE {
        return Err(InputError::BatchTooLarge {
            len: sensor_ids.len(),
            max: MAX_BATCH_SIZE,
        });
    }

    let query = query_string(options);

    sensor_ids
        .iter()
        .map(|sensor_id| {
            let sensor_id = sensor_id.as_ref();
            if !is_valid_sensor_id(sensor_id) {
                return Err(InputError::InvalidSensorId { id: sensor_id.to_string() });
            }

            Ok(SubRequest {
                method: "GET",
                relative_url: format!("{}?{}", sensor_id, query),
            })
        })
        .collect()
}

fn query_string(options: &BatchOptions) -> String {
    let mut params = vec!["format=series_major".to_string()];
    if let Some(aqi_standard) = options.aqi_standard {
        params.push(format!("aqi={}", aqi_standard.code()));
    }
    for unit in options.preferred_units {
        params.push(format!("units={}", unit.code()));
    }
    params.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const LASER_EGG: &str = "/lasereggs/00000000-0001-0001-0000-00007e57c0de";
    const SENSEDGE: &str = "/sensedges/00000000-0031-0001-0000-00007e57c0de";

    #[test]
    fn builds_one_sub_request_per_sensor_in_order() -> Result<(), InputError> {
        let options = BatchOptions {
            preferred_units: &[Unit::DegreesCelsius],
            aqi_standard: None,
        };

        let requests = build_batch(&[LASER_EGG, SENSEDGE], &options)?;

        assert_eq!(
            requests,
            vec![
                SubRequest {
                    method: "GET",
                    relative_url: format!("{}?format=series_major&units=C", LASER_EGG),
                },
                SubRequest {
                    method: "GET",
                    relative_url: format!("{}?format=series_major&units=C", SENSEDGE),
                },
            ]
        );
        Ok(())
    }

    #[rstest]
    #[case(None, &[], "format=series_major")]
    #[case(Some(AqiStandard::Usa), &[], "format=series_major&aqi=us")]
    #[case(Some(AqiStandard::India), &[Unit::DegreesFahrenheit], "format=series_major&aqi=in&units=F")]
    #[case(None, &[Unit::PartsPerBillion, Unit::MicrogramsPerCubicMeter], "format=series_major&units=ppb&units=µg/m³")]
    #[case(Some(AqiStandard::China), &[Unit::Percent, Unit::DegreesCelsius], "format=series_major&aqi=cn&units=%&units=C")]
    fn appends_the_query_options(#[case] aqi_standard: Option<AqiStandard>, #[case] preferred_units: &[Unit], #[case] expected_query: &str) -> Result<(), InputError> {
        let options = BatchOptions { preferred_units, aqi_standard };

        let requests = build_batch(&[SENSEDGE], &options)?;

        assert_eq!(requests[0].relative_url, format!("{}?{}", SENSEDGE, expected_query));
        Ok(())
    }

    #[test]
    fn serializes_to_the_batch_wire_format() -> Result<(), Box<dyn std::error::Error>> {
        let requests = build_batch(&[LASER_EGG.to_string()], &BatchOptions::default())?;

        assert_eq!(
            serde_json::to_value(&requests)?,
            serde_json::json!([{ "method": "GET", "relative_url": format!("{}?format=series_major", LASER_EGG) }])
        );
        Ok(())
    }

    #[test]
    fn accepts_the_maximum_batch_size() -> Result<(), InputError> {
        let sensor_ids = vec![LASER_EGG; MAX_BATCH_SIZE];

        let requests = build_batch(&sensor_ids, &BatchOptions::default())?;

        assert_eq!(requests.len(), MAX_BATCH_SIZE);
        Ok(())
    }

    #[test]
    fn rejects_a_batch_that_is_too_large() {
        let sensor_ids = vec![LASER_EGG; MAX_BATCH_SIZE + 1];

        let result = build_batch(&sensor_ids, &BatchOptions::default());

        assert_eq!(result, Err(InputError::BatchTooLarge { len: 101, max: 100 }));
    }

    #[test]
    fn rejects_an_empty_batch() {
        let sensor_ids: [&str; 0] = [];

        let result = build_batch(&sensor_ids, &BatchOptions::default());

        assert_eq!(result, Err(InputError::EmptyBatch));
    }

    #[test]
    fn rejects_the_batch_at_the_first_invalid_sensor_id() {
        let sensor_ids = [LASER_EGG, "/lasereggs/0000000-0001-0001-0000-00007e57c0de", "thing"];

        let result = build_batch(&sensor_ids, &BatchOptions::default());

        assert_eq!(
            result,
            Err(InputError::InvalidSensorId {
                id: "/lasereggs/0000000-0001-0001-0000-00007e57c0de".to_string()
            })
        );
    }
}
