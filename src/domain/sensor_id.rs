const DEVICE_TYPES: [&str; 4] = ["lasereggs", "laseregg", "sensedges", "sensedge"];

// Lengths of the 8-4-4-4-12 UUID groups
const ID_GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// Checks that `id` looks like `/lasereggs/<udid>` or `/sensedges/<udid>`.
///
/// The leading slash is optional, the device type may be singular or plural and the
/// udid is 32 hex digits, optionally hyphenated at the canonical UUID positions.
/// Matching ignores case. Whether the sensor actually exists is up to the server.
pub fn is_valid_sensor_id(id: &str) -> bool {
    let path = id.strip_prefix('/').unwrap_or(id);

    let Some((device_type, udid)) = path.split_once('/') else {
        return false;
    };

    DEVICE_TYPES.iter().any(|t| t.eq_ignore_ascii_case(device_type)) && is_valid_udid(udid)
}

fn is_valid_udid(udid: &str) -> bool {
    let mut rest = udid;

    for (index, len) in ID_GROUPS.iter().enumerate() {
        if index > 0 {
            rest = rest.strip_prefix('-').unwrap_or(rest);
        }

        let Some((group, tail)) = rest.split_at_checked(*len) else {
            return false;
        };
        if !group.chars().all(|c| c.is_ascii_hexdigit()) {
            return false;
        }
        rest = tail;
    }

    rest.is_empty()
}
