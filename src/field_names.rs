/// Centralized field naming
///
/// The names double as the CSV header and the plot legend labels, in record order.
use crate::constants::FIELD_COUNT;

/// All field names in record order.
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "COUNT_time",
    "drivinstage",
    "turn",
    "omega",
    "hsv.val",
    "distance",
    "gyro_deg",
];

/// Index of the time column.
pub const TIME_FIELD_INDEX: usize = 0;

/// Get the field name for a given index
///
/// # Panics
/// Panics if index is not below `FIELD_COUNT`
pub fn field_name(index: usize) -> &'static str {
    match FIELD_NAMES.get(index) {
        Some(name) => name,
        None => panic!(
            "Invalid field index: {}. Expected 0..{}",
            index, FIELD_COUNT
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name() {
        assert_eq!(field_name(0), "COUNT_time");
        assert_eq!(field_name(4), "hsv.val");
        assert_eq!(field_name(6), "gyro_deg");
    }

    #[test]
    #[should_panic(expected = "Invalid field index")]
    fn test_field_name_panic() {
        field_name(7);
    }

    #[test]
    fn test_time_field_is_first() {
        assert_eq!(field_name(TIME_FIELD_INDEX), "COUNT_time");
    }

    #[test]
    fn test_header_row_text() {
        assert_eq!(
            FIELD_NAMES.join(","),
            "COUNT_time,drivinstage,turn,omega,hsv.val,distance,gyro_deg"
        );
    }
}
