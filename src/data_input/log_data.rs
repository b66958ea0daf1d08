// src/data_input/log_data.rs

use crate::constants::{FIELD_COUNT, FIELD_WIDTH_BYTES, RECORD_SIZE_BYTES};

/// One sampled telemetry tick, exactly as the robot wrote it.
/// Layout: u32 timestamp followed by six i32 channels, native byte order, no padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryRecord {
    pub count_time: u32,    // Timestamp (ms).
    pub driving_stage: i32, // Straight/corner state, scaled x100 by the producer.
    pub turn: i32,          // Steering ratio.
    pub omega: i32,         // Angular velocity.
    pub hsv_val: i32,       // Color sensor HSV value channel.
    pub distance: i32,      // Ultrasonic distance.
    pub gyro_deg: i32,      // Gyro heading (degrees).
}

impl TelemetryRecord {
    /// Decodes one fixed-size chunk using native byte order.
    pub fn from_bytes(chunk: &[u8; RECORD_SIZE_BYTES]) -> Self {
        let word = |index: usize| -> [u8; FIELD_WIDTH_BYTES] {
            let start = index * FIELD_WIDTH_BYTES;
            let mut bytes = [0u8; FIELD_WIDTH_BYTES];
            bytes.copy_from_slice(&chunk[start..start + FIELD_WIDTH_BYTES]);
            bytes
        };

        Self {
            count_time: u32::from_ne_bytes(word(0)),
            driving_stage: i32::from_ne_bytes(word(1)),
            turn: i32::from_ne_bytes(word(2)),
            omega: i32::from_ne_bytes(word(3)),
            hsv_val: i32::from_ne_bytes(word(4)),
            distance: i32::from_ne_bytes(word(5)),
            gyro_deg: i32::from_ne_bytes(word(6)),
        }
    }

    /// Encodes the record with the same layout `from_bytes` reads.
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE_BYTES] {
        let words: [[u8; FIELD_WIDTH_BYTES]; FIELD_COUNT] = [
            self.count_time.to_ne_bytes(),
            self.driving_stage.to_ne_bytes(),
            self.turn.to_ne_bytes(),
            self.omega.to_ne_bytes(),
            self.hsv_val.to_ne_bytes(),
            self.distance.to_ne_bytes(),
            self.gyro_deg.to_ne_bytes(),
        ];

        let mut out = [0u8; RECORD_SIZE_BYTES];
        for (slot, word) in out.chunks_exact_mut(FIELD_WIDTH_BYTES).zip(words.iter()) {
            slot.copy_from_slice(word);
        }
        out
    }

    /// All fields in record order, widened to i64 (lossless for both u32 and i32).
    pub fn fields(&self) -> [i64; FIELD_COUNT] {
        [
            i64::from(self.count_time),
            i64::from(self.driving_stage),
            i64::from(self.turn),
            i64::from(self.omega),
            i64::from(self.hsv_val),
            i64::from(self.distance),
            i64::from(self.gyro_deg),
        ]
    }
}

impl From<(u32, i32, i32, i32, i32, i32, i32)> for TelemetryRecord {
    fn from(t: (u32, i32, i32, i32, i32, i32, i32)) -> Self {
        Self {
            count_time: t.0,
            driving_stage: t.1,
            turn: t.2,
            omega: t.3,
            hsv_val: t.4,
            distance: t.5,
            gyro_deg: t.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_native_layout() {
        let mut chunk = [0u8; RECORD_SIZE_BYTES];
        chunk[0..4].copy_from_slice(&1016u32.to_ne_bytes());
        chunk[4..8].copy_from_slice(&1i32.to_ne_bytes());
        chunk[8..12].copy_from_slice(&(-1i32).to_ne_bytes());
        chunk[12..16].copy_from_slice(&5i32.to_ne_bytes());
        chunk[16..20].copy_from_slice(&200i32.to_ne_bytes());
        chunk[20..24].copy_from_slice(&3i32.to_ne_bytes());
        chunk[24..28].copy_from_slice(&90i32.to_ne_bytes());

        let record = TelemetryRecord::from_bytes(&chunk);
        assert_eq!(record, TelemetryRecord::from((1016, 1, -1, 5, 200, 3, 90)));
        assert_eq!(record.to_bytes(), chunk);
    }

    #[test]
    fn test_timestamp_uses_full_unsigned_range() {
        let record = TelemetryRecord::from((u32::MAX, i32::MIN, 0, 0, 0, 0, i32::MAX));
        let decoded = TelemetryRecord::from_bytes(&record.to_bytes());
        assert_eq!(decoded.count_time, u32::MAX);
        assert_eq!(decoded.fields()[0], 4_294_967_295);
        assert_eq!(decoded.fields()[1], i64::from(i32::MIN));
    }

    #[test]
    fn test_fields_order() {
        let record = TelemetryRecord::from((10, 1, 2, 3, 4, 5, 6));
        assert_eq!(record.fields(), [10, 1, 2, 3, 4, 5, 6]);
    }
}
