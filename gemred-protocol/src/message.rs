//! Message classification and decoding
//!
//! A completed line is split into `;`-terminated positional fields. Field 0
//! selects the message type; angle messages carry the quadrant flags in
//! field 1 and the absolute magnitude in field 2.

use crate::angle::{normalize, AngleReading};

/// Field delimiter
pub const FIELD_DELIMITER: char = ';';

/// Type field of the stop message
pub const MSG_STOP: &str = "*9";
/// Type field of the angle reading message
pub const MSG_ANGLE: &str = "*25";
/// Type field of the calibrate message
pub const MSG_CALIBRATE: &str = "*30";

/// Field holding the flags of an angle message
pub const FLAGS_FIELD: usize = 1;
/// Field holding the absolute angle of an angle message
pub const MAGNITUDE_FIELD: usize = 2;
/// Position of the rotational quadrant within the flags field
pub const QUADRANT_FLAG: usize = 4;

/// Magnitude sent while the gauge is still warming up
pub const WARMUP_PLACEHOLDER: &str = "----";

/// Message type, determined by field 0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageType {
    Unknown,
    Stop,
    Angle,
    Calibrate,
}

impl MessageType {
    /// Classify a type field
    pub fn from_field(type_field: &str) -> Self {
        match type_field {
            MSG_ANGLE => Self::Angle,
            MSG_STOP => Self::Stop,
            MSG_CALIBRATE => Self::Calibrate,
            _ => Self::Unknown,
        }
    }

    /// Classify a complete line
    pub fn classify(line: &str) -> Self {
        Self::from_field(field(line, 0))
    }
}

/// Return the `n`th `;`-terminated field (zero-based)
///
/// A field with no terminating `;` is treated as absent and yields `""`.
pub fn field(line: &str, n: usize) -> &str {
    let mut rest = line;
    for _ in 0..n {
        match rest.find(FIELD_DELIMITER) {
            Some(end) => rest = &rest[end + 1..],
            None => return "",
        }
    }
    match rest.find(FIELD_DELIMITER) {
        Some(end) => &rest[..end],
        None => "",
    }
}

/// A decoded message borrowing from its line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    Unknown,
    Stop,
    Calibrate,
    Angle {
        /// Flags field; the quadrant code sits at [`QUADRANT_FLAG`]
        flags: &'a str,
        /// Absolute magnitude field, a decimal or [`WARMUP_PLACEHOLDER`]
        magnitude: &'a str,
    },
}

impl<'a> Message<'a> {
    /// Parse a complete line
    pub fn parse(line: &'a str) -> Self {
        match MessageType::classify(line) {
            MessageType::Unknown => Self::Unknown,
            MessageType::Stop => Self::Stop,
            MessageType::Calibrate => Self::Calibrate,
            MessageType::Angle => Self::Angle {
                flags: field(line, FLAGS_FIELD),
                magnitude: field(line, MAGNITUDE_FIELD),
            },
        }
    }

    /// Quadrant code of an angle message
    pub fn quadrant_code(&self) -> Option<char> {
        match self {
            Self::Angle { flags, .. } => flags.chars().nth(QUADRANT_FLAG),
            _ => None,
        }
    }

    /// Check if this is a warm-up angle message
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Angle { magnitude, .. } if *magnitude == WARMUP_PLACEHOLDER)
    }
}

/// Outcome of decoding one complete line
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decoded {
    /// New value for the current angle, from a non-angle message
    Reading(AngleReading),
    /// Genuine angle measurement; opens the first-measurement gate
    Measurement(AngleReading),
    /// Warm-up angle message received before any genuine measurement
    Placeholder,
    /// The gauge is powering itself down and must be restarted
    Stop,
}

/// Decode a complete line
///
/// `measured` tells whether a genuine measurement has already been seen;
/// warm-up placeholders are only discarded before that.
pub fn decode(line: &str, measured: bool) -> Decoded {
    let message = Message::parse(line);
    match message {
        Message::Unknown => Decoded::Reading(AngleReading::UndefinedMessage),
        Message::Calibrate => Decoded::Reading(AngleReading::CalibrationMode),
        Message::Stop => Decoded::Stop,
        Message::Angle { magnitude, .. } => {
            if !measured && message.is_placeholder() {
                return Decoded::Placeholder;
            }
            Decoded::Measurement(normalize(
                message.quadrant_code(),
                parse_magnitude(magnitude),
            ))
        }
    }
}

/// Parse an absolute magnitude field
///
/// Leading whitespace is skipped and the longest `[+-]digits[.digits]`
/// prefix is parsed; a field without digits reads as 0.0.
pub fn parse_magnitude(text: &str) -> f32 {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }
    text[..end].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_field_extraction() {
        let line = "*25;00004;12.5;x0d";
        assert_eq!(field(line, 0), "*25");
        assert_eq!(field(line, 1), "00004");
        assert_eq!(field(line, 2), "12.5");
        // Trailing text without a delimiter is not a field
        assert_eq!(field(line, 3), "");
        assert_eq!(field(line, 9), "");
    }

    #[test]
    fn test_field_without_delimiter() {
        assert_eq!(field("*25", 0), "");
        assert_eq!(field("", 0), "");
        assert_eq!(field(";;", 1), "");
    }

    #[test]
    fn test_classification() {
        assert_eq!(MessageType::classify("*25;00001;4.0;x0d"), MessageType::Angle);
        assert_eq!(MessageType::classify("*9;x0d"), MessageType::Stop);
        assert_eq!(MessageType::classify("*30;x0d"), MessageType::Calibrate);
        assert_eq!(MessageType::classify("*12;x0d"), MessageType::Unknown);
        assert_eq!(MessageType::classify("*25x0d"), MessageType::Unknown);
        assert_eq!(MessageType::classify("x0d"), MessageType::Unknown);
    }

    #[test]
    fn test_parse_angle_message() {
        let msg = Message::parse("*25;00002;45.0;x0d");
        assert_eq!(
            msg,
            Message::Angle {
                flags: "00002",
                magnitude: "45.0"
            }
        );
        assert_eq!(msg.quadrant_code(), Some('2'));
        assert!(!msg.is_placeholder());
    }

    #[test]
    fn test_short_flags_have_no_quadrant() {
        let msg = Message::parse("*25;000;45.0;x0d");
        assert_eq!(msg.quadrant_code(), None);
        assert_eq!(
            decode("*25;000;45.0;x0d", true),
            Decoded::Measurement(AngleReading::UndefinedQuadrant)
        );
    }

    #[test]
    fn test_decode_angles() {
        assert_eq!(
            decode("*25;00001;45.0;x0d", false),
            Decoded::Measurement(AngleReading::Degrees(315.0))
        );
        assert_eq!(
            decode("*25;00003;30.0;x0d", true),
            Decoded::Measurement(AngleReading::Degrees(150.0))
        );
        assert_eq!(
            decode("*25;0000-;88.8;x0d", true),
            Decoded::Measurement(AngleReading::TippedOver)
        );
    }

    #[test]
    fn test_decode_placeholder() {
        assert_eq!(decode("*25;0000-;----;x0d", false), Decoded::Placeholder);
        // After the first measurement the placeholder is read as 0.0
        assert_eq!(
            decode("*25;00004;----;x0d", true),
            Decoded::Measurement(AngleReading::Degrees(0.0))
        );
    }

    #[test]
    fn test_decode_other_types() {
        assert_eq!(decode("*9;x0d", true), Decoded::Stop);
        assert_eq!(
            decode("*30;x0d", true),
            Decoded::Reading(AngleReading::CalibrationMode)
        );
        assert_eq!(
            decode("garbage;x0d", false),
            Decoded::Reading(AngleReading::UndefinedMessage)
        );
    }

    #[test]
    fn test_parse_magnitude() {
        assert_eq!(parse_magnitude("45.0"), 45.0);
        assert_eq!(parse_magnitude("  7.5"), 7.5);
        assert_eq!(parse_magnitude("12"), 12.0);
        assert_eq!(parse_magnitude("3.25deg"), 3.25);
        assert_eq!(parse_magnitude("-4.5"), -4.5);
        assert_eq!(parse_magnitude("9."), 9.0);
        assert_eq!(parse_magnitude(".5"), 0.5);
        assert_eq!(parse_magnitude("----"), 0.0);
        assert_eq!(parse_magnitude(""), 0.0);
        assert_eq!(parse_magnitude("abc"), 0.0);
    }

    proptest! {
        #[test]
        fn prop_unknown_type_fields(type_field in "[^;]{0,8}") {
            prop_assume!(![MSG_ANGLE, MSG_STOP, MSG_CALIBRATE].contains(&type_field.as_str()));
            let line = format!("{};00001;10.0;x0d", type_field);
            prop_assert_eq!(
                decode(&line, true),
                Decoded::Reading(AngleReading::UndefinedMessage)
            );
        }

        #[test]
        fn prop_magnitude_matches_formatted_value(tenths in 0u32..1800) {
            let text = format!("{}.{}", tenths / 10, tenths % 10);
            let expected: f32 = text.parse().unwrap();
            prop_assert_eq!(parse_magnitude(&text), expected);
        }
    }
}
