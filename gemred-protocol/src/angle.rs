//! Angle readings and quadrant normalization
//!
//! The gauge reports an absolute magnitude (0-180°) plus the quadrant it sits
//! in. [`normalize`] folds both into a single clockwise 0-359.9° scale where
//! 0.0 is level with the base pointing down.
//!
//! Fault conditions are carried as negative sentinel values so that hosts
//! which only understand a plain `f32` still get a distinct code per fault.

/// Sentinel: no reading has been decoded yet
pub const NOT_INITIALIZED: f32 = -1.0;
/// Sentinel: gauge tipped too far forward or backward
pub const TIPPED_OVER: f32 = -2.0;
/// Sentinel: gauge sent an undefined quadrant code
pub const UNDEFINED_QUADRANT: f32 = -3.0;
/// Sentinel: gauge sent a message with an undefined type
pub const UNDEFINED_MESSAGE: f32 = -4.0;
/// Sentinel: gauge unexpectedly went into calibration mode
pub const CALIBRATION_MODE: f32 = -5.0;
/// Sentinel: gauge stopped talking for longer than the silence timeout
pub const TIMEOUT: f32 = -6.0;

/// Full turn in degrees
const FULL_TURN: f32 = 360.0;

/// Current angle as seen by the host
///
/// Either a valid angle in `[0.0, 360.0)` or exactly one fault code.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngleReading {
    /// Valid angle in degrees
    Degrees(f32),
    NotInitialized,
    TippedOver,
    UndefinedQuadrant,
    UndefinedMessage,
    CalibrationMode,
    Timeout,
}

impl Default for AngleReading {
    fn default() -> Self {
        Self::NotInitialized
    }
}

impl AngleReading {
    /// Raw value as reported by the `f32` accessor
    pub fn as_f32(self) -> f32 {
        match self {
            Self::Degrees(deg) => deg,
            Self::NotInitialized => NOT_INITIALIZED,
            Self::TippedOver => TIPPED_OVER,
            Self::UndefinedQuadrant => UNDEFINED_QUADRANT,
            Self::UndefinedMessage => UNDEFINED_MESSAGE,
            Self::CalibrationMode => CALIBRATION_MODE,
            Self::Timeout => TIMEOUT,
        }
    }

    /// Interpret a raw accessor value
    ///
    /// Returns `None` for values that are neither a valid angle nor one of
    /// the sentinel codes.
    pub fn from_f32(value: f32) -> Option<Self> {
        if (0.0..FULL_TURN).contains(&value) {
            return Some(Self::Degrees(value));
        }
        let sentinel = match value {
            v if v == NOT_INITIALIZED => Self::NotInitialized,
            v if v == TIPPED_OVER => Self::TippedOver,
            v if v == UNDEFINED_QUADRANT => Self::UndefinedQuadrant,
            v if v == UNDEFINED_MESSAGE => Self::UndefinedMessage,
            v if v == CALIBRATION_MODE => Self::CalibrationMode,
            v if v == TIMEOUT => Self::Timeout,
            _ => return None,
        };
        Some(sentinel)
    }

    /// Check if this is a usable angle rather than a fault code
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Degrees(_))
    }

    /// Angle in degrees, if valid
    pub fn degrees(&self) -> Option<f32> {
        match self {
            Self::Degrees(deg) => Some(*deg),
            _ => None,
        }
    }

    /// Human-readable description of a fault code
    pub fn description(&self) -> &'static str {
        match self {
            Self::Degrees(_) => "Angle",
            Self::NotInitialized => "Not init",
            Self::TippedOver => "Tipped over",
            Self::UndefinedQuadrant => "Internal error -- Undefined quadrant reported",
            Self::UndefinedMessage => "Internal error -- Undefined message type sent",
            Self::CalibrationMode => "Unexpectedly entered calibration mode",
            Self::Timeout => "Device timeout.",
        }
    }
}

/// Rotational quadrant reported in the angle message flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quadrant {
    /// `-`: on its face or back, outside the usable range
    Tipped,
    /// `1`: right side up to on its left side
    First,
    /// `2`: on its left side to upside down
    Second,
    /// `3`: upside down to on its right side
    Third,
    /// `4`: on its right side to right side up
    Fourth,
}

impl Quadrant {
    /// Decode the quadrant flag character
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '-' => Some(Self::Tipped),
            '1' => Some(Self::First),
            '2' => Some(Self::Second),
            '3' => Some(Self::Third),
            '4' => Some(Self::Fourth),
            _ => None,
        }
    }

    /// Map an absolute magnitude in this quadrant onto the 0-360° scale
    pub fn apply(self, magnitude: f32) -> AngleReading {
        let degrees = match self {
            Self::Tipped => return AngleReading::TippedOver,
            Self::First => FULL_TURN - magnitude,
            Self::Second => 180.0 + magnitude,
            Self::Third => 180.0 - magnitude,
            Self::Fourth => magnitude,
        };
        AngleReading::Degrees(wrap_degrees(degrees))
    }
}

/// Normalize a quadrant code and magnitude into a reading
///
/// An unknown quadrant code yields [`AngleReading::UndefinedQuadrant`];
/// the magnitude is ignored for `-` and unknown codes.
pub fn normalize(code: Option<char>, magnitude: f32) -> AngleReading {
    match code.and_then(Quadrant::from_code) {
        Some(quadrant) => quadrant.apply(magnitude),
        None => AngleReading::UndefinedQuadrant,
    }
}

/// Fold any finite angle into `[0, 360)`
fn wrap_degrees(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees % FULL_TURN;
    if wrapped < 0.0 {
        // -0.0001 % 360 + 360 rounds to 360.0 in f32
        let shifted = wrapped + FULL_TURN;
        if shifted >= FULL_TURN {
            0.0
        } else {
            shifted
        }
    } else {
        // Drop the sign of -0.0
        wrapped + 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_quadrant_formulas() {
        assert_eq!(normalize(Some('1'), 90.0), AngleReading::Degrees(270.0));
        assert_eq!(normalize(Some('2'), 45.0), AngleReading::Degrees(225.0));
        assert_eq!(normalize(Some('3'), 30.0), AngleReading::Degrees(150.0));
        assert_eq!(normalize(Some('4'), 10.0), AngleReading::Degrees(10.0));
        assert_eq!(normalize(Some('1'), 45.0), AngleReading::Degrees(315.0));
    }

    #[test]
    fn test_tipped_ignores_magnitude() {
        assert_eq!(normalize(Some('-'), 12.3), AngleReading::TippedOver);
        assert_eq!(normalize(Some('-'), 0.0), AngleReading::TippedOver);
    }

    #[test]
    fn test_undefined_quadrant() {
        assert_eq!(normalize(Some('5'), 10.0), AngleReading::UndefinedQuadrant);
        assert_eq!(normalize(Some('0'), 10.0), AngleReading::UndefinedQuadrant);
        assert_eq!(normalize(None, 10.0), AngleReading::UndefinedQuadrant);
    }

    #[test]
    fn test_full_turn_wraps_to_zero() {
        // Level in quadrant 1 would otherwise read 360.0
        assert_eq!(normalize(Some('1'), 0.0), AngleReading::Degrees(0.0));
        assert_eq!(normalize(Some('2'), 180.0), AngleReading::Degrees(0.0));
    }

    #[test]
    fn test_sentinel_values() {
        assert_eq!(AngleReading::NotInitialized.as_f32(), -1.0);
        assert_eq!(AngleReading::TippedOver.as_f32(), -2.0);
        assert_eq!(AngleReading::UndefinedQuadrant.as_f32(), -3.0);
        assert_eq!(AngleReading::UndefinedMessage.as_f32(), -4.0);
        assert_eq!(AngleReading::CalibrationMode.as_f32(), -5.0);
        assert_eq!(AngleReading::Timeout.as_f32(), -6.0);
        assert_eq!(AngleReading::default(), AngleReading::NotInitialized);
    }

    #[test]
    fn test_from_f32() {
        assert_eq!(AngleReading::from_f32(-6.0), Some(AngleReading::Timeout));
        assert_eq!(
            AngleReading::from_f32(123.4),
            Some(AngleReading::Degrees(123.4))
        );
        assert_eq!(AngleReading::from_f32(-7.0), None);
        assert_eq!(AngleReading::from_f32(360.0), None);
        assert_eq!(AngleReading::from_f32(f32::NAN), None);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(AngleReading::TippedOver.description(), "Tipped over");
        assert_eq!(AngleReading::Timeout.description(), "Device timeout.");
        assert!(!AngleReading::Timeout.is_valid());
        assert_eq!(AngleReading::Degrees(12.5).degrees(), Some(12.5));
    }

    proptest! {
        #[test]
        fn prop_normalized_angle_in_range(
            code in prop::sample::select(vec!['1', '2', '3', '4']),
            magnitude in 0.0f32..=180.0,
        ) {
            let reading = normalize(Some(code), magnitude);
            let deg = reading.degrees().unwrap();
            prop_assert!((0.0..360.0).contains(&deg));
        }

        #[test]
        fn prop_any_magnitude_stays_in_range(
            code in prop::sample::select(vec!['1', '2', '3', '4']),
            magnitude in -1.0e6f32..1.0e6,
        ) {
            let deg = normalize(Some(code), magnitude).degrees().unwrap();
            prop_assert!((0.0..360.0).contains(&deg));
        }

        #[test]
        fn prop_as_f32_roundtrips(magnitude in 0.0f32..180.0) {
            let reading = normalize(Some('4'), magnitude);
            prop_assert_eq!(AngleReading::from_f32(reading.as_f32()), Some(reading));
        }
    }
}
