use std::fmt;

/// Length of the hue wheel used by channel formulas.
///
/// Channel hues are expressed on a 0..256 cycle rather than degrees and are
/// passed to `hsl()` unchanged.
pub const HUE_CYCLE: f64 = 256.0;

/// An HSL triple with saturation and luminance in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub luminance: f64,
}

impl Hsl {
    /// Create a triple, wrapping the hue into `[0, HUE_CYCLE)`
    pub fn new(hue: f64, saturation: f64, luminance: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation,
            luminance,
        }
    }
}

/// Wrap a hue into `[0, HUE_CYCLE)`. Non-finite input maps to 0.
pub fn wrap_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(HUE_CYCLE);
    // rem_euclid rounds tiny negative inputs up to the modulus itself
    if wrapped >= HUE_CYCLE { 0.0 } else { wrapped }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            Component(self.hue),
            Component(self.saturation),
            Component(self.luminance)
        )
    }
}

/// Shortest round-trip rendering with `-0` and non-finite values printed as `0`.
struct Component(f64);

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() || self.0 == 0.0 {
            return f.write_str("0");
        }
        write!(f, "{}", self.0)
    }
}
