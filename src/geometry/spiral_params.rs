use crate::error::{CoilError, GeometryError, OperationError, Result};

/// Default stitch length in millimetres when none is given.
pub const DEFAULT_STITCH_LENGTH: f64 = 2.0;

/// Input parameters of an Archimedean coil spiral.
///
/// Dimensions are diameters; the generator works with the derived radii.
/// Stitch length is interpolated linearly between `stitch_min` at the inner
/// diameter and `stitch_max` at the outer diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParameters {
    pub outer_diameter: f64,
    pub inner_diameter: f64,
    pub turns: u32,
    pub stitch_min: f64,
    pub stitch_max: f64,
    pub reverse: bool,
}

impl SpiralParameters {
    /// Creates parameters with the default stitch length and no reversal.
    #[must_use]
    pub fn new(outer_diameter: f64, inner_diameter: f64, turns: u32) -> Self {
        Self {
            outer_diameter,
            inner_diameter,
            turns,
            stitch_min: DEFAULT_STITCH_LENGTH,
            stitch_max: DEFAULT_STITCH_LENGTH,
            reverse: false,
        }
    }

    /// Sets the stitch length range.
    #[must_use]
    pub fn with_stitch(mut self, stitch_min: f64, stitch_max: f64) -> Self {
        self.stitch_min = stitch_min;
        self.stitch_max = stitch_max;
        self
    }

    /// Requests the path to run from the outside inward.
    #[must_use]
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.outer_diameter / 2.0
    }

    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_diameter / 2.0
    }

    /// Radial growth per full revolution of accumulated angle.
    #[must_use]
    pub fn turn_spacing(&self) -> f64 {
        (self.outer_radius() - self.inner_radius()) / f64::from(self.turns)
    }

    /// Returns `true` when the stitch length does not vary with radius.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn has_constant_stitch(&self) -> bool {
        self.stitch_min == self.stitch_max
    }

    /// Checks every precondition of spiral generation.
    ///
    /// Checks run in this order:
    /// 1. all dimensions finite, `outer_diameter > 0`, `inner_diameter >= 0`,
    ///    `outer_diameter > inner_diameter`, `turns >= 1`, `stitch_min > 0`,
    ///    `stitch_max >= stitch_min`;
    /// 2. `inner_diameter == 0` (the spiral would start on its own centre);
    /// 3. `stitch_min <= inner_diameter`.
    ///
    /// Check 3 compares the stitch length with the full inner *diameter*, not
    /// the starting radius. At the first point this equals the chord
    /// precondition `step <= 2r`; it is kept literally for compatibility with
    /// existing coil files.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidParameter` for checks 1 and 3
    /// - `GeometryError::Degenerate` for check 2
    #[allow(clippy::float_cmp)]
    pub fn validate(&self) -> Result<()> {
        let dims = [
            ("outer_diameter", self.outer_diameter),
            ("inner_diameter", self.inner_diameter),
            ("stitch_min", self.stitch_min),
            ("stitch_max", self.stitch_max),
        ];
        if let Some((name, value)) = dims.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite, got {value}")));
        }
        if self.outer_diameter <= 0.0 {
            return Err(invalid(format!(
                "outer diameter must be positive, got {}",
                self.outer_diameter
            )));
        }
        if self.inner_diameter < 0.0 {
            return Err(invalid(format!(
                "inner diameter must not be negative, got {}",
                self.inner_diameter
            )));
        }
        if self.outer_diameter <= self.inner_diameter {
            return Err(invalid(format!(
                "outer diameter {} must exceed inner diameter {}",
                self.outer_diameter, self.inner_diameter
            )));
        }
        if self.turns < 1 {
            return Err(invalid("at least one turn is required".to_owned()));
        }
        if self.stitch_min <= 0.0 {
            return Err(invalid(format!(
                "minimal stitch length must be positive, got {}",
                self.stitch_min
            )));
        }
        if self.stitch_max < self.stitch_min {
            return Err(invalid(format!(
                "maximal stitch length {} is smaller than minimal stitch length {}",
                self.stitch_max, self.stitch_min
            )));
        }

        if self.inner_diameter == 0.0 {
            return Err(GeometryError::Degenerate(
                "inner diameter is zero, the spiral starts at its centre".to_owned(),
            )
            .into());
        }

        if self.stitch_min > self.inner_diameter {
            return Err(invalid(format!(
                "minimal stitch length {} is bigger than inner diameter {}",
                self.stitch_min, self.inner_diameter
            )));
        }

        Ok(())
    }
}

fn invalid(msg: String) -> CoilError {
    OperationError::InvalidParameter(msg).into()
}
