use serde::{Deserialize, Serialize};

use crate::error::{SkipError, SkipResult};

/// Read-only facts about the axis surface ticks are laid out on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AxisGeometryFields")]
pub struct AxisGeometry {
    length: f64,
    max_length: f64,
    tick_size: f64,
    offset: bool,
}

#[derive(Debug, Deserialize)]
struct AxisGeometryFields {
    length: f64,
    max_length: f64,
    tick_size: f64,
    #[serde(default)]
    offset: bool,
}

impl TryFrom<AxisGeometryFields> for AxisGeometry {
    type Error = SkipError;

    fn try_from(fields: AxisGeometryFields) -> SkipResult<Self> {
        Ok(Self::new(fields.length, fields.max_length, fields.tick_size)?.with_offset(fields.offset))
    }
}

impl AxisGeometry {
    /// Builds geometry for an axis `length` pixels long inside a chart that
    /// allows at most `max_length` pixels, where one tick label occupies
    /// `tick_size` pixels along the axis.
    pub fn new(length: f64, max_length: f64, tick_size: f64) -> SkipResult<Self> {
        let lengths_valid = length.is_finite()
            && length >= 0.0
            && max_length.is_finite()
            && max_length >= 0.0;
        if !lengths_valid || !tick_size.is_finite() || tick_size <= 0.0 {
            return Err(SkipError::InvalidGeometry {
                length,
                max_length,
                tick_size,
            });
        }

        Ok(Self {
            length,
            max_length,
            tick_size,
            offset: false,
        })
    }

    /// Builds geometry whose tick size comes from the measured label extent.
    pub fn from_footprint(
        length: f64,
        max_length: f64,
        footprint: LabelFootprint,
    ) -> SkipResult<Self> {
        Self::new(length, max_length, footprint.tick_size()?)
    }

    /// Offset axes center ticks between grid lines, which costs one slot.
    #[must_use]
    pub fn with_offset(mut self, offset: bool) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn max_length(self) -> f64 {
        self.max_length
    }

    #[must_use]
    pub fn tick_size(self) -> f64 {
        self.tick_size
    }

    #[must_use]
    pub fn offset(self) -> bool {
        self.offset
    }

    /// Maximum number of ticks that fit without overlapping labels.
    #[must_use]
    pub fn capacity(self) -> usize {
        let slots = if self.offset { 0.0 } else { 1.0 };
        let by_axis = self.length / self.tick_size + slots;
        let by_chart = self.max_length / self.tick_size;
        // Float-to-int casts saturate, so huge ratios clamp to usize::MAX.
        by_axis.min(by_chart).floor() as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Measured extent of the largest tick label, used to estimate how much
/// room each tick needs along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelFootprint {
    pub widest_width: f64,
    pub highest_height: f64,
    pub rotation_degrees: f64,
    /// Extra room kept between neighbouring labels.
    pub padding: f64,
    pub orientation: AxisOrientation,
}

impl Default for LabelFootprint {
    fn default() -> Self {
        Self {
            widest_width: 0.0,
            highest_height: 0.0,
            rotation_degrees: 0.0,
            padding: 0.0,
            orientation: AxisOrientation::Horizontal,
        }
    }
}

impl LabelFootprint {
    #[must_use]
    pub fn new(widest_width: f64, highest_height: f64, orientation: AxisOrientation) -> Self {
        Self {
            widest_width,
            highest_height,
            orientation,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rotation_degrees(mut self, rotation_degrees: f64) -> Self {
        self.rotation_degrees = rotation_degrees;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Pixels one rotated label occupies along the axis direction.
    pub fn tick_size(self) -> SkipResult<f64> {
        let extents = [self.widest_width, self.highest_height, self.padding];
        if extents.iter().any(|value| !value.is_finite() || *value < 0.0) {
            return Err(SkipError::InvalidOptions(
                "label extent and padding must be finite and >= 0".to_owned(),
            ));
        }
        if !self.rotation_degrees.is_finite() {
            return Err(SkipError::InvalidOptions(
                "label rotation must be finite".to_owned(),
            ));
        }

        let rotation = self.rotation_degrees.to_radians();
        let cos = rotation.cos().abs();
        let sin = rotation.sin().abs();
        let width = self.widest_width + self.padding;
        let height = self.highest_height + self.padding;

        let size = match self.orientation {
            AxisOrientation::Horizontal => {
                if height * cos > width * sin {
                    width / cos
                } else {
                    height / sin
                }
            }
            AxisOrientation::Vertical => {
                if height * sin < width * cos {
                    height / cos
                } else {
                    width / sin
                }
            }
        };

        if !size.is_finite() || size <= 0.0 {
            return Err(SkipError::InvalidOptions(format!(
                "label footprint yields no usable tick size: {size}"
            )));
        }
        Ok(size)
    }
}
