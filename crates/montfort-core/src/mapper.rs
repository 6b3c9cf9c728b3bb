use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TrackError {
    #[error("keyframe track needs at least 2 stops, got {0}")]
    TooFewStops(usize),
    #[error("input and output ranges differ in length ({input} vs {output})")]
    LengthMismatch { input: usize, output: usize },
    #[error("input range must be strictly increasing at index {0}")]
    NotIncreasing(usize),
}

/// Piecewise-linear mapping between an input range and an output range.
///
/// Values outside the input range clamp to the nearest endpoint; there is no
/// extrapolation. Validation happens once at construction so the per-frame
/// [`KeyframeTrack::sample`] path is infallible.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeTrack {
    input: Vec<f32>,
    output: Vec<f32>,
}

impl KeyframeTrack {
    pub fn new(input: Vec<f32>, output: Vec<f32>) -> Result<Self, TrackError> {
        if input.len() < 2 {
            return Err(TrackError::TooFewStops(input.len()));
        }
        if input.len() != output.len() {
            return Err(TrackError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        for i in 1..input.len() {
            if input[i] <= input[i - 1] {
                return Err(TrackError::NotIncreasing(i));
            }
        }
        Ok(Self { input, output })
    }

    /// Two-stop convenience track.
    pub fn pair(input: [f32; 2], output: [f32; 2]) -> Result<Self, TrackError> {
        Self::new(input.to_vec(), output.to_vec())
    }

    pub fn sample(&self, value: f32) -> f32 {
        let first = self.input[0];
        let last = self.input[self.input.len() - 1];
        let v = value.clamp(first, last);
        // Find the segment containing v.
        let mut seg = self.input.len() - 2;
        for i in 0..self.input.len() - 1 {
            if v <= self.input[i + 1] {
                seg = i;
                break;
            }
        }
        let (i0, i1) = (self.input[seg], self.input[seg + 1]);
        let (o0, o1) = (self.output[seg], self.output[seg + 1]);
        let span = i1 - i0;
        if span <= 0.0 {
            return o0;
        }
        let t = (v - i0) / span;
        lerp(o0, o1, t)
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamped two-point mapping, the common case of a full track.
#[inline]
pub fn map_range(value: f32, in0: f32, in1: f32, out0: f32, out1: f32) -> f32 {
    let span = in1 - in0;
    if span <= 0.0 {
        return out0;
    }
    let t = ((value - in0) / span).clamp(0.0, 1.0);
    lerp(out0, out1, t)
}
