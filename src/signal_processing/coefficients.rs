use crate::constants::SYMMETRY_EPSILON;
use crate::error::{FilterError, Result};

/// 63-tap band-pass design centred around 5 kHz for 44.1 kHz sampling.
///
/// Symmetric, so the filter has linear phase with a group delay of 31 samples.
pub const BANDPASS_5KHZ_44100: [f64; 63] = [
    0.0730925, 0.100557, -0.1322851, 0.0954512, 0.0754908, 0.0915603, 0.0366887, -0.0113547,
    -0.051204, -0.0602071, -0.0419634, -0.0059188, 0.0298679, 0.0497159, 0.0453203, 0.0197406,
    -0.0152828, -0.0427857, -0.0494711, -0.0323446, 0.0008235, 0.034008, 0.0511223, 0.0433663,
    0.0142687, -0.0223644, -0.0484856, -0.0508951, -0.0287151, 0.007856, 0.0407296, 0.0536207,
    0.0407296, 0.007856, -0.0287151, -0.0508951, -0.0484856, -0.0223644, 0.0142687, 0.0433663,
    0.0511223, 0.034008, 0.0008235, -0.0323446, -0.0494711, -0.0427857, -0.0152828, 0.0197406,
    0.0453203, 0.0497159, 0.0298679, -0.0059188, -0.0419634, -0.0602071, -0.051204, -0.0113547,
    0.0366887, 0.0915603, 0.0754908, 0.0954512, -0.1322851, 0.100557, 0.0730925,
];

/// Immutable FIR tap set
///
/// The length of the tap set is the filter length used to size the history
/// buffer. Content is not constrained beyond being finite: symmetric taps give
/// linear phase, but any taps are convolved as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    taps: Vec<f64>,
}

impl Coefficients {
    /// Create a tap set
    ///
    /// # Errors
    /// Returns `FilterError::InvalidCoefficients` if `taps` is empty or
    /// contains a non-finite value.
    pub fn new(taps: Vec<f64>) -> Result<Self> {
        if taps.is_empty() {
            return Err(FilterError::InvalidCoefficients(
                "at least one tap is required".to_string(),
            ));
        }
        if let Some(pos) = taps.iter().position(|t| !t.is_finite()) {
            return Err(FilterError::InvalidCoefficients(format!(
                "tap {} is not finite: {}",
                pos, taps[pos]
            )));
        }
        Ok(Self { taps })
    }

    /// The built-in 5 kHz band-pass design for 44.1 kHz audio
    pub fn bandpass_5khz() -> Self {
        Self {
            taps: BANDPASS_5KHZ_44100.to_vec(),
        }
    }

    /// Number of taps (filter length)
    pub fn len(&self) -> usize {
        self.taps.len()
    }

    /// Always false; a tap set has at least one tap
    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    /// Whether tap `i` equals tap `len - 1 - i` for every `i`
    pub fn is_symmetric(&self) -> bool {
        self.taps
            .iter()
            .zip(self.taps.iter().rev())
            .all(|(a, b)| (a - b).abs() <= SYMMETRY_EPSILON)
    }

    /// Group delay in samples (half the filter length for linear phase)
    pub fn group_delay_samples(&self) -> usize {
        (self.taps.len() - 1) / 2
    }

    /// Gain at 0 Hz, the sum of all taps
    pub fn dc_gain(&self) -> f64 {
        self.taps.iter().sum()
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::bandpass_5khz()
    }
}
