use std::fmt;

use ndarray::Array2;

/// A single spectral band.
/// Samples are widened to f32 regardless of the on-disk sample type.
#[derive(Clone, Debug)]
pub struct Band {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
}

impl Band {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// (height, width)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Mean, minimum and maximum over the finite samples.
    pub fn stats(&self) -> BandStats {
        let mut sum = 0.0f64;
        let mut count = 0usize;
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;

        for &v in self.data.iter().filter(|v| v.is_finite()) {
            sum += v as f64;
            count += 1;
            min = min.min(v);
            max = max.max(v);
        }

        if count == 0 {
            return BandStats::default();
        }

        BandStats {
            mean: sum / count as f64,
            min,
            max,
            valid_pixels: count,
        }
    }
}

/// Summary statistics of one band.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BandStats {
    pub mean: f64,
    pub min: f32,
    pub max: f32,
    pub valid_pixels: usize,
}

/// Composite channel slot. The n-th opened file fills slot n.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Nir,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Self::Red, Self::Green, Self::Blue, Self::Nir];

    pub fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
            Self::Nir => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "Red"),
            Self::Green => write!(f, "Green"),
            Self::Blue => write!(f, "Blue"),
            Self::Nir => write!(f, "NIR"),
        }
    }
}

/// All four composite channels, borrowed from a session.
#[derive(Clone, Copy, Debug)]
pub struct ChannelSet<'a> {
    pub red: &'a Band,
    pub green: &'a Band,
    pub blue: &'a Band,
    pub nir: &'a Band,
}

impl<'a> ChannelSet<'a> {
    /// Look up a composite channel by its 0-based slot index.
    pub fn get(&self, index: usize) -> Option<&'a Band> {
        match Channel::from_index(index)? {
            Channel::Red => Some(self.red),
            Channel::Green => Some(self.green),
            Channel::Blue => Some(self.blue),
            Channel::Nir => Some(self.nir),
        }
    }
}
