use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::shape::ShapeLabel;

/// Architecture of the two-layer network.
///
/// Fields:
/// - `image_side`: side `N` of the square input grid; the input layer has `N²` units
/// - `hidden_size`: width of the single hidden layer
/// - `output_size`: number of output units, one per `ShapeLabel`
/// - `seed`: seed for weight initialization; `None` draws from OS entropy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub image_side: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkConfig {
    pub fn new(image_side: usize, hidden_size: usize) -> NetworkConfig {
        NetworkConfig {
            image_side,
            hidden_size,
            output_size: ShapeLabel::COUNT,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> NetworkConfig {
        self.seed = Some(seed);
        self
    }

    pub fn input_size(&self) -> usize {
        self.image_side * self.image_side
    }

    pub fn validate(&self) -> Result<()> {
        if self.image_side == 0 {
            return Err(Error::InvalidConfig("image_side must be > 0".to_owned()));
        }
        if self.hidden_size == 0 {
            return Err(Error::InvalidConfig("hidden_size must be > 0".to_owned()));
        }
        if self.output_size != ShapeLabel::COUNT {
            return Err(Error::InvalidConfig(format!(
                "output_size must equal the number of shape labels ({}), got {}",
                ShapeLabel::COUNT,
                self.output_size
            )));
        }
        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        NetworkConfig::new(7, 20)
    }
}
