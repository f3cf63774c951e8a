use std::thread;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::generator::circle::CircleGenerator;
use crate::generator::figure::FigureGenerator;
use crate::generator::square::SquareGenerator;
use crate::generator::triangle::TriangleGenerator;
use crate::shape::ShapeSample;

/// Sizes and noise level of the generated sets.
///
/// `train_count` and `validation_count` are per generator, so with the three
/// standard generators the training set holds `3 × train_count` samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub image_side: usize,
    pub train_count: usize,
    pub validation_count: usize,
    pub noise: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl DatasetConfig {
    pub fn validate(&self) -> Result<()> {
        if self.image_side == 0 {
            return Err(Error::InvalidConfig("image_side must be > 0".to_owned()));
        }
        if !(0.0..=1.0).contains(&self.noise) {
            return Err(Error::InvalidConfig(format!(
                "noise must be a probability in [0, 1], got {}",
                self.noise
            )));
        }
        Ok(())
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        DatasetConfig {
            image_side: 7,
            train_count: 1000,
            validation_count: 500,
            noise: 0.05,
            seed: None,
        }
    }
}

/// Which set is being generated; each draws from its own seed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Validation,
}

impl Split {
    fn stream(self) -> u64 {
        match self {
            Split::Train => 0,
            Split::Validation => 1,
        }
    }
}

/// Runs a set of figure generators in parallel and merges their output into
/// one shuffled collection.
pub struct DatasetGenerator {
    config: DatasetConfig,
    generators: Vec<Box<dyn FigureGenerator>>,
}

impl DatasetGenerator {
    pub fn new(config: DatasetConfig, generators: Vec<Box<dyn FigureGenerator>>) -> Result<DatasetGenerator> {
        config.validate()?;
        Ok(DatasetGenerator { config, generators })
    }

    /// Circle, square and triangle generators.
    pub fn standard(config: DatasetConfig) -> Result<DatasetGenerator> {
        DatasetGenerator::new(
            config,
            vec![
                Box::new(CircleGenerator),
                Box::new(SquareGenerator),
                Box::new(TriangleGenerator),
            ],
        )
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    pub fn train_set(&self) -> Vec<ShapeSample> {
        self.generate(Split::Train, self.config.train_count)
    }

    pub fn validation_set(&self) -> Vec<ShapeSample> {
        self.generate(Split::Validation, self.config.validation_count)
    }

    /// Generates `count` samples per generator, one scoped thread each, then
    /// concatenates them in generator order and shuffles once.
    pub fn generate(&self, split: Split, count: usize) -> Vec<ShapeSample> {
        let side = self.config.image_side;
        let noise = self.config.noise;

        let batches: Vec<Vec<ShapeSample>> = thread::scope(|scope| {
            let handles: Vec<_> = self
                .generators
                .iter()
                .enumerate()
                .map(|(index, generator)| {
                    let mut rng = self.rng(split, index as u64);
                    scope.spawn(move || generator.generate(side, count, noise, &mut rng))
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect()
        });

        let mut samples: Vec<ShapeSample> = batches.into_iter().flatten().collect();
        samples.shuffle(&mut self.rng(split, self.generators.len() as u64));

        info!(
            split = ?split,
            generators = self.generators.len(),
            per_generator = count,
            total = samples.len(),
            side,
            "generated dataset"
        );

        samples
    }

    fn rng(&self, split: Split, index: u64) -> StdRng {
        match self.config.seed {
            Some(seed) => {
                let base = seed.wrapping_add(split.stream().wrapping_mul(0x9E37_79B9_7F4A_7C15));
                StdRng::seed_from_u64(base.wrapping_add(index))
            }
            None => StdRng::from_entropy(),
        }
    }
}
