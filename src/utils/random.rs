use crate::{Cell, Generation, LifeError, Result};
use rand::{Rng, SeedableRng};

impl Generation {
    /// Create a field with random cells in `0..rows x 0..columns`
    ///
    /// `fill_rate` - probability of a cell to be alive, within `[0, 1]`
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(rows: u16, columns: u16, fill_rate: f64, seed: Option<u64>) -> Result<Self> {
        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(LifeError::FillRate(fill_rate));
        }
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let mut result = Generation::new();
        for row in 0..rows {
            for column in 0..columns {
                if rng.gen_bool(fill_rate) {
                    result.set_alive(Cell::new(row.into(), column.into()), true);
                }
            }
        }
        log::debug!(
            "random soup {}x{}: {} live cells",
            rows,
            columns,
            result.count()
        );
        Ok(result)
    }
}
