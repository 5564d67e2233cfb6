use std::sync::LazyLock;

use rand::{rngs::SmallRng, RngCore, SeedableRng};

use super::{GeneratesHeight, HEIGHT, P};

/// A draw below `THRESHOLDS[i]` lets a node climb onto level `i`.
///
/// Each entry is half of the previous one, so every extra level is half as likely as the last.
static THRESHOLDS: LazyLock<[u32; HEIGHT]> = LazyLock::new(|| {
    let mut table = [0u32; HEIGHT];
    table[0] = u32::MAX;

    for i in 1..HEIGHT {
        table[i] = (table[i - 1] as f64 * P).round() as u32;
    }

    table
});

fn thresholds() -> &'static [u32; HEIGHT] {
    &THRESHOLDS
}

/// Turns a single random `u32` into a geometrically distributed height in `1..HEIGHT`.
pub(crate) struct HeightSampler<R = SmallRng> {
    rng: R,
}

impl HeightSampler<SmallRng> {
    pub(crate) fn from_entropy() -> Self {
        HeightSampler::new(SmallRng::from_entropy())
    }
}

impl<R> HeightSampler<R> {
    pub(crate) fn new(rng: R) -> Self {
        HeightSampler { rng }
    }
}

impl<R: RngCore> GeneratesHeight for HeightSampler<R> {
    fn gen_height(&mut self) -> usize {
        let draw = self.rng.next_u32();
        let thresholds = thresholds();

        let mut height = 1;
        while height < HEIGHT - 1 && draw < thresholds[height] {
            height += 1;
        }

        height
    }
}
