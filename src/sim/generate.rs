//! Procedural platform and item placement

use std::num::NonZeroUsize;

use rand::Rng;

use super::state::{IdAllocator, Item, Platform};
use crate::settings::GameConfig;

/// One generated band of platforms
#[derive(Debug, Clone)]
pub struct Batch {
    pub platforms: Vec<Platform>,
    /// Items left after the spawn platform's item is dropped
    pub items: Vec<Item>,
    lowest: usize,
    highest: usize,
}

impl Batch {
    /// Platform with the largest y (spawn anchor)
    pub fn lowest(&self) -> &Platform {
        &self.platforms[self.lowest]
    }

    /// Platform with the smallest y (recycle trigger)
    pub fn highest(&self) -> &Platform {
        &self.platforms[self.highest]
    }
}

/// Generate `count` platforms scattered over the screen.
///
/// Roughly half the platforms carry an item; the first one always does. The
/// item sitting on the lowest platform is dropped since that platform is
/// where the player stands. Ties on y keep the first platform seen.
pub fn generate_batch<R: Rng>(
    count: NonZeroUsize,
    config: &GameConfig,
    rng: &mut R,
    ids: &mut IdAllocator,
) -> Batch {
    let x_max = config.screen_width - config.platform_width;
    let y_min = config.platform_top_limit;
    let y_max = config.screen_height - config.platform_height;
    let item_roll_max = config.screen_width as u32;

    let mut platforms: Vec<Platform> = Vec::with_capacity(count.get());
    let mut attached: Vec<Option<Item>> = Vec::with_capacity(count.get());
    let mut lowest = 0;
    let mut highest = 0;

    for i in 0..count.get() {
        let x = rng.random_range(0.0..=x_max);
        let y = rng.random_range(y_min..=y_max);
        let platform = Platform::new(ids.next_id(), x, y, config);

        let odd_roll = !rng.random_range(0..=item_roll_max).is_multiple_of(2);
        let item = (i == 0 || odd_roll).then(|| {
            Item::new(
                ids.next_id(),
                x + config.item_x_offset,
                y - config.item_y_offset,
                config.item_size,
            )
        });

        if i > 0 {
            if y > platforms[lowest].rect.top() {
                lowest = i;
            }
            if y < platforms[highest].rect.top() {
                highest = i;
            }
        }

        platforms.push(platform);
        attached.push(item);
    }

    if let Some(dropped) = attached[lowest].take() {
        log::debug!("Dropped item {:?} from spawn platform", dropped.id);
    }
    let items: Vec<Item> = attached.into_iter().flatten().collect();

    log::debug!(
        "Generated {} platforms, {} items (lowest {:?}, highest {:?})",
        platforms.len(),
        items.len(),
        platforms[lowest].id,
        platforms[highest].id
    );

    Batch {
        platforms,
        items,
        lowest,
        highest,
    }
}
