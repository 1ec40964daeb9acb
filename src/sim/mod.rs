//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed-order tick per frame
//! - Seeded RNG only
//! - Stable iteration order (generation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod generate;
pub mod motion;
pub mod recycle;
pub mod rect;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{Collisions, resolve};
pub use generate::{Batch, generate_batch};
pub use motion::{integrate, wrap_horizontal};
pub use recycle::{RecycleOutcome, needs_recycle, recycle};
pub use rect::Rect;
pub use score::ScoreState;
pub use state::{EntityId, GameState, IdAllocator, Item, Platform, Player, SimError};
pub use tick::{GameEvent, TickInput, tick};
