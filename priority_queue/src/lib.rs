mod impls;
mod max_cache;
mod priority;
mod slots;
mod traits;

use max_cache::MaxCache;
pub use priority::Priority;
use serde::{Deserialize, Serialize};
use slots::Slots;
pub use traits::NegativeInfinity;

/// Min-heap over a growable buffer that additionally keeps the current
/// maximum cached, so both ends of the ordering are observable in O(1).
#[derive(Serialize, Deserialize)]
pub struct PriorityQueue<P: Priority> {
    slots: Slots<P>,
    max: MaxCache<P>,
}
