// this wrapper type exists simply to give the "no maximum yet" state of
// the cache its own representation, since reserving an actual extreme
// value of P would make that value unusable as a payload

use super::traits::NegativeInfinity;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct MaxCache<P>(Option<P>);

impl<P> NegativeInfinity for MaxCache<P> {
    fn negative_infinity() -> Self {
        MaxCache(None)
    }
}

impl<P: Copy + Ord> MaxCache<P> {
    // the sentinel is below every value, so the first raise always takes
    pub fn raise(&mut self, value: P) {
        match self.0 {
            Some(max) if value <= max => {}
            _ => self.0 = Some(value),
        }
    }

    pub fn matches(&self, value: P) -> bool {
        self.0 == Some(value)
    }

    pub fn get(&self) -> Option<P> {
        self.0
    }
}

impl<P> From<Option<P>> for MaxCache<P> {
    fn from(value: Option<P>) -> Self {
        MaxCache(value)
    }
}
