//! Profile-tiered values.

use serde::{Deserialize, Serialize};

/// A value with one setting for full-capability devices and one for reduced
/// devices. Which capability flag selects `reduced` is documented on each
/// field that uses it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tiered<T> {
    pub full: T,
    pub reduced: T,
}

impl<T: Copy> Tiered<T> {
    pub const fn new(full: T, reduced: T) -> Self {
        Self { full, reduced }
    }

    /// Pick the reduced value when `reduced` is true.
    pub fn select(&self, reduced: bool) -> T {
        if reduced {
            self.reduced
        } else {
            self.full
        }
    }
}
