use std::{
    fmt::Debug,
    ops::{Add, Sub},
};

use num::Zero;

/// An integer flow quantity. Capacities, pushed flow and residual capacities
/// are all values of a `Flow` type.
pub trait Flow: Copy + Ord + Add<Output = Self> + Sub<Output = Self> + Zero + Debug {}

impl<T> Flow for T where T: Copy + Ord + Add<Output = T> + Sub<Output = T> + Zero + Debug {}
