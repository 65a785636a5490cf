use core::fmt::{Debug, Display};
use core::iter::Sum;

use num_traits::{CheckedAdd, CheckedSub};

/// A trait representing an edge weight which is typically an integer.
pub trait Weight: Copy + Sum<Self> + Ord + CheckedAdd + CheckedSub + Debug + Display {}

impl Weight for i32 {}

impl Weight for i64 {}
