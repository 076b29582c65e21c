//! Epsilon-aware comparisons shared by all geometric code.
//!
//! Every "is this value effectively zero/equal" decision in the crate goes
//! through this module, using the fixed absolute [`EPSILON`].

mod predicates;

pub use predicates::{
    epsilon, equal, greater_or_equal, greater_than, is_zero, less_or_equal, less_than, orient2d,
    Orientation, EPSILON,
};
