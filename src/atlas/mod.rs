mod bound;

pub use bound::{LARGEST_MAX_SIZE, MAX_SIZE_CANDIDATES, MaxSizeCheck, recommend_max_size};
