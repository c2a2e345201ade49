pub mod byte_range;
pub mod content_range;
pub mod segment_planner;
