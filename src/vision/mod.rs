mod client;
mod filter;
mod types;

pub use client::{GoogleVisionClient, VisionClient};
pub use filter::{FOOD_KEYWORDS, filter_food_labels, filter_labels};
pub use types::*;
