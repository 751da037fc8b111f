pub mod rules;

pub use rules::RecommendationEngine;
