pub mod big_five;
pub mod decision_style;
pub mod perceived_stress;
pub mod resilience;
pub mod situational_judgment;
