pub mod aggregate;
pub mod charts;
pub mod features;
pub mod missing;
pub mod output;
pub mod ranking;
