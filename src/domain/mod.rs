pub mod location;
pub mod metrics;
pub mod observation;
pub mod recommendations;
pub mod report;
pub mod trends;
