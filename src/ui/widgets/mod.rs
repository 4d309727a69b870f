pub mod comfort;
pub mod footer;
pub mod probability;
pub mod recommendations;
pub mod results;
pub mod search_form;
pub mod selector;
pub mod shared;
pub mod status;
pub mod trends;
