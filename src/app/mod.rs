pub mod events;
pub mod one_shot;
pub mod search;
pub mod state;
