pub mod action;
pub mod line;
pub mod postflop;
pub mod preflop;
pub mod token;
