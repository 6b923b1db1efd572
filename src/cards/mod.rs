pub mod board;
pub mod card;
pub mod hole;
pub mod rank;
pub mod street;
pub mod suit;
