pub mod blueprint;
pub mod matcher;
pub mod policy;
pub mod state;
