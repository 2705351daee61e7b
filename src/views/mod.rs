pub mod health;
pub mod layout;
pub mod probe;
