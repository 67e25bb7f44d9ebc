pub mod input;
pub mod session;
pub mod toolbar;
pub mod tools;
