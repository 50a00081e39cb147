pub mod args;
pub mod print;
