pub mod flags;
pub mod generate;
pub mod list;
