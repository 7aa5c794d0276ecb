pub mod categories;
pub mod interviews;
