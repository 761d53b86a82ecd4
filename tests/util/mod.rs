pub mod datasets;
pub mod helpers;
