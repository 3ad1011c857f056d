pub mod create;
pub mod lookup;
pub mod remove;
pub mod update;
