pub mod create;
pub mod lookup;
pub mod toggle;
pub mod update;
