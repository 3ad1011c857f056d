pub mod cancel;
pub mod create;
pub mod lookup;
pub mod status;
