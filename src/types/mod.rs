pub mod customer;
pub mod error;
pub mod order;
pub mod product;
pub mod report;
pub mod response;
pub mod restaurant;
