pub mod customer;
pub mod order;
pub mod product;
pub mod restaurant;

/*
 Nothing in here is ever physically deleted. Customers and restaurants carry an
 `active` flag, products an `available` flag, and orders end in a terminal status
 (ENTREGUE or CANCELADO) instead of going away. The sales report depends on the
 full order history staying put.
 */
