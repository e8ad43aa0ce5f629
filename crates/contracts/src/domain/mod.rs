pub mod allocation;
pub mod customer;
pub mod dept;
pub mod order;
pub mod product;
pub mod role;
