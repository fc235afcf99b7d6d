pub mod form;
pub mod seed;
pub mod sort;
pub mod store;
pub mod view;
