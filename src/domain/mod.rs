pub mod browser;
pub mod complaint;
pub mod form;
pub mod ids;
