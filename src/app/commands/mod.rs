pub mod branches;
pub mod catalog;
pub mod dispatch;
