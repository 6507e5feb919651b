pub mod add;
pub mod clear;
pub mod delete;
pub mod r#do;
pub mod list;
pub mod parse;
pub mod watch;
