pub mod either;
pub mod list;
pub mod nullable;
pub mod right_biased;
