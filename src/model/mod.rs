pub mod data_core;
pub mod export;
pub mod file_ops;
pub mod identity;
pub mod merge;
pub mod performance;
pub mod table_view;
pub mod tree;
