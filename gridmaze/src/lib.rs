pub mod algorithms;
pub mod array;
pub mod board;
pub mod dims;
pub mod report;
