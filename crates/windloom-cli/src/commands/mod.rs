pub mod emit;
pub mod init;
pub mod scan;
pub mod shade;
pub mod show;
pub mod validate;
