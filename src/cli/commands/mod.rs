pub mod compile;
pub mod init;
pub mod status;
pub mod translate;
