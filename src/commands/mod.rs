pub mod init;
pub mod post;
pub mod react;
