pub mod domain;
pub mod system;
pub mod usecases;
