#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod file_repository;

pub use file_repository::FileAccountRepository;
