// Library for tests to access modules

pub mod config;
pub mod models;
pub mod routes;
pub mod upf_repo;
pub mod version;
pub mod worker;
