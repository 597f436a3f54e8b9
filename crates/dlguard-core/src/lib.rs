pub mod config;
pub mod logging;

pub mod identity;
pub mod layout;
pub mod path_authz;
pub mod reconcile;
pub mod records;
pub mod save_file;
