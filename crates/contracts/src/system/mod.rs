pub mod auth;
pub mod permissions;
pub mod users;
pub mod work_groups;
