pub mod auth;
pub mod pages;
pub mod permissions;
pub mod users;
pub mod work_groups;
