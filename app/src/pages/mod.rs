pub mod home;
pub mod nav;
pub mod profile;
pub mod schedule;
pub mod signin;
