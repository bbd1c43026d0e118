pub mod delete_user;
pub mod helpers;
pub mod list_users;
pub mod login;
pub mod register;
pub mod set_user_status;
pub mod update_user;
