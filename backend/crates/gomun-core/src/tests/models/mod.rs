mod profile;
mod user;
mod user_role;
