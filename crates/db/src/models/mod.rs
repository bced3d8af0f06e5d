pub mod admin_user;
pub mod category;
pub mod product;
pub mod settings;
