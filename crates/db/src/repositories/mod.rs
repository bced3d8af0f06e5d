pub mod admin_user_repo;
pub mod category_repo;
pub mod product_repo;
pub mod settings_repo;

pub use admin_user_repo::AdminUserRepo;
pub use category_repo::CategoryRepo;
pub use product_repo::ProductRepo;
pub use settings_repo::SettingsRepo;
