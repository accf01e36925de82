pub mod app;
pub mod create_load;
pub mod error_toast;
pub mod load_detail;
pub mod loads_table;
pub mod settings;
pub mod sidebar;

pub use app::App;
pub use create_load::CreateLoad;
pub use error_toast::ErrorToast;
pub use load_detail::LoadDetail;
pub use loads_table::LoadsTable;
pub use settings::Settings;
pub use sidebar::Sidebar;
