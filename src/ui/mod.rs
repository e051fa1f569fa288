pub mod app;
pub mod table_view;
pub mod themes;

pub use app::ProteinApp;
