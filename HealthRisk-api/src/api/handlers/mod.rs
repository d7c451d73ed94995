pub mod assessment;
pub mod health;
pub mod page;


// Re-export handlers for easier imports
pub use assessment::{create_assessment, download_report};
pub use health::health_check;
pub use page::assessment_page;
