pub mod api_client;
pub mod notice;

pub use api_client::{ApiClient, Endpoints, ProductApi};
pub use notice::{AlertNotifier, Notice, Notifier};
