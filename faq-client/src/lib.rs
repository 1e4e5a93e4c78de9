pub mod api_client;
pub mod controller;
pub mod search;

pub use api_client::{ApiClient, ApiError, FaqBackend, DEFAULT_SERVER_URL};
pub use controller::{
    Banner, BannerKind, ControllerError, Dialog, FaqController, FaqForm, KeyAction, KeyPress,
    BANNER_TIMEOUT,
};
pub use search::filter_faqs;
