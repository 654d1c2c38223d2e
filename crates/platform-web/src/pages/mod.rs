//! Page Components

mod chat;
mod docs;
mod home;

pub use chat::ChatWidget;
pub use docs::{AboutModel, ApiDocs};
pub use home::LandingPage;
