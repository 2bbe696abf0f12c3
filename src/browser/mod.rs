//! Headless browser session management and the page capability
//! interface the extraction pipelines are written against.

pub mod page;
pub mod session;

pub use page::{Locator, PageDriver};
pub use session::BrowserSession;
