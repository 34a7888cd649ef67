//! Browser process management and the CDP-backed page implementation

pub mod page;
pub mod session;

pub use page::CdpPage;
pub use session::Session;
