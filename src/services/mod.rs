pub mod analyzer;
pub mod chart_renderer;
pub mod extractor;
pub mod fetcher;
pub mod pipeline;
pub mod session;

pub use analyzer::*;
pub use chart_renderer::*;
pub use extractor::*;
pub use fetcher::*;
pub use pipeline::*;
pub use session::*;
