// Tue Feb 3 2026 - Alex

pub mod logging;
pub mod math;
pub mod string;

pub use logging::LoggingUtils;
pub use math::MathUtils;
pub use string::StringUtils;
