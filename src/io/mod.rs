pub mod extract;
pub mod net;
pub mod progress;
