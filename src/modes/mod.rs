pub mod play;
pub mod watch;

pub use play::PlayMode;
pub use watch::WatchMode;
