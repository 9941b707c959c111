//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod clock;
pub mod command_rx;
pub mod render;

pub use clock::clock_task;
pub use command_rx::command_rx_task;
pub use render::{render_task, Engine};
