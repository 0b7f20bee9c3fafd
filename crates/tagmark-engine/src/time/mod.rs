//! Frame timing.
//!
//! Animations sample `FrameTime::now`; the clock only decides *when* a frame
//! happens and hands out monotonic timestamps. One clock per render loop.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
