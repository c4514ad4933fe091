//! Frame scheduling
//!
//! The driver asks for another frame at the end of every frame it runs.
//! Not asking is how the loop stops.

/// Something that can run the driver again on the next display refresh
pub trait Scheduler {
    fn request_frame(&mut self);
}

/// Records whether a frame was requested; the host acts on it afterwards.
///
/// The browser loop can't call back into the game while the game is
/// borrowed, so it checks this flag once the frame returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NextFrame {
    pub requested: bool,
}

impl Scheduler for NextFrame {
    fn request_frame(&mut self) {
        self.requested = true;
    }
}
