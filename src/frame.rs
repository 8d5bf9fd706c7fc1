/// Frame metadata - carries frame number and how much work ran on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    pub number: u64,
    pub callbacks: usize,
}

impl FrameInfo {
    pub fn new(number: u64, callbacks: usize) -> Self {
        Self { number, callbacks }
    }

    /// True when nothing was scheduled for this frame
    pub fn is_idle(&self) -> bool {
        self.callbacks == 0
    }
}
