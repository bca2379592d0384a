use tracker_core::TrackerError;

/// Tracker lifecycle: `R` is everything alive between `initThree` and
/// `dispose`.
pub enum Slot<R> {
    Uninitialized,
    Ready(R),
    Disposed,
}

impl<R> Slot<R> {
    pub fn running(&self) -> Result<&R, TrackerError> {
        match self {
            Slot::Ready(r) => Ok(r),
            Slot::Uninitialized => Err(TrackerError::NotInitialized),
            Slot::Disposed => Err(TrackerError::Disposed),
        }
    }

    pub fn running_mut(&mut self) -> Result<&mut R, TrackerError> {
        match self {
            Slot::Ready(r) => Ok(r),
            Slot::Uninitialized => Err(TrackerError::NotInitialized),
            Slot::Disposed => Err(TrackerError::Disposed),
        }
    }

    /// Target for a tracked frame. Frames that arrive while `initThree` is
    /// still pending are dropped (`None`) rather than rejected.
    pub fn frame_target(&mut self) -> Result<Option<&mut R>, TrackerError> {
        match self {
            Slot::Ready(r) => Ok(Some(r)),
            Slot::Uninitialized => Ok(None),
            Slot::Disposed => Err(TrackerError::Disposed),
        }
    }
}
