/// A live chart attached to a drawing surface.
pub trait ChartHandle {
    /// Release the rendering resources and detach from the surface.
    fn destroy(&mut self);
}

/// Domain entity - owner of at most one live chart.
///
/// The previous occupant is always destroyed before its replacement is built,
/// so two charts never share the surface.
#[derive(Debug)]
pub struct ChartSlot<H: ChartHandle> {
    current: Option<H>,
    generation: u64,
}

impl<H: ChartHandle> Default for ChartSlot<H> {
    fn default() -> Self {
        Self { current: None, generation: 0 }
    }
}

impl<H: ChartHandle> ChartSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&H> {
        self.current.as_ref()
    }

    /// Number of charts installed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Destroy the occupant (if any), then build and install a new one.
    ///
    /// When `build` fails the slot stays empty.
    pub fn replace_with<E>(&mut self, build: impl FnOnce() -> Result<H, E>) -> Result<&H, E> {
        self.clear();
        let next = build()?;
        self.generation += 1;
        Ok(self.current.insert(next))
    }

    pub fn clear(&mut self) {
        if let Some(mut old) = self.current.take() {
            old.destroy();
        }
    }
}

impl<H: ChartHandle> Drop for ChartSlot<H> {
    fn drop(&mut self) {
        self.clear();
    }
}
