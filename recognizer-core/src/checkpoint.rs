/// A checkpoint for saving and restoring the parse position.
/// Backtracking is purely a matter of restoring a saved token index; no undo
/// log is needed because positions are passed and returned by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    /// The token index at this checkpoint.
    index: usize,
}

impl Checkpoint {
    /// Creates a new checkpoint at the given token index.
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    /// Returns the token index stored in this checkpoint.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoint_roundtrip() {
        let cp = Checkpoint::new(3);
        assert_eq!(cp.index(), 3);
    }

    #[test]
    fn test_checkpoint_equality() {
        assert_eq!(Checkpoint::new(0), Checkpoint::new(0));
        assert_ne!(Checkpoint::new(0), Checkpoint::new(1));
    }
}
