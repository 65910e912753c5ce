//! Held-key snapshot written by the browser shell and read once per tick.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub throw: bool,
    pub up: bool,
}

/// Keys the shell maps onto [`InputState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
    Throw,
    Up,
}

impl InputState {
    pub fn set(&mut self, key: Key, down: bool) {
        match key {
            Key::Left => self.left = down,
            Key::Right => self.right = down,
            Key::Jump => self.jump = down,
            Key::Throw => self.throw = down,
            Key::Up => self.up = down,
        }
    }

    /// Jumping listens to both the jump key and the up arrow.
    pub fn wants_jump(&self) -> bool {
        self.jump || self.up
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_also_jumps() {
        let mut input = InputState::default();
        assert!(!input.wants_jump());
        input.set(Key::Up, true);
        assert!(input.wants_jump());
        input.clear();
        assert_eq!(input, InputState::default());
    }
}
