//! Sprite-sequence playback.
//!
//! An [`Animator`] is advanced once per animation tick with the sequence the
//! owning entity's pose selects. Looping sequences wrap modulo their length;
//! play-once sequences (death, jump) clamp on the last frame and report the
//! tick that reached it exactly once.

use log::warn;

use crate::sprites::Sequence;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Loop,
    Once,
}

/// Outcome of one [`Animator::play`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Advanced,
    /// A play-once sequence just reached its last frame. Reported once.
    Finished,
    /// Nothing changed (latched sequence, or an empty sequence).
    Held,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Animator<P> {
    pose: Option<P>,
    frame: usize,
    finished: bool,
    image: &'static str,
}

impl<P: Copy + PartialEq + std::fmt::Debug> Animator<P> {
    pub fn new(image: &'static str) -> Self {
        Self { pose: None, frame: 0, finished: false, image }
    }

    /// Advance `seq` by one frame. Switching to a different pose restarts the
    /// counter.
    pub fn play(&mut self, pose: P, seq: Sequence, playback: Playback) -> Step {
        if self.pose != Some(pose) {
            self.pose = Some(pose);
            self.restart();
        }
        if seq.is_empty() {
            warn!("empty sprite sequence for pose {pose:?}; keeping previous frame");
            return Step::Held;
        }
        let last = seq.len() - 1;
        match playback {
            Playback::Loop => {
                self.image = seq[self.frame % seq.len()];
                self.frame = self.frame.wrapping_add(1);
                Step::Advanced
            }
            Playback::Once if self.finished => {
                self.image = seq[last];
                Step::Held
            }
            Playback::Once => {
                let idx = self.frame.min(last);
                self.image = seq[idx];
                if idx == last {
                    self.finished = true;
                    Step::Finished
                } else {
                    self.frame += 1;
                    Step::Advanced
                }
            }
        }
    }

    /// Rewind the current sequence (a new jump starts its sequence over).
    pub fn restart(&mut self) {
        self.frame = 0;
        self.finished = false;
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn image(&self) -> &'static str {
        self.image
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn pose(&self) -> Option<P> {
        self.pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQ: Sequence = &["a", "b", "c"];

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Pose {
        Walk,
        Dead,
    }

    #[test]
    fn looping_wraps_modulo_length() {
        let mut anim = Animator::new("a");
        for _ in 0..10 {
            let before = anim.frame();
            assert_eq!(anim.play(Pose::Walk, SEQ, Playback::Loop), Step::Advanced);
            assert_eq!(anim.frame() % SEQ.len(), (before + 1) % SEQ.len());
            assert_eq!(anim.image(), SEQ[before % SEQ.len()]);
        }
    }

    #[test]
    fn once_latches_on_last_frame_exactly_once() {
        let mut anim = Animator::new("a");
        let mut finished = 0;
        for _ in 0..8 {
            if anim.play(Pose::Dead, SEQ, Playback::Once) == Step::Finished {
                finished += 1;
            }
            assert!(anim.frame() < SEQ.len());
        }
        assert_eq!(finished, 1);
        assert!(anim.finished());
        assert_eq!(anim.frame(), SEQ.len() - 1);
        assert_eq!(anim.image(), "c");
    }

    #[test]
    fn pose_change_restarts_counter() {
        let mut anim = Animator::new("a");
        anim.play(Pose::Walk, SEQ, Playback::Loop);
        anim.play(Pose::Walk, SEQ, Playback::Loop);
        assert_eq!(anim.frame(), 2);
        anim.play(Pose::Dead, SEQ, Playback::Once);
        assert_eq!(anim.frame(), 1);
        assert_eq!(anim.pose(), Some(Pose::Dead));
    }

    #[test]
    fn empty_sequence_keeps_previous_image() {
        let mut anim = Animator::new("still");
        assert_eq!(anim.play(Pose::Walk, &[], Playback::Loop), Step::Held);
        assert_eq!(anim.image(), "still");
    }
}
