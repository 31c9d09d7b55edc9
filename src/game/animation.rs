//! Sprite-sheet animation
//!
//! An animation is a contiguous run of frames on one sheet played at a
//! fixed rate. The animator tracks elapsed time and the frame to draw.

/// Named animations used by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimKey {
    /// Player running left
    Left,
    /// Player facing the camera (idle, hurt)
    Turn,
    /// Player running right
    Right,
    Burning,
    Rotate,
    Flying,
}

/// Frame range and playback rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub first: u32,
    pub last: u32,
    pub fps: f32,
    pub looping: bool,
}

impl Animation {
    pub const fn looping(first: u32, last: u32, fps: f32) -> Self {
        Self { first, last, fps, looping: true }
    }

    pub const fn still(frame: u32) -> Self {
        Self { first: frame, last: frame, fps: 0.0, looping: false }
    }

    pub fn frame_count(&self) -> u32 {
        self.last - self.first + 1
    }
}

impl AnimKey {
    pub fn animation(self) -> Animation {
        match self {
            AnimKey::Left => Animation::looping(0, 3, 10.0),
            AnimKey::Turn => Animation::still(4),
            AnimKey::Right => Animation::looping(5, 8, 10.0),
            AnimKey::Burning => Animation::looping(0, 4, 10.0),
            AnimKey::Rotate => Animation::looping(0, 7, 10.0),
            AnimKey::Flying => Animation::looping(0, 11, 5.0),
        }
    }
}

/// Playback state for one sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animator {
    current: AnimKey,
    elapsed: f32,
}

impl Animator {
    pub fn new(key: AnimKey) -> Self {
        Self { current: key, elapsed: 0.0 }
    }

    #[cfg(test)]
    pub fn current(&self) -> AnimKey {
        self.current
    }

    /// Switch animation. With `ignore_if_playing`, asking for the animation
    /// that is already running leaves it alone instead of rewinding it.
    pub fn play(&mut self, key: AnimKey, ignore_if_playing: bool) {
        if ignore_if_playing && self.current == key {
            return;
        }
        self.current = key;
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Sheet frame to draw right now
    pub fn frame(&self) -> u32 {
        let anim = self.current.animation();
        if anim.fps <= 0.0 {
            return anim.first;
        }
        let step = (self.elapsed * anim.fps) as u32;
        let offset = if anim.looping {
            step % anim.frame_count()
        } else {
            step.min(anim.frame_count() - 1)
        };
        anim.first + offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_cycle_loops() {
        let mut anim = Animator::new(AnimKey::Right);
        assert_eq!(anim.frame(), 5);
        anim.advance(0.25);
        assert_eq!(anim.frame(), 7);
        anim.advance(0.2);
        // 4.5 frames in at 10 fps wraps back to the first frame
        assert_eq!(anim.frame(), 5);
    }

    #[test]
    fn test_turn_is_a_single_frame() {
        let mut anim = Animator::new(AnimKey::Turn);
        anim.advance(10.0);
        assert_eq!(anim.frame(), 4);
    }

    #[test]
    fn test_dragon_flaps_slowly() {
        let mut anim = Animator::new(AnimKey::Flying);
        anim.advance(1.0);
        assert_eq!(anim.frame(), 5);
        anim.advance(1.5);
        assert_eq!(anim.frame(), 0);
    }

    #[test]
    fn test_replaying_same_animation_keeps_progress() {
        let mut anim = Animator::new(AnimKey::Left);
        anim.advance(0.15);
        anim.play(AnimKey::Left, true);
        assert_eq!(anim.frame(), 1);

        anim.play(AnimKey::Left, false);
        assert_eq!(anim.frame(), 0);

        anim.play(AnimKey::Right, true);
        assert_eq!(anim.current(), AnimKey::Right);
        assert_eq!(anim.frame(), 5);
    }
}
