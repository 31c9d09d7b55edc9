//! Score and lives bookkeeping

/// What happened to the run after losing a life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeOutcome {
    Alive,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: u32,
    pub lives: u32,
    pub game_over: bool,
    life_bonus_every: u32,
}

impl Scoreboard {
    pub fn new(start_lives: u32, life_bonus_every: u32) -> Self {
        Self {
            score: 0,
            lives: start_lives,
            game_over: false,
            life_bonus_every: life_bonus_every.max(1),
        }
    }

    /// Add points. A life is granted whenever the new score is a multiple
    /// of the bonus step. Returns true if that happened.
    pub fn award(&mut self, points: u32) -> bool {
        self.score = self.score.saturating_add(points);
        if self.score % self.life_bonus_every == 0 {
            self.lives += 1;
            return true;
        }
        false
    }

    pub fn lose_life(&mut self) -> LifeOutcome {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.game_over = true;
            LifeOutcome::GameOver
        } else {
            LifeOutcome::Alive
        }
    }

    /// HUD text
    pub fn label(&self) -> String {
        format!("Score:{} / Lives:{}", self.score, self.lives)
    }
}
