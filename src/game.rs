//! The game state machine.
//!
//! [`Game`] is owned by a single task and fed [`Event`]s one at a time, so
//! state changes never race each other. Handling an event only updates state
//! and the layered LED model; the returned [`Redraw`] tells the caller which
//! peripherals need pushing.

use crate::{
    config::{
        ENEMY_COLOR,
        FIRE_TONE,
        HIT_FLASH_COLOR,
        HIT_TONE,
        PLAYER_COLOR,
        SHOT_COLOR,
    },
    event::{
        Button,
        Event,
    },
    joystick::{
        JoystickCalibration,
        LaneSampler,
        MenuSelection,
    },
    lane::Lane,
    matrix::{
        Layer,
        LedMatrix,
    },
    screen::View,
    tone::Tone,
};

/// Which screen the game is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    #[default]
    MenuBrowsing,
    AboutScreen,
    Playing,
}

/// Xorshift32 generator for the enemy's random walk.
#[derive(Clone, Debug)]
pub struct Rng(u32);

impl Rng {
    /// Seeded generator. Zero is a fixed point of xorshift and is replaced.
    pub const fn new(seed: u32) -> Self {
        Self(if seed == 0 { 0x9E37_79B9 } else { seed })
    }

    pub fn next(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    /// -1 or +1 with equal odds.
    pub fn direction(&mut self) -> i32 {
        if self.next() & 1 == 0 { -1 } else { 1 }
    }
}

/// Work left for the caller after an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Redraw {
    /// The LED frame changed and must be flushed.
    pub leds: bool,
    /// A shot trace is showing; call [`Game::end_shot`] once it has been
    /// visible long enough, then flush again.
    pub shot: bool,
    /// Display content to draw and flush.
    pub view: Option<View>,
    /// Sound to start.
    pub tone: Option<Tone>,
}

/// Outcome of a fire press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shot {
    Hit,
    Miss,
}

/// All game state plus the LED layer model.
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    selection: MenuSelection,
    player: Lane,
    enemy: Lane,
    score: u32,
    alive: bool,
    sampler: LaneSampler,
    rng: Rng,
    matrix: LedMatrix,
}

impl Game {
    pub fn new(seed: u32) -> Self {
        Self::with_calibration(seed, JoystickCalibration::default())
    }

    pub fn with_calibration(seed: u32, calibration: JoystickCalibration) -> Self {
        let mut matrix = LedMatrix::new();
        matrix.set(Layer::Player, Lane::CENTER, PLAYER_COLOR);
        matrix.set(Layer::Enemy, Lane::CENTER, ENEMY_COLOR);
        Self {
            state: GameState::MenuBrowsing,
            selection: MenuSelection::Play,
            player: Lane::CENTER,
            enemy: Lane::CENTER,
            score: 0,
            alive: true,
            sampler: LaneSampler::starting_at(calibration, Lane::CENTER),
            rng: Rng::new(seed),
            matrix,
        }
    }

    /// Everything to push on power-up: both tokens and the menu.
    pub fn initial_redraw(&self) -> Redraw {
        Redraw {
            leds: true,
            view: Some(self.current_view()),
            ..Redraw::default()
        }
    }

    pub const fn state(&self) -> GameState {
        self.state
    }

    pub const fn selection(&self) -> MenuSelection {
        self.selection
    }

    pub const fn player(&self) -> Lane {
        self.player
    }

    pub const fn enemy(&self) -> Lane {
        self.enemy
    }

    pub const fn score(&self) -> u32 {
        self.score
    }

    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    pub const fn matrix(&self) -> &LedMatrix {
        &self.matrix
    }

    /// Full view for the current state.
    pub const fn current_view(&self) -> View {
        match self.state {
            GameState::MenuBrowsing => View::Menu(self.selection),
            GameState::AboutScreen => View::About,
            GameState::Playing => View::Score(self.score),
        }
    }

    /// Apply one event.
    pub fn handle(&mut self, event: Event) -> Redraw {
        match event {
            Event::JoystickSample { x, y } => self.on_joystick(x, y),
            Event::TickElapsed => self.on_tick(),
            Event::ButtonPressed(Button::A) => self.on_confirm(),
            Event::ButtonPressed(Button::B) => self.on_fire(),
        }
    }

    /// Take the shot trace down and give the enemy its colour back.
    pub fn end_shot(&mut self) -> Redraw {
        self.matrix.clear(Layer::Shot);
        self.matrix.set(Layer::Enemy, self.enemy, ENEMY_COLOR);
        Redraw {
            leds: true,
            ..Redraw::default()
        }
    }

    fn on_joystick(&mut self, x: u16, y: u16) -> Redraw {
        let mut redraw = Redraw::default();

        let lane = self.sampler.sample(x);
        if lane != self.player {
            trace!("player lane {} -> {}", self.player.get(), lane.get());
            self.player = lane;
            self.matrix.set(Layer::Player, lane, PLAYER_COLOR);
            redraw.leds = true;
        }

        if self.state == GameState::MenuBrowsing {
            let selection = MenuSelection::from_y(y, self.selection);
            if selection != self.selection {
                debug!("menu selection {}", selection);
                self.selection = selection;
                redraw.view = Some(View::Selector(selection));
            }
        }

        redraw
    }

    fn on_tick(&mut self) -> Redraw {
        if self.state != GameState::Playing || !self.alive {
            return Redraw::default();
        }
        let direction = self.rng.direction();
        self.step_enemy(direction);
        Redraw {
            leds: true,
            ..Redraw::default()
        }
    }

    /// Move the enemy one lane; a push against either edge leaves it in place.
    fn step_enemy(&mut self, direction: i32) {
        let next = self.enemy.step(direction);
        if next != self.enemy {
            trace!("enemy lane {} -> {}", self.enemy.get(), next.get());
        }
        self.enemy = next;
        // Keep the hit flash until end_shot.
        let color = match self.matrix.layer(Layer::Enemy) {
            Some((_, color)) => color,
            None => ENEMY_COLOR,
        };
        self.matrix.set(Layer::Enemy, next, color);
    }

    fn on_confirm(&mut self) -> Redraw {
        let next = match (self.state, self.selection) {
            (GameState::MenuBrowsing, MenuSelection::Play) => GameState::Playing,
            (GameState::MenuBrowsing, MenuSelection::About) => GameState::AboutScreen,
            (GameState::AboutScreen, _) => GameState::MenuBrowsing,
            (GameState::Playing, _) => return Redraw::default(),
        };
        info!("state {} -> {}", self.state, next);
        self.state = next;
        Redraw {
            view: Some(self.current_view()),
            ..Redraw::default()
        }
    }

    fn on_fire(&mut self) -> Redraw {
        if self.state != GameState::Playing {
            return Redraw::default();
        }

        self.matrix.set(Layer::Shot, self.player, SHOT_COLOR);
        let mut redraw = Redraw {
            leds: true,
            shot: true,
            tone: Some(FIRE_TONE),
            ..Redraw::default()
        };

        match self.resolve_shot() {
            Shot::Hit => {
                self.score = self.score.saturating_add(1);
                self.matrix.set(Layer::Enemy, self.enemy, HIT_FLASH_COLOR);
                redraw.view = Some(View::Score(self.score));
                redraw.tone = Some(HIT_TONE);
                info!("hit at lane {}, score {}", self.enemy.get(), self.score);
            }
            Shot::Miss => {
                debug!("miss: player {} enemy {}", self.player.get(), self.enemy.get());
            }
        }
        redraw
    }

    /// A shot connects when the enemy is in the player's lane or a neighbour.
    fn resolve_shot(&self) -> Shot {
        if self.player.is_adjacent_or_same(self.enemy) {
            Shot::Hit
        } else {
            Shot::Miss
        }
    }
}
