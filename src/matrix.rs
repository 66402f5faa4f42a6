//! 5×5 LED matrix layout for the player, enemy and shot layers.
//!
//! Cell numbering follows the serpentine wiring of the panel:
//!
//! ```text
//! 24 23 22 21 20   enemy
//! 15 16 17 18 19   enemy
//! 14 13 12 11 10   shot
//!  5  6  7  8  9   player
//!  4  3  2  1  0   player
//! ```
//!
//! Each layer lights a fixed set of cells per lane. The frame is composed
//! from the layers on demand, so changing one layer never disturbs another.

use palette::Srgb;

use crate::lane::{
    LANE_COUNT,
    Lane,
};

/// Cells on the panel.
pub const CELL_COUNT: usize = 25;

const OFF: Srgb<u8> = Srgb::new(0, 0, 0);

/// Up to four cells per lane; unused slots are `None`.
type CellSet = [Option<u8>; 4];

const fn cells3(a: u8, b: u8, c: u8) -> CellSet {
    [Some(a), Some(b), Some(c), None]
}

const fn cells4(a: u8, b: u8, c: u8, d: u8) -> CellSet {
    [Some(a), Some(b), Some(c), Some(d)]
}

const PLAYER_CELLS: [CellSet; LANE_COUNT] = [
    cells3(3, 4, 5),
    cells4(2, 3, 4, 6),
    cells4(1, 2, 3, 7),
    cells4(0, 1, 2, 8),
    cells3(0, 1, 9),
];

const ENEMY_CELLS: [CellSet; LANE_COUNT] = [
    cells3(15, 23, 24),
    cells4(16, 22, 23, 24),
    cells4(17, 21, 22, 23),
    cells4(18, 20, 21, 22),
    cells3(19, 20, 21),
];

const SHOT_CELLS: [CellSet; LANE_COUNT] = [
    cells3(14, 15, 24),
    cells3(13, 16, 23),
    cells3(12, 17, 22),
    cells3(11, 18, 21),
    cells3(10, 19, 20),
];

/// Logical layers, drawn bottom to top in this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Player,
    Enemy,
    Shot,
}

impl Layer {
    const ALL: [Self; 3] = [Self::Player, Self::Enemy, Self::Shot];

    const fn table(self) -> &'static [CellSet; LANE_COUNT] {
        match self {
            Self::Player => &PLAYER_CELLS,
            Self::Enemy => &ENEMY_CELLS,
            Self::Shot => &SHOT_CELLS,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }

    /// Cell indices this layer lights for `lane`.
    pub fn cells(self, lane: Lane) -> impl Iterator<Item = usize> {
        self.table()[lane.index()].into_iter().flatten().map(usize::from)
    }
}

/// Layered model of the LED matrix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedMatrix {
    layers: [Option<(Lane, Srgb<u8>)>; 3],
}

impl LedMatrix {
    pub const fn new() -> Self {
        Self { layers: [None; 3] }
    }

    /// Light `layer` at `lane`, replacing whatever that layer showed before.
    pub fn set(&mut self, layer: Layer, lane: Lane, color: Srgb<u8>) {
        self.layers[layer.slot()] = Some((lane, color));
    }

    /// Turn off one layer.
    pub fn clear(&mut self, layer: Layer) {
        self.layers[layer.slot()] = None;
    }

    /// Turn off every layer.
    pub fn clear_all(&mut self) {
        self.layers = [None; 3];
    }

    /// What `layer` currently shows.
    pub fn layer(&self, layer: Layer) -> Option<(Lane, Srgb<u8>)> {
        self.layers[layer.slot()]
    }

    /// Compose the layers into one colour per cell, in cell index order.
    pub fn frame(&self) -> [Srgb<u8>; CELL_COUNT] {
        let mut frame = [OFF; CELL_COUNT];
        for layer in Layer::ALL {
            if let Some((lane, color)) = self.layers[layer.slot()] {
                for cell in layer.cells(lane) {
                    frame[cell] = color;
                }
            }
        }
        frame
    }
}

/// Bytes in the order WS2812 cells expect them: G, R, B per cell, first
/// cell first.
pub fn wire_bytes(frame: &[Srgb<u8>]) -> impl Iterator<Item = u8> + '_ {
    frame
        .iter()
        .flat_map(|color| [color.green, color.red, color.blue])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lane(n: u8) -> Lane {
        Lane::new(n).unwrap()
    }

    fn lit(frame: &[Srgb<u8>; CELL_COUNT]) -> Vec<usize> {
        frame
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != OFF)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn lane_tables_match_panel_layout() {
        let player: Vec<Vec<usize>> = (1..=5).map(|n| Layer::Player.cells(lane(n)).collect()).collect();
        assert_eq!(
            player,
            vec![vec![3, 4, 5], vec![2, 3, 4, 6], vec![1, 2, 3, 7], vec![0, 1, 2, 8], vec![0, 1, 9]]
        );

        let enemy: Vec<Vec<usize>> = (1..=5).map(|n| Layer::Enemy.cells(lane(n)).collect()).collect();
        assert_eq!(
            enemy,
            vec![
                vec![15, 23, 24],
                vec![16, 22, 23, 24],
                vec![17, 21, 22, 23],
                vec![18, 20, 21, 22],
                vec![19, 20, 21],
            ]
        );

        let shot: Vec<Vec<usize>> = (1..=5).map(|n| Layer::Shot.cells(lane(n)).collect()).collect();
        assert_eq!(
            shot,
            vec![vec![14, 15, 24], vec![13, 16, 23], vec![12, 17, 22], vec![11, 18, 21], vec![10, 19, 20]]
        );
    }

    #[test]
    fn setting_one_layer_leaves_the_others() {
        let mut matrix = LedMatrix::new();
        let cyan = Srgb::new(0, 80, 80);
        let yellow = Srgb::new(80, 80, 0);
        matrix.set(Layer::Enemy, lane(3), yellow);
        matrix.set(Layer::Player, lane(1), cyan);
        matrix.set(Layer::Player, lane(5), cyan);

        let frame = matrix.frame();
        assert_eq!(lit(&frame), vec![0, 1, 9, 17, 21, 22, 23]);
        assert_eq!(frame[9], cyan);
        assert_eq!(frame[17], yellow);
    }

    #[test]
    fn clearing_the_shot_restores_covered_enemy_cells() {
        let mut matrix = LedMatrix::new();
        let yellow = Srgb::new(80, 80, 0);
        let red = Srgb::new(80, 0, 0);
        matrix.set(Layer::Enemy, lane(1), yellow);
        matrix.set(Layer::Shot, lane(1), red);
        assert_eq!(matrix.frame()[24], red);

        matrix.clear(Layer::Shot);
        let frame = matrix.frame();
        assert_eq!(frame[24], yellow);
        assert_eq!(frame[15], yellow);
        assert_eq!(frame[14], OFF);
    }

    #[test]
    fn cleared_matrix_is_always_dark() {
        let mut matrix = LedMatrix::new();
        matrix.set(Layer::Player, lane(2), Srgb::new(1, 2, 3));
        matrix.clear_all();
        let first: Vec<u8> = wire_bytes(&matrix.frame()).collect();
        matrix.clear_all();
        let second: Vec<u8> = wire_bytes(&matrix.frame()).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), CELL_COUNT * 3);
        assert!(first.iter().all(|&b| b == 0));
    }

    #[test]
    fn wire_order_is_green_red_blue() {
        let frame = [Srgb::new(1, 2, 3), Srgb::new(4, 5, 6)];
        let bytes: Vec<u8> = wire_bytes(&frame).collect();
        assert_eq!(bytes, vec![2, 1, 3, 5, 4, 6]);
    }
}
