mod grid;
mod player;

pub use grid::{Cell, EMPTY, Grid, GridError};

pub use player::{InputFlags, Player};
