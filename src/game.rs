use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{Cell, Grid, HEIGHT, WIDTH};

#[derive(Copy, Clone, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

pub struct GameBoard {
    grid: Grid,
    pub player_one: bool,
    pub state: GameState,
}

impl GameBoard {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            player_one: true,
            state: GameState::Playing,
        }
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState> {
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let column = column_one_indexed - 1;
        let side = if self.player_one {
            Cell::PlayerOne
        } else {
            Cell::PlayerTwo
        };

        let row = self
            .grid
            .play(column, side)
            .map_err(|_| anyhow!("Invalid move, column {} full", column_one_indexed))?;

        // judge the move just applied: a win first, then a draw
        self.state = if self.grid.wins(row, column, side)? {
            if self.player_one {
                GameState::PlayerOneWin
            } else {
                GameState::PlayerTwoWin
            }
        } else if self.grid.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.player_one = !self.player_one;

        Ok(self.state)
    }

    pub fn reset(&mut self) {
        self.grid.reset();
        self.player_one = true;
        self.state = GameState::Playing;
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..HEIGHT {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let (pos_x, pos_y) = (
                    origin_x + column as u16,
                    origin_y - (HEIGHT - 1 - row) as u16,
                );

                stdout
                    .queue(MoveTo(pos_x, pos_y))?
                    .queue(PrintStyledContent(
                        style("O")
                            .attribute(Attribute::Bold)
                            .on(Color::DarkBlue)
                            .with(match self.grid.get(row, column) {
                                Cell::PlayerOne => Color::Red,
                                Cell::PlayerTwo => Color::Yellow,
                                Cell::Empty => Color::DarkBlue,
                            }),
                    ))?;
            }
        }
        stdout
            .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}
