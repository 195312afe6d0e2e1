use anyhow::Result;

use std::io::{stdin, stdout, Stdin, Write};

use connect4_minimax::*;

mod game;
use game::*;

fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn main() -> Result<()> {
    let mut board = GameBoard::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose AI control of either player
    let mut ai_players: (Option<MinimaxPlayer>, Option<MinimaxPlayer>) = (None, None);

    if ask_yes_no(&stdin, "Is player 1 AI controlled?")? {
        let mut player = MinimaxPlayer::new();
        player.bind(Cell::PlayerOne)?;
        ai_players.0 = Some(player);
    }

    if ask_yes_no(&stdin, "Is player 2 AI controlled?")? {
        let mut player = MinimaxPlayer::new();
        player.bind(Cell::PlayerTwo)?;
        ai_players.1 = Some(player);
    }

    let both_ai = ai_players.0.is_some() && ai_players.1.is_some();

    // game loop
    loop {
        board.display().expect("Failed to draw board!");

        match board.state {
            GameState::Playing => {
                let ai_player = if board.player_one {
                    ai_players.0.as_mut()
                } else {
                    ai_players.1.as_mut()
                };

                let next_move =
                    // AI player
                    if let Some(player) = ai_player {
                        println!("AI is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        // slow down play if both players are AI
                        if both_ai {
                            std::thread::sleep(std::time::Duration::new(1, 0));
                        }

                        let best_move = player.choose_move(board.grid_mut())?;

                        println!("AI plays column {}", best_move + 1);
                        best_move + 1

                    // human player
                    } else {
                        print!("Move input > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str);
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = board.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::PlayerOneWin => {
                println!("Player 1 wins!");
                if !ask_yes_no(&stdin, "Play again?")? {
                    break;
                }
                board.reset();
            }
            GameState::PlayerTwoWin => {
                println!("Player 2 wins!");
                if !ask_yes_no(&stdin, "Play again?")? {
                    break;
                }
                board.reset();
            }
            GameState::Draw => {
                println!("Draw!");
                if !ask_yes_no(&stdin, "Play again?")? {
                    break;
                }
                board.reset();
            }
        }
    }
    Ok(())
}
