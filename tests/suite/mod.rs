mod config_file;
mod game_flow;
mod return_home;
