use draughts_engine::cli;

fn main() {
    env_logger::init();
    cli::run_cli_loop();
}
