use std::process;

mod cli;
mod command;
mod environment;
mod signal;

fn main() {
    signal::setup_signal_handler();

    let cli = cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("envdir: {err:#}");
        process::exit(1);
    }
}

fn run(cli: cli::Cli) -> anyhow::Result<()> {
    let env = environment::read_dir(&cli.dir)?;
    command::run(&cli.command, &env)
}
