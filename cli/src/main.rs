use clap::Parser;
use stab_cli::{Cli, Commands, Repl};
use stab_driver::Conf;

fn main() -> Result<(), String> {
    let cli = Cli::parse();
    let level = if cli.command.verbose() { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut conf = Conf::load();
    if let Some(seed) = cli.command.seed() {
        conf.random.seed = Some(seed);
    }
    let mut repl = Repl::new(conf);
    match cli.command {
        | Commands::Repl { .. } => repl.launch(),
        | Commands::Script { file, .. } => {
            let script = std::fs::read_to_string(&file).map_err(|e| e.to_string())?;
            log::info!("running {}", file.display());
            repl.run_script(&script, &mut std::io::stdout())
        }
    }
    .map_err(|e| e.to_string())
}
