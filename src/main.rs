use myshell::config::Config;
use myshell::flags::Flags;
use myshell::shell::Shell;
use std::env;

fn main() -> Result<(), myshell::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("myshell {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let default_filter = if flags.is_set("debug") { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = Config::from_flags(&flags);
    log::debug!("starting with {:?}", config);

    let mut shell = Shell::new(&config)?;
    let status = shell.run()?;
    std::process::exit(status)
}
