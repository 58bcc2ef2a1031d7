use clap::Parser;
use miette::Result;
use partbin::cli::{init_logging, Cli, Commands};

fn main() -> Result<()> {
    // Terminate quietly on a closed pipe (`partbin shell < cmds | head`).
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    init_logging(global.verbose);

    match cli.command {
        Commands::Shell(args) => partbin::cli::commands::shell::run(args, &global),
        Commands::Kinds => partbin::cli::commands::kinds::run(),
        Commands::Completions(args) => partbin::cli::commands::completions::run(args),
    }
}
