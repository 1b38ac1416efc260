mod bbox_cmd;
mod cli;
mod inject_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    shared::init_logging(cli.verbose);

    let result = match cli.command {
        cli::Commands::Bbox { ref file, height } => bbox_cmd::run(file, height),
        cli::Commands::Inject {
            ref file,
            ref alt_text,
            ref output,
        } => inject_cmd::run(file, alt_text.as_deref(), output.as_deref()),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
