use clap::Parser;
use eyre::Result;

mod convert;
use convert::Convert;

mod header;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Convert::try_parse().unwrap_or_else(|err| {
        if err.use_stderr() {
            // Usage errors report on stdout and exit 1.
            println!("{err}");
            std::process::exit(1);
        }
        err.exit()
    });

    cli.run()
}
