use super::super::args::*;
use super::super::helpers::load_config;
use crate::exit_codes::SUCCESS;

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    let config = || load_config(&cli.global);
    match cli.cmd {
        Command::Hash(args) => super::hash::run(args, &config()?),
        Command::Issue(args) => super::issue::run(args, &config()?),
        Command::Verify(args) => super::verify::run(args, &config()?),
        Command::Compare(args) => super::compare::run(args, &config()?),
        Command::Lookup(args) => super::lookup::run(args, &config()?),
        Command::List(args) => super::list::run(args, &config()?),
        Command::Qr(args) => super::qr::run(args, &config()?),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
