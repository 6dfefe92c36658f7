use super::args::*;
use crate::exit_codes::SUCCESS;

pub(crate) mod judge_builder;
pub(crate) mod ping;
pub(crate) mod run;
pub(crate) mod sanity;
pub(crate) mod score;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Run(args) => run::run(args).await,
        Command::Score(args) => score::run(args).await,
        Command::Sanity(args) => sanity::run(args).await,
        Command::Ping(args) => ping::run(args).await,
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
