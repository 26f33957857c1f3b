use anyhow::Result;
use clap::Parser;
use pinreqs::commands::{self, config::ConfigOverrides};
use std::path::PathBuf;

/// pinreqs - minimal requirements for a Python project
///
/// Pins the packages a project actually imports, plus their imported
/// dependencies, to the versions installed in the active environment.
///
/// Needs `pip`, `pipreqs` and `pipdeptree` on PATH (or set via options).
///
/// Examples:
///   pinreqs --src ./my_app                    # writes requirements_for_my_app.txt
///   pinreqs --src ./my_app --rm-cuda-postfix  # torch==2.1.0+cu121 -> torch==2.1.0
#[derive(Parser, Debug)]
#[command(author, version = env!("PINREQS_VERSION"), about)]
struct Cli {
    /// Project directory to scan for imports
    #[arg(long, value_name = "PATH")]
    src: PathBuf,

    /// Remove CUDA build tags (e.g. "+cu121") from pinned versions
    #[arg(long = "rm-cuda-postfix", alias = "rm_cuda_postfix")]
    rm_cuda_postfix: bool,

    /// Follow every dependency of the imported packages, not only those the
    /// project imports itself
    #[arg(long)]
    transitive: bool,

    /// File of packages to always include, one "name==version" per line
    #[arg(long, env = "PINREQS_NECESSARY", value_name = "PATH")]
    necessary: Option<PathBuf>,

    /// Output file (defaults to requirements_for_<project>.txt)
    #[arg(long, short = 'o', env = "PINREQS_OUTPUT", value_name = "PATH")]
    output: Option<PathBuf>,

    /// pip executable (also via PINREQS_PIP)
    #[arg(long, value_name = "PROGRAM")]
    pip: Option<String>,

    /// pipreqs executable (also via PINREQS_PIPREQS)
    #[arg(long, value_name = "PROGRAM")]
    pipreqs: Option<String>,

    /// pipdeptree executable (also via PINREQS_PIPDEPTREE)
    #[arg(long, value_name = "PROGRAM")]
    pipdeptree: Option<String>,
}

impl From<Cli> for ConfigOverrides {
    fn from(cli: Cli) -> Self {
        ConfigOverrides {
            src: cli.src,
            output: cli.output,
            necessary: cli.necessary,
            rm_cuda_postfix: cli.rm_cuda_postfix,
            transitive: cli.transitive,
            pip: cli.pip,
            pipreqs: cli.pipreqs,
            pipdeptree: cli.pipdeptree,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = pinreqs::runtime::RealRuntime;

    commands::make(runtime, cli.into())
}
