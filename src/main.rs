//! CLI entry point for arbor

use std::path::PathBuf;
use std::process;

use arbor::output::should_use_color;
use arbor::{
    Options, OsFileSystem, ResolvedConfig, TreeFormatter, TreeWalker, exit_codes, logging,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(about = "List directory contents as a tree, honoring ignore files")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend at most N levels below the start directory
    #[arg(short = 'd', long = "depth", value_name = "N")]
    depth: Option<usize>,

    /// Exclude entries matching a gitignore-style glob
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN")]
    exclude: Option<String>,

    /// Honor the .gitignore file in the start directory
    #[arg(short = 'g', long = "gitignore")]
    gitignore: bool,

    /// Honor every .*ignore file in the start directory (overrides -g)
    #[arg(short = 'a', long = "allignore")]
    allignore: bool,
}

impl Args {
    fn into_options(self) -> Options {
        Options {
            path: self.path,
            max_depth: self.depth,
            exclude: self.exclude,
            use_gitignore: self.gitignore,
            use_all_ignore_files: self.allignore,
        }
    }
}

fn main() {
    logging::init();
    let options = Args::parse().into_options();
    let fs = OsFileSystem;

    let config = match ResolvedConfig::resolve(&options, &fs) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("arbor: error[{}]: {}", e.code(), e);
            process::exit(e.exit_code());
        }
    };

    let mut formatter = TreeFormatter::stdout(should_use_color(&config.display));
    let walker = TreeWalker::new(&config, &fs);
    if let Err(e) = walker.walk(&mut formatter) {
        eprintln!("arbor: error writing output: {}", e);
        process::exit(exit_codes::OUTPUT);
    }
    process::exit(exit_codes::OK);
}
