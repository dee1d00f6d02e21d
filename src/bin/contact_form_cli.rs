use std::{env, path::PathBuf, process};

use contact_form::{cli::run_cli, init};

fn main() {
    init();

    let config_path = env::args_os().nth(1).map(PathBuf::from);
    if let Err(err) = run_cli(config_path) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
