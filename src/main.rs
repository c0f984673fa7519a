use base58_codec::{cli, configuration::Configuration};
use std::{env, io, process};

fn main() {
    let argument = env::args().nth(1);
    let configuration = match Configuration::new().and_then(|configuration| configuration.with_mode_argument(argument.as_deref())) {
        Ok(configuration) => configuration,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    match cli::run(&configuration, io::stdin().lock(), io::stdout().lock(), io::stderr().lock()) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    }
}
