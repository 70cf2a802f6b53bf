use clap::Parser;
use csvbind::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(_stats) => {
            // Rows and summary have already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Name the failing stage when the error came from the binder
            match error.downcast_ref::<csvbind::Error>() {
                Some(bind_error) => {
                    eprintln!("Error ({}): {:#}", bind_error.category(), error)
                }
                None => eprintln!("Error: {:#}", error),
            }
            process::exit(1);
        }
    }
}
