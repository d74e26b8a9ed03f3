use clap::Parser;
use urltally::{analyze, utils, Args};

fn main() {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    if let Err(e) = analyze::run(&args) {
        println!("Error:{}", e);
        std::process::exit(1);
    }
}
