use clap::Parser;
use trajagg::app::TrajaggCliArguments;

fn main() {
    env_logger::init();
    let args = TrajaggCliArguments::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running trajagg: {e}");
            std::process::exit(1);
        }
    }
}
