use jniheaders::error::exit_on_err;
use jniheaders::{cli, logging};

fn main() {
    logging::setup("jniheaders");
    exit_on_err(color_eyre::install().and_then(|_| cli::run()));
}
