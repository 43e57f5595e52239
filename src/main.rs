//! timecheck main entrypoint.

use timecheck::run;
use timecheck::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
