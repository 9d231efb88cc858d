//! runcalc main entrypoint.

use runcalc::run;
use runcalc::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
