//! rTimesheet main entrypoint.

use rtimesheet::run;
use rtimesheet::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
