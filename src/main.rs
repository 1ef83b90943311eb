//! rTimewatch main entrypoint.

use rtimewatch::run;
use rtimewatch::ui::messages::{error, fatal};

fn main() {
    println!();
    if let Err(e) = run() {
        if e.is_store_error() {
            fatal(&e);
        } else {
            error(format!("Error: {}", e));
        }
        std::process::exit(1);
    }
}
