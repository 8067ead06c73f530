use std::io::{self, Read, Write};

use exc_drv::Session;

fn main() {
    #[cfg(feature = "diagnostics")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut source = String::new();
    if io::stdin().read_to_string(&mut source).is_err() {
        // Can't recover the input at all; report the same way any other
        // fatal condition does (spec.md §7) and still exit 0 (spec.md §9).
        let stdout = io::stdout();
        let _ = writeln!(stdout.lock(), "EXIT 1");
        std::process::exit(0);
    }

    let mut session = Session::new(&source);
    let stdout = io::stdout();
    if session.run(stdout.lock()).is_err() {
        eprintln!("error: failed to write instruction stream");
    }

    std::process::exit(0);
}
