use multisum::cli;
use multisum::error::SumError;

fn main() {
    // usage errors exit 2, everything else 1
    if let Err(err) = cli::run() {
        eprintln!("error: {err}");
        let code = match err.downcast_ref::<SumError>() {
            Some(SumError::Usage { .. }) => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}
