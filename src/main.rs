use std::process::ExitCode;

fn main() -> ExitCode {
    match example_package::run() {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}
