use std::process::ExitCode;

fn main() -> Result<ExitCode, anyhow::Error> {
    pretty_env_logger::init();

    quill::run_with_args(std::env::args_os()).map(Into::into)
}
