use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use log::{error, info};
use pdf_protect::{
    DirectorySink, FsFileSource, PasswordProtectionRequest, parse_file_paths, run_batch,
};

#[derive(Parser, Debug)]
#[command(version, about = "Produce password-protected copies of PDF files")]
struct Cli {
    /// Source PDF paths, separated by `;`
    #[arg(short = 'i', long = "input", value_name = "PATHS", required = true)]
    input: String,

    /// Password applied as both owner and user password
    #[arg(short = 'p', long = "password", value_name = "PASSWORD", required = true)]
    password: String,

    /// Directory receiving the protected copies
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let source_files = parse_file_paths(&cli.input);
    if source_files.is_empty() {
        info!("no source files given, nothing to do");
        return;
    }

    let request = PasswordProtectionRequest {
        source_files,
        password: cli.password,
    };
    let mut sink = DirectorySink::new(cli.output_dir);

    match run_batch(&request, &FsFileSource, &mut sink) {
        Ok(result) => {
            info!("protected {} file(s)", result.len());
            println!("{}", result.to_delimited());
        }
        Err(err) => {
            error!("{err}");
            exit(1);
        }
    }
}
