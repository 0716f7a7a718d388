use std::env::args_os;
use std::panic;
use std::process::ExitCode;

use nist_downsampler::{downsample_image, Arguments, CLIParser, Error, Invocation};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    match cli_parser.parse(args_os()) {
        Ok(Invocation::Help) => {
            eprintln!("{}", cli_parser.usage());
            ExitCode::SUCCESS
        }
        Ok(Invocation::Downsample(arguments)) => run(&mut cli_parser, &arguments),
        Err(e) => report_usage_error(&mut cli_parser, &e),
    }
}

fn report_usage_error(cli_parser: &mut CLIParser, error: &Error) -> ExitCode {
    eprintln!("ERROR: {}", error);
    eprintln!("{}", cli_parser.usage());
    ExitCode::FAILURE
}

fn run(cli_parser: &mut CLIParser, arguments: &Arguments) -> ExitCode {
    let input_file = arguments.input_file().display();
    match panic::catch_unwind(|| downsample_image(arguments)) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(e)) if e.requires_usage() => report_usage_error(cli_parser, &e),
        Ok(Err(e)) => {
            eprintln!(
                "ERROR: {}\nEncountered while processing file: {}",
                e, input_file
            );
            ExitCode::FAILURE
        }
        Err(_) => {
            eprintln!(
                "Encountered an unknown exception while processing file: {}",
                input_file
            );
            ExitCode::FAILURE
        }
    }
}
