use crate::error::Error;
use crate::Arguments;
use clap::{crate_description, crate_name, value_parser, Arg, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

const HELP_ARGUMENTS: [&str; 4] = ["-h", "-help", "?", "--help"];

/// What the command line asks for.
#[derive(Debug)]
pub enum Invocation {
    Help,
    Downsample(Arguments),
}

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> crate::Result<Invocation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let arguments: Vec<OsString> = itr.into_iter().map(Into::into).collect();
        if Self::is_help_request(&arguments) {
            return Ok(Invocation::Help);
        }
        let matches = self
            .command
            .try_get_matches_from_mut(arguments)
            .map_err(|e| {
                Error::InvalidArguments(
                    e.kind().as_str().unwrap_or("Invalid arguments").to_owned(),
                )
            })?;
        Ok(Invocation::Downsample(Self::extract_arguments(&matches)))
    }

    pub fn usage(&mut self) -> String {
        self.command.render_help().to_string()
    }

    // the first argument asks for help, whatever follows it
    fn is_help_request(arguments: &[OsString]) -> bool {
        if arguments.len() > 3 {
            return false;
        }
        arguments
            .get(1)
            .and_then(|argument| argument.to_str())
            .is_some_and(|argument| HELP_ARGUMENTS.contains(&argument))
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        Self::register_output_file_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .about(crate_description!())
            .after_help("Output image must be .PGM")
            .disable_help_flag(true)
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to the input image (PGM, PPM, PNG, JPEG, BMP or TIFF)")
            .value_name("INPUT IMAGE")
            .value_parser(value_parser!(PathBuf))
            .allow_hyphen_values(true)
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path to the PGM output image")
            .value_name("OUTPUT IMAGE")
            .value_parser(value_parser!(PathBuf))
            .allow_hyphen_values(true)
            .required(true)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .expect("Required argument output_file not provided")
            .clone()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
