use std::{env, error, fmt, str::FromStr};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Encode,
    Decode,
}

/// Representation of the byte side of a conversion on stdin/stdout.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Format {
    Hex,
    Raw,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Output {
    Plain,
    Json,
}

#[derive(Debug)]
pub struct ParseError;

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unrecognized value")
    }
}

impl error::Error for ParseError {}

impl FromStr for Mode {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, ParseError> {
        match value {
            "encode" => Ok(Mode::Encode),
            "decode" => Ok(Mode::Decode),
            _ => Err(ParseError),
        }
    }
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, ParseError> {
        match value {
            "hex" => Ok(Format::Hex),
            "raw" => Ok(Format::Raw),
            _ => Err(ParseError),
        }
    }
}

impl FromStr for Output {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, ParseError> {
        match value {
            "plain" => Ok(Output::Plain),
            "json" => Ok(Output::Json),
            _ => Err(ParseError),
        }
    }
}

fn parse_flag(value: &str) -> Result<bool, ParseError> {
    match value {
        "1" | "true" => Ok(true),
        "0" | "false" | "" => Ok(false),
        _ => Err(ParseError),
    }
}

fn parse_positive(value: &str) -> Result<usize, ParseError> {
    match value.parse() {
        Ok(0) | Err(_) => Err(ParseError),
        Ok(value) => Ok(value),
    }
}

#[derive(Debug, Clone)]
pub struct Configuration {
    mode: Mode,
    format: Format,
    output: Output,
    threads: usize,
    batch_size: usize,
    verbose: bool,
}

struct Variables<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> Variables<F> {
    fn var(&self, key: &str, default: Option<String>) -> Result<String, String> {
        match (self.lookup)(key) {
            Some(value) => Ok(value),
            None => default.ok_or(format!("Missing {}", key)),
        }
    }

    fn var_map<T, E: error::Error>(&self, key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, String> {
        match self.var(key, None) {
            Ok(value) => f(&value).map_err(|_| format!("Invalid {} {}", key, value)),
            Err(err) => default.ok_or(err),
        }
    }
}

impl Configuration {
    /// Reads the configuration from the process environment.
    pub fn new() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let variables = Variables { lookup };
        let mode = variables.var_map("MODE", |mode| mode.parse(), Some(Mode::Encode))?;
        let format = variables.var_map("FORMAT", |format| format.parse(), Some(Format::Hex))?;
        let output = variables.var_map("OUTPUT", |output| output.parse(), Some(Output::Plain))?;
        let threads = variables.var_map("THREADS", parse_positive, Some(1))?;
        let batch_size = variables.var_map("BATCH_SIZE", parse_positive, Some(1024))?;
        let verbose = variables.var_map("VERBOSE", parse_flag, Some(false))?;
        Ok(Self {
            mode,
            format,
            output,
            threads,
            batch_size,
            verbose,
        })
    }

    /// Overrides the mode with a command line argument.
    pub fn with_mode_argument(mut self, argument: Option<&str>) -> Result<Self, String> {
        if let Some(argument) = argument {
            self.mode = argument.parse().map_err(|_| format!("Invalid mode {}", argument))?;
        }
        Ok(self)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn output(&self) -> Output {
        self.output
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::{Configuration, Format, Mode, Output};
    use std::collections::HashMap;

    fn configuration(variables: &[(&str, &str)]) -> Result<Configuration, String> {
        let variables: HashMap<String, String> = variables.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Configuration::from_lookup(|key| variables.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let configuration = configuration(&[]).unwrap();
        assert_eq!(configuration.mode(), Mode::Encode);
        assert_eq!(configuration.format(), Format::Hex);
        assert_eq!(configuration.output(), Output::Plain);
        assert_eq!(configuration.threads(), 1);
        assert_eq!(configuration.batch_size(), 1024);
        assert!(!configuration.verbose());
    }

    #[test]
    fn variables() {
        let configuration = configuration(&[
            ("MODE", "decode"),
            ("FORMAT", "raw"),
            ("OUTPUT", "json"),
            ("THREADS", "4"),
            ("BATCH_SIZE", "16"),
            ("VERBOSE", "1"),
        ])
        .unwrap();
        assert_eq!(configuration.mode(), Mode::Decode);
        assert_eq!(configuration.format(), Format::Raw);
        assert_eq!(configuration.output(), Output::Json);
        assert_eq!(configuration.threads(), 4);
        assert_eq!(configuration.batch_size(), 16);
        assert!(configuration.verbose());
    }

    #[test]
    fn invalid() {
        assert_eq!(configuration(&[("MODE", "check")]).err(), Some("Invalid MODE check".to_string()));
        assert_eq!(configuration(&[("THREADS", "0")]).err(), Some("Invalid THREADS 0".to_string()));
        assert_eq!(configuration(&[("VERBOSE", "yes")]).err(), Some("Invalid VERBOSE yes".to_string()));
    }

    #[test]
    fn mode_argument() {
        let configuration = configuration(&[("MODE", "encode")]).unwrap();
        assert_eq!(configuration.clone().with_mode_argument(None).unwrap().mode(), Mode::Encode);
        assert_eq!(configuration.clone().with_mode_argument(Some("decode")).unwrap().mode(), Mode::Decode);
        assert_eq!(configuration.with_mode_argument(Some("x")).err(), Some("Invalid mode x".to_string()));
    }
}
