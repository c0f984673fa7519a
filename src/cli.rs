use crate::{
    base58,
    batcher::Batcher,
    configuration::{Configuration, Format, Mode, Output},
    error::Error,
    hex,
    logger::{Logger, PartialLogger},
    thread_pool::SequentialThreadPool,
};
use regex::bytes::Regex;
use serde::Serialize;
use std::{
    borrow::Cow,
    io::{Read, Write},
};

/// One unit of work read from stdin and the outcome of converting it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Record {
    input: Vec<u8>,
    result: Result<Vec<u8>, String>,
}

impl Record {
    pub fn input(&self) -> &[u8] {
        &self.input
    }

    pub fn result(&self) -> Result<&[u8], &str> {
        self.result.as_deref().map_err(String::as_str)
    }
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    input: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

pub struct Tokenizer {
    regex: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            regex: Regex::new(r"(?-u)\S+")?,
        })
    }

    pub fn tokens(&self, input: &[u8]) -> Vec<Vec<u8>> {
        self.regex.find_iter(input).map(|token| token.as_bytes().to_vec()).collect()
    }
}

/// Converts a single item according to the mode and the byte representation.
pub fn convert(mode: Mode, format: Format, input: &[u8]) -> Result<Vec<u8>, Error> {
    match (mode, format) {
        (Mode::Encode, Format::Hex) => Ok(base58::encode(hex::decode(input)?).into_bytes()),
        (Mode::Encode, Format::Raw) => Ok(base58::encode(input).into_bytes()),
        (Mode::Decode, format) => {
            let input = std::str::from_utf8(input).map_err(|_| Error::new("Input is not valid UTF-8"))?;
            let bytes = base58::decode(input)?;
            Ok(match format {
                Format::Hex => hex::encode(bytes).into_bytes(),
                Format::Raw => bytes,
            })
        }
    }
}

/// Splits stdin into the items to convert. Raw bytes to encode form a single item, everything else is
/// whitespace-separated tokens.
pub fn split_items(configuration: &Configuration, input: Vec<u8>) -> Result<Vec<Vec<u8>>, Error> {
    match (configuration.mode(), configuration.format()) {
        (Mode::Encode, Format::Raw) => Ok(vec![input]),
        _ => Ok(Tokenizer::new()?.tokens(&input)),
    }
}

pub fn convert_all(configuration: &Configuration, items: Vec<Vec<u8>>, logger: &Logger) -> Vec<Record> {
    let (mode, format) = (configuration.mode(), configuration.format());
    let process = move |batch: Vec<Vec<u8>>| {
        batch
            .into_iter()
            .map(|input| {
                let result = convert(mode, format, &input).map_err(|error| error.message().to_string());
                Record { input, result }
            })
            .collect::<Vec<_>>()
    };
    let batches = Batcher::new(items, configuration.batch_size());
    let mut partial_logger = PartialLogger::new(16, logger);
    let mut records = Vec::new();
    for batch in SequentialThreadPool::new(configuration.threads(), process, batches) {
        partial_logger.log(|index| format!("converted batch {} ({} items)", index, batch.len()));
        records.extend(batch);
    }
    records
}

/// Writes one record. Returns whether the conversion succeeded.
pub fn write_record(output: Output, record: &Record, stdout: &mut impl Write, stderr: &mut impl Write) -> Result<bool, Error> {
    let input = String::from_utf8_lossy(&record.input);
    match output {
        Output::Json => {
            let json = match &record.result {
                Ok(bytes) => JsonRecord {
                    input,
                    output: Some(String::from_utf8_lossy(bytes)),
                    error: None,
                },
                Err(error) => JsonRecord {
                    input,
                    output: None,
                    error: Some(error),
                },
            };
            serde_json::to_writer(&mut *stdout, &json)?;
            writeln!(stdout)?;
        }
        Output::Plain => match &record.result {
            Ok(bytes) => {
                stdout.write_all(bytes)?;
                writeln!(stdout)?;
            }
            Err(error) => writeln!(stderr, "{}: {}", input, error)?,
        },
    }
    Ok(record.result.is_ok())
}

/// Converts everything read from `stdin`. Returns `Ok(false)` if any item failed to convert.
pub fn run(configuration: &Configuration, mut stdin: impl Read, mut stdout: impl Write, mut stderr: impl Write) -> Result<bool, Error> {
    let logger = Logger::new(configuration.verbose());
    let mut input = Vec::new();
    stdin.read_to_end(&mut input)?;
    logger.log(format!("read {} bytes", input.len()));

    let items = split_items(configuration, input)?;
    logger.log(format!("converting {} items on {} threads", items.len(), configuration.threads()));
    let records = convert_all(configuration, items, &logger);

    let mut success = true;
    for record in &records {
        success &= write_record(configuration.output(), record, &mut stdout, &mut stderr)?;
    }
    stdout.flush()?;
    logger.log(format!("done ({} failed)", records.iter().filter(|record| record.result.is_err()).count()));
    Ok(success)
}
