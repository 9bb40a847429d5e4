use clap::ArgMatches;

pub mod generate;
pub mod grid;
pub mod solve;

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use taskplan_core::utils::{GenericError, GenericResult, InfoLogger};

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

pub(crate) fn create_logger(is_enabled: bool) -> InfoLogger {
    if is_enabled { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_: &str| {}) }
}

fn get_path(matches: &ArgMatches, arg_name: &str) -> GenericResult<PathBuf> {
    matches
        .get_one::<String>(arg_name)
        .map(PathBuf::from)
        .ok_or_else(|| GenericError::from(format!("missing '{arg_name}' argument")))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> GenericResult<Option<T>> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| GenericError::from(format!("cannot get integer value, error: '{err}': '{arg_desc}'")))
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_list_value<T>(matches: &ArgMatches, arg_name: &str, arg_desc: &str) -> GenericResult<Option<Vec<T>>>
where
    T: FromStr,
    T::Err: Display,
{
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.split(',')
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(|value| {
                    value.parse::<T>().map_err(|err| GenericError::from(format!("cannot parse '{arg_desc}': {err}")))
                })
                .collect::<GenericResult<Vec<_>>>()
                .map(Some)
        })
        .unwrap_or(Ok(None))
}
