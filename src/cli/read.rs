use std::{fs::File, io::BufReader, path::Path};

use marten_sat::{builder::ParserInfo, context::Context, misc::log::targets, types::err::ErrorKind};

pub(super) enum ReadError {
    FailedToOpen(String),
    ParseError(ErrorKind),
    #[cfg_attr(feature = "xz", allow(dead_code))]
    Unsupported(String),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::FailedToOpen(path) => write!(f, "Failed to open '{path}'."),
            Self::ParseError(err) => write!(f, "{err}."),
            Self::Unsupported(path) => write!(f, "Reading '{path}' requires the xz feature."),
        }
    }
}

/// Reads the DIMACS formula at `path` (or stdin, if no path is given) to `context`.
pub(super) fn read_dimacs(path: Option<&Path>, context: &mut Context) -> Result<ParserInfo, ReadError> {
    let Some(path) = path else {
        log::info!(target: targets::PARSE, "Reading DIMACS from stdin");
        return context.read_dimacs(std::io::stdin().lock()).map_err(ReadError::ParseError);
    };

    log::info!(target: targets::PARSE, "Reading DIMACS from {path:?}");

    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen(path.display().to_string())),
    };

    let parse_report = match path.extension() {
        Some(extension) if extension == "xz" => {
            #[cfg(feature = "xz")]
            {
                context.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
            }
            #[cfg(not(feature = "xz"))]
            return Err(ReadError::Unsupported(path.display().to_string()));
        }

        _ => context.read_dimacs(BufReader::new(&file)),
    };

    parse_report.map_err(ReadError::ParseError)
}
