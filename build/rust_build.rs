/**
 * Generates the rust code for resources/countrymetadata.proto and makes sure
 * the text-format country tables next to it are present and sane.
 */

use std::{fs::File, io::{BufRead, BufReader}};

use thiserror::Error;

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("{path}: line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { path: String, line_num: usize, max_len: usize },

    #[error("{path}: no `country` entries found")]
    NoCountries { path: String },
}

/// Reads a text-format metadata file line by line and counts `country`
/// blocks. The real parsing happens at runtime through `protobuf::text_format`,
/// here we only want to fail the build early on an obviously broken file.
fn check_metadata_file(path: &str) -> Result<usize, BuildError> {
    println!("cargo:rerun-if-changed={}", path);

    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;
    let mut countries = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }
        if bytes_read > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                path: path.to_string(),
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.starts_with("country ") || line.starts_with("country{") {
            countries += 1;
        }
    }

    if countries == 0 {
        return Err(BuildError::NoCountries { path: path.to_string() });
    }
    Ok(countries)
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed=resources/countrymetadata.proto");
    protobuf_codegen::Codegen::new()
        .pure()
        .includes(["resources"])
        .input("resources/countrymetadata.proto")
        .cargo_out_dir("proto_gen")
        .run_from_script();

    check_metadata_file("resources/countrymetadata.textproto")?;
    check_metadata_file("resources/test_countrymetadata.textproto")?;
    Ok(())
}
