//! Write the generated header/source pair into the output directory.

use crate::generator::GeneratedFile;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub fn emit(generated: &GeneratedFile, out_dir: &Path) -> io::Result<()> {
    let header_path = out_dir.join(format!("{}_UE.h", generated.base));
    let mut header = File::create(&header_path)?;
    header.write_all(generated.header.as_bytes())?;

    let source_path = out_dir.join(format!("{}_UE.cpp", generated.base));
    let mut source = File::create(&source_path)?;
    source.write_all(generated.source.as_bytes())?;

    tracing::info!(
        header = %header_path.display(),
        source = %source_path.display(),
        "bindings written"
    );

    Ok(())
}
