//! Run command - tokenize a Bento file and print its tokens.

use crate::diagnostic::LexDiagnostic;
use bento_lexer::Token;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension every Bento source file must carry.
const SOURCE_EXTENSION: &str = "bento";

pub fn run(file: &Path) -> miette::Result<()> {
    let path = source_path(file)?;
    let source = fs::read_to_string(&path)
        .map_err(|e| miette::miette!("Failed to read the input file `{}`: {}", path.display(), e))?;

    tracing::debug!(path = %path.display(), bytes = source.len(), "tokenizing");

    let name = file.display().to_string();
    let tokens = bento_lexer::tokenize(&source, &name)
        .map_err(|err| LexDiagnostic::new(&err, &source))?;

    print!("{}", render_tokens(&tokens));
    Ok(())
}

/// Resolve `file` to an absolute path of an existing `.bento` file.
fn source_path(file: &Path) -> miette::Result<PathBuf> {
    let path = if file.is_absolute() {
        file.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| {
                miette::miette!("Failed to resolve the input file path `{}`: {}", file.display(), e)
            })?
            .join(file)
    };

    if !path.exists() {
        return Err(miette::miette!(
            "The input file `{}` doesn't exist",
            path.display()
        ));
    }
    if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
        return Err(miette::miette!(
            "`{}` isn't a legal Bento source file",
            path.display()
        ));
    }

    Ok(path)
}

/// One token per line, in debug form.
fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().map(|token| format!("{}\n", token)).collect()
}
