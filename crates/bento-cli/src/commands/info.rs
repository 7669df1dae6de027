//! Info command - show information about the Bento installation.

use crate::config::CliConfig;

pub(crate) fn run(config: &CliConfig) -> miette::Result<()> {
    println!("Bento Programming Language");
    println!("==========================");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Components:");
    println!("  bento-lexer    - Tokenization");
    println!();

    println!("Language:");
    println!("  Source files:  *.bento");
    println!("  Keywords:      {}", keyword_list());
    println!("  Patterns:      {}", bento_lexer::patterns().len());
    println!();

    println!("Website: {}", config.website);

    Ok(())
}

fn keyword_list() -> String {
    bento_lexer::KEYWORDS
        .iter()
        .map(|(spelling, _)| *spelling)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_list() {
        let list = keyword_list();
        assert!(list.starts_with("imp from var"));
        assert!(list.ends_with("break contin ret"));
    }
}
