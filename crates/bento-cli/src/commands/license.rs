//! License flag - print the license line.

use crate::config::CliConfig;

pub(crate) fn run(config: &CliConfig) -> miette::Result<()> {
    println!("{}", license_line(config));
    Ok(())
}

fn license_line(config: &CliConfig) -> String {
    format!("Apache License 2.0, Copyright {} the Bento authors", config.year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_uses_configured_year() {
        let config = CliConfig {
            year: "2031".to_string(),
            ..CliConfig::default()
        };
        assert_eq!(
            license_line(&config),
            "Apache License 2.0, Copyright 2031 the Bento authors"
        );
    }
}
