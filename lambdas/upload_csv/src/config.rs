use figment::providers::Env;
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Config {
    pub bucket_name: String,
    pub table_name: String,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::raw().only(&["BUCKET_NAME", "TABLE_NAME"]))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn when_both_variables_set_should_load() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("BUCKET_NAME", "drug-uploads");
            jail.set_env("TABLE_NAME", "drug-records");

            let config = Config::load()?;

            assert_eq!(config.bucket_name, "drug-uploads");
            assert_eq!(config.table_name, "drug-records");
            Ok(())
        });
    }

    #[test]
    fn when_bucket_missing_should_fail() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TABLE_NAME", "drug-records");

            assert!(Config::load().is_err());
            Ok(())
        });
    }

    #[test]
    fn when_table_missing_should_fail() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("BUCKET_NAME", "drug-uploads");

            assert!(Config::load().is_err());
            Ok(())
        });
    }
}
